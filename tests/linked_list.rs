// LinkedList integration suite.
//
// Invariants exercised:
// - Ends: head is None iff tail is None.
// - Links: walking forward from head is the reverse of walking backward
//   from tail.
// - Ids: a NodeId resolves until its own node is popped.
use simple_collections::LinkedList;

fn walk_forward<T: Copy>(l: &LinkedList<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cur = l.head();
    while let Some(n) = cur {
        out.push(*n.data());
        cur = n.next();
    }
    out
}

fn walk_backward<T: Copy>(l: &LinkedList<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cur = l.tail();
    while let Some(n) = cur {
        out.push(*n.data());
        cur = n.prev();
    }
    out
}

// Test: the reference scenario.
// Verifies: push_back(A, B, C), push_front(Q), pop_back, pop_front leaves [A, B].
#[test]
fn push_pop_scenario() {
    let mut l = LinkedList::new();
    for c in ['A', 'B', 'C'] {
        l.push_back(c);
    }
    l.push_front('Q');
    l.pop_back();
    l.pop_front();
    assert_eq!(walk_forward(&l), ['A', 'B']);
    assert_eq!(walk_backward(&l), ['B', 'A']);
}

// Test: draining from both ends.
// Verifies: values come out in order and the list ends empty at both ends.
#[test]
fn drain_from_both_ends() {
    let mut l = LinkedList::new();
    for i in 0..6 {
        l.push_back(i);
    }
    assert_eq!(l.pop_front(), Some(0));
    assert_eq!(l.pop_back(), Some(5));
    assert_eq!(l.pop_front(), Some(1));
    assert_eq!(l.pop_back(), Some(4));
    assert_eq!(l.pop_front(), Some(2));
    assert_eq!(l.pop_back(), Some(3));
    assert_eq!(l.pop_back(), None);
    assert!(l.head().is_none());
    assert!(l.tail().is_none());
}

// Test: node handles.
// Verifies: ids returned by push resolve to their values and neighbours.
#[test]
fn node_handles_resolve_neighbours() {
    let mut l = LinkedList::new();
    let a = l.push_back("a");
    let b = l.push_back("b");
    let z = l.push_front("z");
    let nb = l.node(b).unwrap();
    assert_eq!(nb.prev().map(|n| n.id()), Some(a));
    assert!(nb.next().is_none());
    assert_eq!(l.node(a).unwrap().prev().map(|n| n.id()), Some(z));
    assert_eq!(l.len(), 3);
    let values: Vec<&str> = l.iter().copied().collect();
    assert_eq!(values, ["z", "a", "b"]);
}

// Test: values that own heap memory are dropped exactly once.
#[test]
fn owned_values_drop_cleanly() {
    use std::rc::Rc;
    let tracker = Rc::new(());
    let mut l = LinkedList::new();
    for _ in 0..10 {
        l.push_back(Rc::clone(&tracker));
        l.push_front(Rc::clone(&tracker));
    }
    assert_eq!(Rc::strong_count(&tracker), 21);
    drop(l.pop_back());
    assert_eq!(Rc::strong_count(&tracker), 20);
    l.clear_and_release();
    assert_eq!(Rc::strong_count(&tracker), 1);
}
