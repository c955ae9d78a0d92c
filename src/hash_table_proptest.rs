#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can use the
// same pinned hashers as the unit tests.

use crate::config::TableConfig;
use crate::hash_table::{HashTable, Probe};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Get(usize),
    GetAny(String),
    Mutate(usize, i32),
    Reserve(usize),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => idx.clone().prop_map(Op::Get),
            1 => "[a-z]{0,5}".prop_map(Op::GetAny),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => (0usize..64).prop_map(Op::Reserve),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Every key hashes to the same value near the end of small tables, so
// probes run off the end and force growth constantly.
#[derive(Clone, Default)]
struct TailBuildHasher;
struct TailHasher;
impl BuildHasher for TailBuildHasher {
    type Hasher = TailHasher;
    fn build_hasher(&self) -> TailHasher {
        TailHasher
    }
}
impl Hasher for TailHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        127
    }
}

fn run<S: BuildHasher>(
    mut sut: HashTable<i32, S>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let lf = sut.config().load_factor;
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = &pool[i];
                let before = sut.len();
                let prev = sut.insert(k, v).expect("small tables always allocate");
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                if prev.is_some() {
                    prop_assert_eq!(sut.len(), before, "upsert must not change len");
                }
                prop_assert_eq!(sut.get(k), Some(&v));
            }
            Op::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            Op::GetAny(k) => {
                prop_assert_eq!(sut.get(&k), model.get(&k));
                match sut.probe(&k) {
                    Probe::Occupied(_) => {
                        prop_assert!(model.contains_key(&k));
                    }
                    Probe::Vacant(_) | Probe::Exhausted => {
                        prop_assert!(!model.contains_key(&k));
                    }
                }
            }
            Op::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(s), Some(m)) => {
                        *s = s.wrapping_add(d);
                        *m = m.wrapping_add(d);
                    }
                    (None, None) => {}
                    (s, m) => {
                        prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m);
                    }
                }
            }
            Op::Reserve(n) => {
                let cap = sut.capacity();
                sut.reserve(n).expect("small reservations succeed");
                prop_assert!(sut.capacity() >= cap, "capacity never shrinks");
                if n > 0 {
                    prop_assert!(sut.capacity() as f64 * lf >= n as f64);
                }
            }
            Op::Iterate => {
                let seen: BTreeMap<String, i32> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let expected: BTreeMap<String, i32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen, expected);
            }
        }

        // Post-conditions after each op.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.len() <= sut.capacity() || sut.capacity() == 0);
        prop_assert!(sut.load_factor() <= lf + 1e-12);
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap
// with the default FNV-1a hasher.
// - insert is an upsert returning the replaced value.
// - get/get_mut/probe agree with the model on presence.
// - len parity and the load-factor bound hold after every op.
// - every model entry stays reachable across rehashes.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run(HashTable::new(), &pool, ops)?;
    }
}

// Property: same invariants when every key collides near the end of the
// array, so most inserts go through forced growth.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_tail_collisions((pool, ops) in arb_scenario()) {
        run(HashTable::with_hasher(TailBuildHasher), &pool, ops)?;
    }
}

// Property: same invariants with a tight, non-default configuration.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_small_config((pool, ops) in arb_scenario(), lf in 0.25f64..=1.0) {
        let config = TableConfig::new().initial_capacity(1).load_factor(lf);
        run(HashTable::try_with_config(config).unwrap(), &pool, ops)?;
    }
}
