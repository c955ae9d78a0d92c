//! simple-collections: a growable array, a doubly-linked list, and an
//! open-addressing hash table with string keys.
//!
//! Internal Design:
//!
//! Summary
//! - `DynArray<T>`: contiguous buffer with deterministic grow-by-doubling
//!   (first allocation 16 slots). Amortized O(1) push.
//! - `LinkedList<T>`: doubly-linked list whose nodes live in a slot map
//!   and are linked by generational `NodeId`s.
//! - `HashTable<V, S>`: open-addressing map from `&str` keys to `V`,
//!   linear probing without wrap-around, FNV-1a by default, grows by
//!   doubling under a load-factor threshold (default 0.75).
//! - `StringBuilder`: `DynArray<u8>` holding UTF-8, with formatted append.
//!
//! Constraints
//! - Single-threaded and unsynchronised; the table is `!Sync`.
//! - Growth is fallible: array, string builder and table allocation
//!   failures come back as `Error::OutOfMemory` or
//!   `Error::CapacityOverflow` and leave the structure unchanged. List
//!   nodes go through the slot map and abort on allocation failure like
//!   any std collection.
//! - No removal from the table, no shrinking, no iteration-order
//!   guarantees.
//!
//! Borrowing and growth
//! - Any operation that may grow (`push`, `reserve`, `insert`) can move
//!   the backing storage. References returned by lookups borrow the
//!   structure, so the borrow checker rejects holding them across such a
//!   call. Table slot indices and array indices are plain numbers and are
//!   only meaningful until the next growth; list `NodeId`s stay valid
//!   until their own node is popped.
//!
//! Table growth in detail
//! - Each insert first reserves room for `len() + 1` entries under the
//!   load factor, then probes. A probe that reaches the end of the slot
//!   array without finding the key or an empty slot doubles the capacity
//!   and retries.
//! - Slots store the hash computed at insertion. Rehash reuses it, so the
//!   hasher is never called while the slot array is being rebuilt.
//!
//! Diagnostics
//! - Growth events are reported through `tracing` (`debug` for table
//!   rehashes and forced growth, `trace` for array reallocation and the
//!   first table allocation). No subscriber is installed by the crate.
//!
//! Reentrancy
//! - The only user code a table runs is its `BuildHasher`. Public table
//!   methods hold a debug-only guard; a hasher that re-enters its own table
//!   panics in debug builds.

pub mod config;
pub mod dyn_array;
pub mod error;
pub mod fnv;
mod growth;
mod guard;
pub mod hash_table;
mod hash_table_proptest;
pub mod linked_list;
pub mod string_builder;

// Public surface
pub use config::{TableConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use dyn_array::DynArray;
pub use error::{ConfigError, Error};
pub use fnv::{fnv1a_32, Fnv1aHasher, FnvBuildHasher};
pub use hash_table::{HashTable, Probe};
pub use linked_list::{LinkedList, NodeId, NodeRef};
pub use string_builder::StringBuilder;
