//! HashTable: open-addressing map from string keys to `V`.
//!
//! Layout
//! - One contiguous slot array; a slot is either empty or holds an owned
//!   copy of its key, the value, and the key's hash.
//! - Slot resolution hashes the key, reduces it modulo the capacity, and
//!   scans forward to the first slot that is empty or holds an equal key.
//!   The scan stops at the end of the array instead of wrapping; running
//!   off the end is reported as `Probe::Exhausted`.
//!
//! Growth
//! - Before every insert the table reserves room for `len() + 1` entries:
//!   capacity doubles (from `initial_capacity` when unallocated) until
//!   `capacity * load_factor >= len() + 1`.
//! - If the probe is still exhausted after that, capacity doubles again
//!   until the key finds a slot.
//! - Rehash reinserts every entry into a fresh array using the stored
//!   hash; the hasher is never called for existing keys. The new array is
//!   allocated before any entry moves, so a failed allocation leaves the
//!   table exactly as it was.
//! - Capacity never shrinks and slots never return to empty except
//!   through `clear_and_release`.
//!
//! Borrowing
//! - `get`/`get_mut`/`slot` hand out borrows into the slot array. Any
//!   insert may rehash and move every entry, so those borrows cannot be
//!   held across it. Slot indices are likewise only meaningful until the
//!   next insert.

use crate::config::TableConfig;
use crate::error::Error;
use crate::fnv::FnvBuildHasher;
use crate::growth::{doubled_capacity, try_copy_str, try_filled};
use crate::guard::BusyFlag;
use core::fmt;
use core::hash::{BuildHasher, Hasher};

/// Outcome of resolving a key to a slot index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Probe {
    /// First empty slot on the key's probe path; the key is absent.
    Vacant(usize),
    /// Slot already holding the key.
    Occupied(usize),
    /// Reached the end of the slot array (or there is none) without finding
    /// either. The table must grow before the key can be stored.
    Exhausted,
}

#[derive(Debug)]
struct Slot<V> {
    key: Box<str>,
    value: V,
    hash: u64,
}

/// Slot storage and the algorithms that only need slots. Kept apart from
/// the hasher and guard so those can stay borrowed while slots mutate.
struct RawTable<V> {
    slots: Vec<Option<Slot<V>>>,
    count: usize,
}

#[inline]
fn home(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

impl<V> RawTable<V> {
    const fn new() -> Self {
        Self {
            slots: Vec::new(),
            count: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn probe(&self, hash: u64, key: &str) -> Probe {
        let capacity = self.capacity();
        if capacity == 0 {
            return Probe::Exhausted;
        }
        for (i, slot) in self.slots.iter().enumerate().skip(home(hash, capacity)) {
            match slot {
                None => return Probe::Vacant(i),
                Some(s) if &*s.key == key => return Probe::Occupied(i),
                Some(_) => {}
            }
        }
        Probe::Exhausted
    }

    fn reserve(&mut self, expected: usize, config: &TableConfig) -> Result<(), Error> {
        let capacity = self.capacity();
        if config.admits(expected, capacity) {
            return Ok(());
        }
        let target = doubled_capacity(capacity, config.initial_capacity, |c| {
            config.admits(expected, c)
        })?;
        if capacity == 0 {
            self.slots = try_filled(target, || None)?;
            tracing::trace!(capacity = target, "hash table slots allocated");
            Ok(())
        } else {
            self.rehash(target)
        }
    }

    /// Doubles capacity after a probe ran off the end of the array.
    fn grow_exhausted(&mut self) -> Result<(), Error> {
        let capacity = self
            .capacity()
            .checked_mul(2)
            .ok_or(Error::CapacityOverflow)?;
        tracing::debug!(
            capacity = self.capacity(),
            count = self.count,
            "probe exhausted, forcing growth"
        );
        self.rehash(capacity)
    }

    /// Moves every entry into a fresh array of `capacity` slots.
    ///
    /// `capacity` is the current capacity times a power of two. An entry
    /// whose new home falls in the last `j` slots had its old home, and so
    /// its old position, in the last `j` old slots, so no tail window ever
    /// receives more entries than it has slots and placement cannot run
    /// off the end. The fresh array is allocated before anything moves.
    fn rehash(&mut self, capacity: usize) -> Result<(), Error> {
        let old_capacity = self.capacity();
        debug_assert!(old_capacity > 0 && capacity % old_capacity == 0);
        debug_assert!((capacity / old_capacity).is_power_of_two());
        let mut fresh: Vec<Option<Slot<V>>> = try_filled(capacity, || None)?;
        for slot in self.slots.iter_mut().filter_map(Option::take) {
            let start = home(slot.hash, capacity);
            let offset = fresh[start..]
                .iter()
                .position(Option::is_none)
                .expect("rehash into a power-of-two multiple always has room");
            fresh[start + offset] = Some(slot);
        }
        self.slots = fresh;
        tracing::debug!(
            old_capacity,
            new_capacity = capacity,
            count = self.count,
            "hash table rehashed"
        );
        Ok(())
    }

    fn slot(&self, index: usize) -> Option<&Slot<V>> {
        self.slots.get(index)?.as_ref()
    }

    fn occupied_mut(&mut self, index: usize) -> &mut Slot<V> {
        self.slots[index]
            .as_mut()
            .expect("probe reported an occupied slot")
    }
}

/// Open-addressing hash table keyed by strings.
///
/// `S` only needs to hash bytes: keys are fed to the hasher with a single
/// `Hasher::write(key.as_bytes())`. The default, `FnvBuildHasher`, makes
/// slot positions those of 32-bit FNV-1a.
///
/// Not synchronised; `!Sync`.
pub struct HashTable<V, S = FnvBuildHasher> {
    raw: RawTable<V>,
    config: TableConfig,
    hasher: S,
    busy: BusyFlag,
}

impl<V> HashTable<V> {
    /// Empty table with the default configuration. Nothing is allocated
    /// until the first insert or reserve.
    pub fn new() -> Self {
        Self::with_hasher(FnvBuildHasher)
    }

    pub fn try_with_config(config: TableConfig) -> Result<Self, Error> {
        Self::try_with_config_and_hasher(config, FnvBuildHasher)
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> HashTable<V, S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            raw: RawTable::new(),
            config: TableConfig::new(),
            hasher,
            busy: BusyFlag::new(),
        }
    }

    pub fn try_with_config_and_hasher(config: TableConfig, hasher: S) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            raw: RawTable::new(),
            config,
            hasher,
            busy: BusyFlag::new(),
        })
    }

    fn make_hash(&self, key: &str) -> u64 {
        let mut state = self.hasher.build_hasher();
        state.write(key.as_bytes());
        state.finish()
    }

    pub fn len(&self) -> usize {
        self.raw.count
    }
    pub fn is_empty(&self) -> bool {
        self.raw.count == 0
    }
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Current occupancy ratio; `0.0` before the first allocation.
    pub fn load_factor(&self) -> f64 {
        match self.capacity() {
            0 => 0.0,
            cap => self.raw.count as f64 / cap as f64,
        }
    }

    /// Resolves `key` to the slot an insert would use, without mutating.
    pub fn probe(&self, key: &str) -> Probe {
        let _g = self.busy.enter();
        let hash = self.make_hash(key);
        self.raw.probe(hash, key)
    }

    /// Grows, if needed, so that `expected` entries fit under the load
    /// factor. On error the table is unchanged.
    pub fn reserve(&mut self, expected: usize) -> Result<(), Error> {
        let _g = self.busy.enter();
        self.raw.reserve(expected, &self.config)
    }

    /// Inserts or overwrites the value for `key`.
    ///
    /// Returns the previous value when `key` was already present; the key
    /// is copied only when a new slot is claimed. Growth for `len() + 1`
    /// entries happens before the key is resolved, so it may rehash and move
    /// every entry even when `key` is already present. On error the entries
    /// are unchanged, but the table may already have grown.
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>, Error> {
        let _g = self.busy.enter();
        let hash = self.make_hash(key);
        let expected = self.raw.count.checked_add(1).ok_or(Error::CapacityOverflow)?;
        self.raw.reserve(expected, &self.config)?;
        loop {
            match self.raw.probe(hash, key) {
                Probe::Occupied(i) => {
                    let slot = self.raw.occupied_mut(i);
                    return Ok(Some(core::mem::replace(&mut slot.value, value)));
                }
                Probe::Vacant(i) => {
                    let key = try_copy_str(key)?;
                    self.raw.slots[i] = Some(Slot { key, value, hash });
                    self.raw.count += 1;
                    return Ok(None);
                }
                Probe::Exhausted => self.raw.grow_exhausted()?,
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        let _g = self.busy.enter();
        let hash = self.make_hash(key);
        match self.raw.probe(hash, key) {
            Probe::Occupied(i) => self.raw.slot(i).map(|s| (&*s.key, &s.value)),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let _g = self.busy.enter();
        let hash = self.make_hash(key);
        match self.raw.probe(hash, key) {
            Probe::Occupied(i) => Some(&mut self.raw.occupied_mut(i).value),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_key_value(key).is_some()
    }
}

impl<V, S> HashTable<V, S> {
    /// Key and value stored at slot `index`, if occupied.
    pub fn slot(&self, index: usize) -> Option<(&str, &V)> {
        self.raw.slot(index).map(|s| (&*s.key, &s.value))
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.raw.slots.iter(),
        }
    }

    /// Occupied slots in slot order, with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.raw.slots.iter_mut(),
        }
    }

    /// Drops every key and value and releases the slot array.
    pub fn clear_and_release(&mut self) {
        self.raw = RawTable::new();
    }

    /// Per-slot listing: `"{index}: "` then `"{key}" -> {value:?}` for
    /// occupied slots.
    pub fn dump(&self) -> SlotDump<'_, V> {
        SlotDump {
            slots: &self.raw.slots,
        }
    }
}

impl<V: fmt::Debug, S> fmt::Debug for HashTable<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V, S> IntoIterator for &'a HashTable<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

/// Iterator over occupied slots of a `HashTable`.
pub struct Iter<'a, V> {
    it: core::slice::Iter<'a, Option<Slot<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .flatten()
            .next()
            .map(|s| (&*s.key, &s.value))
    }
}

/// Mutable iterator over occupied slots of a `HashTable`.
pub struct IterMut<'a, V> {
    it: core::slice::IterMut<'a, Option<Slot<V>>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .flatten()
            .next()
            .map(|s| (&*s.key, &mut s.value))
    }
}

/// `Display` adapter returned by `HashTable::dump`.
pub struct SlotDump<'a, V> {
    slots: &'a [Option<Slot<V>>],
}

impl<V: fmt::Debug> fmt::Display for SlotDump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            write!(f, "{}: ", i)?;
            if let Some(s) = slot {
                write!(f, "{:?} -> {:?}", s.key, s.value)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
