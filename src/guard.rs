//! Debug-only reentrancy detection for the hash table.
//!
//! The table hands control to user code only through its `BuildHasher`.
//! A hasher that reaches back into the same table while an insert is in
//! flight would observe a half-updated slot array, so every public table
//! entry point holds a `BusyFlag` section. Debug builds panic on nested
//! entry; release builds compile the flag away.

use core::cell::Cell;
use core::marker::PhantomData;

#[derive(Debug)]
pub(crate) struct BusyFlag {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // !Sync: the flag is not atomic.
    _not_sync: PhantomData<Cell<()>>,
}

impl BusyFlag {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _not_sync: PhantomData,
        }
    }

    /// Marks the owner busy until the returned section is dropped.
    #[inline]
    pub(crate) fn enter(&self) -> BusySection<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "reentrant call into a hash table from its own hasher"
            );
        }
        BusySection { flag: self }
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct BusySection<'a> {
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    flag: &'a BusyFlag,
}

impl Drop for BusySection<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.flag.busy.set(false);
    }
}
