//! Grow-by-doubling policy and fallible allocation helpers shared by the
//! array, the string builder and the hash table.
//!
//! All backing storage is a plain `Vec<T>`; growth goes through
//! `try_reserve_exact` so allocator refusal becomes `Error::OutOfMemory`
//! instead of an abort.

use crate::error::Error;

/// Returns the first capacity reached by doubling from `current` (or from
/// `initial` when `current` is zero) for which `fits` holds.
///
/// `initial` must be non-zero.
pub(crate) fn doubled_capacity<F>(current: usize, initial: usize, mut fits: F) -> Result<usize, Error>
where
    F: FnMut(usize) -> bool,
{
    debug_assert!(initial > 0, "doubling from zero never grows");
    let mut capacity = if current == 0 { initial } else { current };
    while !fits(capacity) {
        capacity = capacity.checked_mul(2).ok_or(Error::CapacityOverflow)?;
    }
    Ok(capacity)
}

/// Byte size of `len` elements of `T`, rejecting sizes a `Vec` cannot hold.
pub(crate) fn byte_size<T>(len: usize) -> Result<usize, Error> {
    let bytes = len
        .checked_mul(core::mem::size_of::<T>())
        .ok_or(Error::CapacityOverflow)?;
    if bytes > isize::MAX as usize {
        return Err(Error::CapacityOverflow);
    }
    Ok(bytes)
}

/// Makes room in `vec` for `capacity` elements in total.
pub(crate) fn try_grow<T>(vec: &mut Vec<T>, capacity: usize) -> Result<(), Error> {
    let bytes = byte_size::<T>(capacity)?;
    let additional = capacity.saturating_sub(vec.len());
    vec.try_reserve_exact(additional)
        .map_err(|_| Error::OutOfMemory { bytes })
}

/// Allocates a vector of exactly `len` elements produced by `fill`.
pub(crate) fn try_filled<T, F>(len: usize, fill: F) -> Result<Vec<T>, Error>
where
    F: FnMut() -> T,
{
    let mut vec = Vec::new();
    try_grow(&mut vec, len)?;
    vec.resize_with(len, fill);
    Ok(vec)
}

/// Heap copy of `s`, failing instead of aborting when the allocator refuses.
pub(crate) fn try_copy_str(s: &str) -> Result<Box<str>, Error> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(|_| Error::OutOfMemory { bytes: s.len() })?;
    owned.push_str(s);
    Ok(owned.into_boxed_str())
}
