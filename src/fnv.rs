//! 32-bit FNV-1a, the default hash for `HashTable`.

use core::hash::{BuildHasher, Hasher};

pub const FNV_OFFSET_BASIS_32: u32 = 2_166_136_261;
pub const FNV_PRIME_32: u32 = 16_777_619;

/// FNV-1a over `bytes`: one xor and one multiply per byte.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS_32;
    for &b in bytes {
        hash = (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME_32);
    }
    hash
}

/// Streaming FNV-1a hasher. `finish` returns the 32-bit state widened to `u64`.
///
/// Consecutive `write` calls hash as if their bytes were concatenated.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1aHasher {
    hash: u32,
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self {
            hash: FNV_OFFSET_BASIS_32,
        }
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut hash = self.hash;
        for &b in bytes {
            hash = (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME_32);
        }
        self.hash = hash;
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.hash)
    }
}

/// `BuildHasher` producing fresh `Fnv1aHasher`s. Stateless, so every table
/// hashes a given key identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = Fnv1aHasher;

    #[inline]
    fn build_hasher(&self) -> Fnv1aHasher {
        Fnv1aHasher::default()
    }
}
