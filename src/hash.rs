//! Seeded hash family for positional index mapping
//!
//! A [`HashFamily`] maps canonical item bytes into `[0, width)` once per hash
//! row, each row keyed by its own seed. The hash itself sits behind the
//! [`IndexHasher`] trait so tests can substitute a deterministic,
//! collision-controllable implementation without touching sketch logic.

use crate::traits::ConfigurationError;
use xxhash_rust::xxh3::xxh3_64_with_seed;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Seeded 64-bit hash of a byte string
///
/// Implementations must be deterministic per `(seed, bytes)` pair and should
/// behave as if independent across different seeds: collisions under one seed
/// must not correlate with collisions under another.
pub trait IndexHasher: Clone + core::fmt::Debug {
    /// Hash `bytes` under `seed`
    fn hash64(&self, seed: u64, bytes: &[u8]) -> u64;
}

/// Default hasher backed by seeded XXH3
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh3Hasher;

impl IndexHasher for Xxh3Hasher {
    #[inline]
    fn hash64(&self, seed: u64, bytes: &[u8]) -> u64 {
        xxh3_64_with_seed(bytes, seed)
    }
}

/// A family of `depth` seeded positional mappings into `[0, width)`
///
/// Seeds are fixed at construction and never change; a given `(seed, item)`
/// pair always maps to the same index.
///
/// # Example
///
/// ```
/// use streamtropy::hash::HashFamily;
///
/// let family = HashFamily::new(1024, 4).unwrap();
/// let a = family.index(0, b"flow");
/// assert_eq!(a, family.index(0, b"flow"));
/// assert!(a < 1024);
/// ```
#[derive(Clone, Debug)]
pub struct HashFamily<H: IndexHasher = Xxh3Hasher> {
    /// Output range per row
    width: usize,
    /// One seed per row, all distinct
    seeds: Vec<u64>,
    /// The underlying hash
    hasher: H,
}

impl HashFamily {
    /// Create a family of `depth` rows with the default seeds `0..depth`
    pub fn new(width: usize, depth: usize) -> Result<Self, ConfigurationError> {
        let seeds: Vec<u64> = (0..depth as u64).collect();
        Self::with_seeds(width, seeds)
    }

    /// Create a family with an explicit seed sequence
    ///
    /// The family's depth is the number of seeds. Seeds must be distinct;
    /// a repeated seed would collapse two rows into one.
    pub fn with_seeds(width: usize, seeds: Vec<u64>) -> Result<Self, ConfigurationError> {
        Self::with_hasher(width, seeds, Xxh3Hasher)
    }
}

impl<H: IndexHasher> HashFamily<H> {
    /// Create a family over a caller-supplied hasher
    pub fn with_hasher(width: usize, seeds: Vec<u64>, hasher: H) -> Result<Self, ConfigurationError> {
        if width == 0 {
            return Err(ConfigurationError::ZeroWidth);
        }
        if seeds.is_empty() {
            return Err(ConfigurationError::ZeroDepth);
        }
        for (i, &seed) in seeds.iter().enumerate() {
            if seeds[..i].contains(&seed) {
                return Err(ConfigurationError::DuplicateSeed(seed));
            }
        }

        Ok(Self { width, seeds, hasher })
    }

    /// Map item bytes to an index in `[0, width)` for the given row
    ///
    /// # Panics
    ///
    /// Panics if `row >= depth`.
    #[inline]
    pub fn index(&self, row: usize, bytes: &[u8]) -> usize {
        (self.hasher.hash64(self.seeds[row], bytes) % self.width as u64) as usize
    }

    /// Output range per row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn depth(&self) -> usize {
        self.seeds.len()
    }

    /// The seed sequence, in row order
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }
}
