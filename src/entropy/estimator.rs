//! Incremental entropy estimator over Count-Min point estimates
//!
//! Maintains `Σ count * log2(count)` by delta-maintenance: each arriving
//! item's term is removed at its old estimated count and re-added at its new
//! one, so the aggregate tracks the whole distribution while only ever
//! touching the one item currently updated.

use super::{contribution, plugin_entropy};
use crate::frequency::CountMinSketch;
use crate::hash::{HashFamily, IndexHasher, Xxh3Hasher};
use crate::item::CanonicalItem;
use crate::traits::{ConfigurationError, ConversionError, NotReadyError, Sketch};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Per-item record for a reporter or sink
///
/// Emitted by [`EntropyEstimator::observe`] after each processed item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// The item's estimated count after this update
    pub estimate: u64,
    /// The running `Σ count * log2(count)` aggregate after this update
    pub weighted_sum: f64,
}

/// Streaming Shannon entropy estimator in bounded memory
///
/// Owns one [`CountMinSketch`] and a running aggregate
/// `S ≈ Σ count_i * log2(count_i)` over the sketch's estimated counts of all
/// distinct items seen. The derived entropy `log2(N) - S/N` is computed on
/// demand and never stored.
///
/// # Bias
///
/// `S` is built from sketch estimates, which can only overcount, so the
/// derived entropy is a biased *underestimate* of the true stream entropy:
/// inflated counts inflate `S`, which lowers `log2(N) - S/N`. The bias
/// shrinks as `width` grows and is a documented property of the estimator,
/// not corrected for.
///
/// # Numeric drift
///
/// Each update adds the difference of two nearby `f64` contributions to `S`.
/// Over extremely long streams the accumulated rounding error is unbounded in
/// principle; the sketch cannot enumerate its keys, so `S` cannot be rebuilt
/// from scratch without an external replay of distinct items. Known
/// limitation.
///
/// # Example
///
/// ```
/// use streamtropy::entropy::EntropyEstimator;
///
/// let mut estimator = EntropyEstimator::new(1024, 5).unwrap();
///
/// for byte in [1u8, 1, 2, 3, 2, 1] {
///     estimator.observe(&byte).unwrap();
/// }
///
/// // Collision-free at this width, so the estimate matches exact entropy
/// let bits = estimator.entropy().unwrap();
/// assert!((bits - 1.459).abs() < 1e-3);
/// ```
///
/// # Sharded ingestion
///
/// The estimator itself is single-threaded and processes items in strict
/// arrival order. For concurrent ingestion, give each worker its own
/// [`CountMinSketch`] with identical configuration over a disjoint partition,
/// [`merge`](crate::traits::Sketch::merge) the sketches at the aggregation
/// point, and recompute entropy with
/// [`replay_entropy`](super::replay_entropy). Running aggregates are not
/// additive across partitions, which is why this type has no `merge`.
#[derive(Clone, Debug)]
pub struct EntropyEstimator<H: IndexHasher = Xxh3Hasher> {
    /// The owned frequency sketch
    sketch: CountMinSketch<H>,
    /// Running Σ count * log2(count) over estimated counts
    weighted_sum: f64,
    /// Items processed so far
    items: u64,
}

impl EntropyEstimator {
    /// Create an estimator over a fresh sketch with the given dimensions
    pub fn new(width: usize, depth: usize) -> Result<Self, ConfigurationError> {
        Ok(Self::from_sketch_unchecked(CountMinSketch::new(width, depth)?))
    }

    /// Create an estimator over a fresh sketch with an explicit seed sequence
    pub fn with_seeds(width: usize, seeds: Vec<u64>) -> Result<Self, ConfigurationError> {
        Ok(Self::from_sketch_unchecked(CountMinSketch::with_seeds(width, seeds)?))
    }

    /// Create an estimator sized from target `(epsilon, delta)` bounds
    pub fn from_error_bounds(epsilon: f64, delta: f64) -> Result<Self, ConfigurationError> {
        Ok(Self::from_sketch_unchecked(CountMinSketch::from_error_bounds(epsilon, delta)?))
    }
}

impl<H: IndexHasher> EntropyEstimator<H> {
    /// Create an estimator over a pre-built hash family
    pub fn with_family(family: HashFamily<H>) -> Self {
        Self::from_sketch_unchecked(CountMinSketch::with_family(family))
    }

    /// Take ownership of an existing sketch
    ///
    /// The sketch must be empty: the running aggregate starts at zero, which
    /// would misstate the contributions of any counts already present.
    pub fn from_sketch(sketch: CountMinSketch<H>) -> Result<Self, ConfigurationError> {
        if sketch.count() != 0 {
            return Err(ConfigurationError::SketchNotEmpty);
        }
        Ok(Self::from_sketch_unchecked(sketch))
    }

    fn from_sketch_unchecked(sketch: CountMinSketch<H>) -> Self {
        Self {
            sketch,
            weighted_sum: 0.0,
            items: 0,
        }
    }

    /// Process one stream item
    ///
    /// Conversion happens before any state changes; on failure neither the
    /// sketch nor the running aggregate is modified.
    pub fn observe<T: CanonicalItem + ?Sized>(
        &mut self,
        item: &T,
    ) -> Result<Observation, ConversionError> {
        let bytes = item.canonical_bytes()?;
        Ok(self.observe_bytes(&bytes))
    }

    /// Process one stream item given as raw bytes
    ///
    /// The update is a single read-modify-write sequence: the old estimate is
    /// read before the sketch mutation, the new one after. The new estimate
    /// is at least `old + 1` but not assumed to be exactly that; a colliding
    /// row with a smaller pre-update value may still bound the minimum.
    pub fn observe_bytes(&mut self, bytes: &[u8]) -> Observation {
        let old_count = self.sketch.estimate_bytes(bytes);
        let old_contribution = contribution(old_count);

        self.sketch.update_bytes(bytes);

        let new_count = self.sketch.estimate_bytes(bytes);
        let new_contribution = contribution(new_count);

        self.weighted_sum += new_contribution - old_contribution;
        self.items += 1;

        Observation {
            estimate: new_count,
            weighted_sum: self.weighted_sum,
        }
    }

    /// Derived Shannon entropy, in bits, of the stream so far
    ///
    /// Computed as `log2(N) - S/N` over the sketch's estimated counts.
    /// Undefined before the first item; see [`NotReadyError`].
    pub fn entropy(&self) -> Result<f64, NotReadyError> {
        plugin_entropy(self.items, self.weighted_sum)
    }

    /// Items processed so far
    pub fn items(&self) -> u64 {
        self.items
    }

    /// The running `Σ count * log2(count)` aggregate
    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum
    }

    /// The owned frequency sketch
    pub fn sketch(&self) -> &CountMinSketch<H> {
        &self.sketch
    }

    /// Consume the estimator and return its sketch
    pub fn into_sketch(self) -> CountMinSketch<H> {
        self.sketch
    }
}
