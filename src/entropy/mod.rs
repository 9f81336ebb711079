//! Streaming Shannon entropy estimation
//!
//! This module maintains a running approximation of the plug-in entropy
//! `H = log2(N) - (1/N) * Σ count_i * log2(count_i)` over a stream, using
//! Count-Min point estimates instead of exact per-item counts.
//!
//! # Example
//!
//! ```
//! use streamtropy::entropy::EntropyEstimator;
//!
//! let mut estimator = EntropyEstimator::new(1024, 5).unwrap();
//!
//! for word in ["to", "be", "or", "not", "to", "be"] {
//!     estimator.observe(word).unwrap();
//! }
//!
//! let bits = estimator.entropy().unwrap();
//! assert!((bits - 1.9183).abs() < 1e-3);
//! ```

mod estimator;

pub use estimator::{EntropyEstimator, Observation};

use crate::frequency::CountMinSketch;
use crate::hash::IndexHasher;
use crate::math;
use crate::traits::NotReadyError;

/// One item's term in `Σ count * log2(count)`
#[inline]
pub(crate) fn contribution(count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        count as f64 * math::log2(count as f64)
    }
}

/// Plug-in entropy from an item total and a `Σ count * log2(count)` aggregate
///
/// Returns [`NotReadyError`] when `items == 0`, where `log2(0)` is undefined.
pub fn plugin_entropy(items: u64, weighted_sum: f64) -> Result<f64, NotReadyError> {
    if items == 0 {
        return Err(NotReadyError);
    }
    Ok(math::log2(items as f64) - weighted_sum / items as f64)
}

/// Recompute entropy from a (typically merged) sketch in a second pass
///
/// Running entropy aggregates are not additive across stream partitions, so
/// sharded pipelines merge their sketches element-wise and then replay the
/// distinct item identities through this function. `distinct_items` must
/// enumerate each distinct item exactly once; the sketch itself cannot
/// enumerate keys.
///
/// # Example
///
/// ```
/// use streamtropy::entropy::replay_entropy;
/// use streamtropy::frequency::CountMinSketch;
/// use streamtropy::traits::Sketch;
///
/// let mut shard_a = CountMinSketch::new(1024, 5).unwrap();
/// let mut shard_b = CountMinSketch::new(1024, 5).unwrap();
///
/// shard_a.update("x").unwrap();
/// shard_a.update("x").unwrap();
/// shard_b.update("y").unwrap();
///
/// shard_a.merge(&shard_b).unwrap();
///
/// let bits = replay_entropy(&shard_a, ["x", "y"]).unwrap();
/// assert!((bits - 0.9183).abs() < 1e-3);
/// ```
pub fn replay_entropy<H, I>(
    sketch: &CountMinSketch<H>,
    distinct_items: I,
) -> Result<f64, NotReadyError>
where
    H: IndexHasher,
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut weighted_sum = 0.0;
    for item in distinct_items {
        weighted_sum += contribution(sketch.estimate_bytes(item.as_ref()));
    }
    plugin_entropy(sketch.total_count(), weighted_sum)
}
