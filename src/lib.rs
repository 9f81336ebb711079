//! # Streamtropy
//!
//! Memory-bounded Shannon entropy estimation for high-volume data streams.
//!
//! Streamtropy estimates the entropy of a stream whose item domain is too
//! large (or whose length is too long) to tally exactly, using a Count-Min
//! sketch and an incrementally maintained plug-in entropy aggregate. Typical
//! settings: cardinality estimation, traffic analysis, anomaly detection.
//!
//! ## Features
//!
//! - **Frequency Estimation**: Count-Min sketch with one-sided error and
//!   formal `(ε, δ)` accuracy bounds
//! - **Streaming Entropy**: per-item incremental `log2(N) - S/N` estimation
//!   without per-key state
//! - **Full Mergeability**: sketches with identical configuration combine by
//!   element-wise sum for distributed ingestion
//! - **Ground Truth**: an exact reference tally for validating estimates in
//!   tests
//!
//! ## Quick Start
//!
//! ```rust
//! use streamtropy::prelude::*;
//!
//! // 1024 counters per row, 5 hash rows
//! let mut estimator = EntropyEstimator::new(1024, 5).unwrap();
//!
//! for word in ["alice", "bob", "alice", "carol"] {
//!     estimator.observe(word).unwrap();
//! }
//!
//! println!("entropy: ~{:.2} bits", estimator.entropy().unwrap());
//! ```
//!
//! ## Distributed Computing
//!
//! Sketches implement the [`Sketch`](traits::Sketch) trait, which includes a
//! `merge` operation. Each worker builds a sketch with identical
//! configuration over its partition of the stream; sketches are summed at the
//! aggregation point and entropy is recomputed from the merged sketch with
//! [`entropy::replay_entropy`]. Running entropy aggregates themselves are not
//! additive across partitions and are never merged directly.
//!
//! ```rust
//! use streamtropy::frequency::CountMinSketch;
//! use streamtropy::traits::Sketch;
//!
//! let mut worker1 = CountMinSketch::new(1024, 5).unwrap();
//! let mut worker2 = CountMinSketch::new(1024, 5).unwrap();
//!
//! // Each worker processes its partition
//! worker1.update("user_a").unwrap();
//! worker2.update("user_b").unwrap();
//!
//! // Merge results
//! worker1.merge(&worker2).unwrap();
//! assert_eq!(worker1.estimate("user_a").unwrap(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families (all enabled by default):
//! - `frequency`: Count-Min sketch
//! - `entropy`: streaming entropy estimation
//! - `reference`: exact tally for validation
//! - `full`: enable all algorithm families
//!
//! Platform features:
//! - `std` (default): standard library support
//! - `serde`: enable serialization of report records

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits and item plumbing always available
pub mod hash;
pub mod item;
pub mod traits;

mod math;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

#[cfg(feature = "entropy")]
#[cfg_attr(docsrs, doc(cfg(feature = "entropy")))]
pub mod entropy;

#[cfg(feature = "reference")]
#[cfg_attr(docsrs, doc(cfg(feature = "reference")))]
pub mod reference;

pub mod prelude {
    pub use crate::item::CanonicalItem;
    pub use crate::traits::*;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::CountMinSketch;

    #[cfg(feature = "entropy")]
    pub use crate::entropy::EntropyEstimator;

    #[cfg(feature = "reference")]
    pub use crate::reference::ReferenceTally;
}

#[cfg(feature = "frequency")]
pub use frequency::CountMinSketch;

#[cfg(feature = "entropy")]
pub use entropy::EntropyEstimator;
