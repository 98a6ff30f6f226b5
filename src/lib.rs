//! # Interposort
//!
//! `interposort` is an in-place sorting library for large `i64` arrays that
//! pushes the expected number of comparisons per element toward
//! O(log log n) by learning the value distribution from a small random
//! sample.
//!
//! Instead of steering every element through O(log n) pivot comparisons, the
//! engine:
//!
//! 1. Draws a random sample of the range and sorts it into a "pivot ladder".
//! 2. Fits a piecewise-linear model that maps a value to a predicted
//!    destination bucket.
//! 3. Distributes all elements into growable buckets in a single pass.
//! 4. Recursively re-enters the pipeline for large buckets (insertion sort
//!    finishes the small ones) and concatenates the sorted buckets back into
//!    the original slice.
//!
//! ## Key Features
//!
//! - **In-Place Result**: the input slice is reordered directly; working
//!   storage lives only for the duration of the call.
//! - **Deterministic Replays**: sampling goes through an explicit
//!   [`IndexSampler`] rather than process-wide state, so a fixed seed
//!   reproduces the exact bucket assignments ([`interposort_seeded`]).
//! - **Fallible Allocation**: every growth path reports
//!   [`SortError::AllocationFailure`] instead of aborting the process; a
//!   failed call leaves the slice in an unspecified, partially sorted state
//!   and no partial result is valid.
//! - **Phase Instrumentation**: [`interposort_timed`] reports named
//!   sampling/distribution/recursive-sort durations for the top-level call
//!   with zero effect on the result.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use interposort::interposort;
//!
//! let mut data = vec![12, 11, 13, 5, 6, 7];
//! interposort(&mut data).unwrap();
//!
//! assert_eq!(data, vec![5, 6, 7, 11, 12, 13]);
//! ```
//!
//! ### Deterministic Runs
//!
//! ```rust
//! use interposort::interposort_seeded;
//!
//! let mut first = vec![9, -3, 0, 7, 9, -3];
//! let mut second = first.clone();
//!
//! interposort_seeded(&mut first, 42).unwrap();
//! interposort_seeded(&mut second, 42).unwrap();
//!
//! assert_eq!(first, second);
//! assert_eq!(first, vec![-3, -3, 0, 7, 9, 9]);
//! ```
//!
//! ### Custom Sample Sources
//!
//! Any [`rand::Rng`] is an [`IndexSampler`]; hand-written sources implement
//! the trait directly (see the [`IndexSampler`] docs for an example).
//!
//! ```rust
//! use interposort::interposort_with;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut data = vec![8, 6, 7, 5, 3, 0, 9];
//! let mut rng = StdRng::seed_from_u64(1);
//! interposort_with(&mut data, &mut rng).unwrap();
//!
//! assert_eq!(data, vec![0, 3, 5, 6, 7, 8, 9]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Expected**: O(n log log n) — the estimator resolves most of an
//!   element's position in O(1), leaving only small buckets to comparison
//!   sorting.
//! - **Worst Case**: a pathological sample can funnel a whole range into one
//!   bucket, which is then insertion sorted — O(n²) like the fallback, but
//!   never an infinite recursion, and O(n) for the common all-equal case.
//! - **Memory Overhead**: O(n) per active recursion level for bucket
//!   storage, bounded by the size of the range being processed at that
//!   level; buckets are drained and copied back before the next level
//!   starts.
//!
//! Ranges below a small threshold bypass the pipeline entirely and go
//! straight to insertion sort.

pub mod algo;
pub mod core;

mod buckets;
mod estimator;
mod fallback;

pub use algo::{interposort, interposort_seeded, interposort_timed, interposort_with};
pub use core::{IndexSampler, SortError, SortTimings};

pub mod prelude {
    pub use crate::algo::{interposort, interposort_seeded, interposort_timed, interposort_with};
    pub use crate::core::{IndexSampler, SortError, SortTimings};
}
