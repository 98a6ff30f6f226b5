//! Core traits and types for Interposort.
//!
//! This module defines:
//! - [`IndexSampler`]: the random-index source the engine draws samples with.
//! - [`SortError`]: the fatal error surface of a sort call.
//! - [`SortTimings`]: named phase durations reported by the instrumented entry
//!   point.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use rand::Rng;

/// A source of uniformly distributed random indices.
///
/// The engine calls [`next_index`](IndexSampler::next_index) once per sample
/// it draws; threading the sampler through every call (instead of a
/// process-wide generator) keeps runs reproducible under a fixed seed.
///
/// Every [`rand::Rng`] already implements this trait, so a seeded
/// [`rand::rngs::StdRng`] can be passed directly. Implement it by hand to
/// plug in a non-`rand` source:
///
/// ```
/// use interposort::{IndexSampler, interposort_with};
///
/// // Xorshift-style toy generator; any deterministic source works.
/// struct Xorshift(u64);
///
/// impl IndexSampler for Xorshift {
///     fn next_index(&mut self, n: usize) -> usize {
///         self.0 ^= self.0 << 13;
///         self.0 ^= self.0 >> 7;
///         self.0 ^= self.0 << 17;
///         (self.0 % n as u64) as usize
///     }
/// }
///
/// let mut data = vec![5, 3, 8, 1];
/// interposort_with(&mut data, &mut Xorshift(0x9e3779b97f4a7c15)).unwrap();
/// assert_eq!(data, vec![1, 3, 5, 8]);
/// ```
pub trait IndexSampler {
    /// Returns an index in `[0, n)`. Callers guarantee `n > 0`.
    fn next_index(&mut self, n: usize) -> usize;
}

impl<R: Rng> IndexSampler for R {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Fatal failure of an in-progress sort.
///
/// There are no recoverable conditions: on `Err` the sort stopped mid-flight
/// and the slice contents are unspecified. The call must be considered failed
/// as a whole; no partial result is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortError {
    /// Ladder, model, or bucket storage could not grow.
    AllocationFailure,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::AllocationFailure => write!(f, "sort storage allocation failed"),
        }
    }
}

impl Error for SortError {}

impl From<TryReserveError> for SortError {
    fn from(_: TryReserveError) -> Self {
        SortError::AllocationFailure
    }
}

/// Phase durations of one top-level sort call.
///
/// Filled only by [`interposort_timed`](crate::interposort_timed) and only for
/// the outermost invocation; recursive calls are not instrumented. Purely
/// observational: the sorted result is identical with or without timing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortTimings {
    /// Drawing the sample ladder and building the piecewise model.
    pub sampling: Duration,
    /// The single distribution pass over the input range.
    pub distribution: Duration,
    /// Sorting the buckets (fallback or recursion) and copying them back.
    pub recursive_sort: Duration,
}

impl SortTimings {
    /// Sum of all recorded phases.
    pub fn total(&self) -> Duration {
        self.sampling + self.distribution + self.recursive_sort
    }
}

impl fmt::Display for SortTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = |d: Duration| d.as_secs_f64() * 1000.0;
        let total = self.total();
        let pct = |d: Duration| {
            if total.as_nanos() == 0 {
                0.0
            } else {
                d.as_secs_f64() / total.as_secs_f64() * 100.0
            }
        };
        write!(
            f,
            "sampling {:.1}ms ({:.1}%), distribution {:.1}ms ({:.1}%), recursive sort {:.1}ms ({:.1}%)",
            ms(self.sampling),
            pct(self.sampling),
            ms(self.distribution),
            pct(self.distribution),
            ms(self.recursive_sort),
            pct(self.recursive_sort),
        )
    }
}
