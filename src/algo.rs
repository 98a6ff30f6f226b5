//! The sample-and-distribute sorting engine.
//!
//! One invocation of the pipeline:
//! 1. **Sample**: draw a small random sample of the range and sort it into an
//!    ascending "pivot ladder".
//! 2. **Model**: fit a piecewise-linear estimator mapping a value to a
//!    predicted destination bucket.
//! 3. **Distribute**: scan the range once, appending every element to its
//!    estimated bucket.
//! 4. **Drive**: visit buckets in ascending index order; small buckets are
//!    finished with insertion sort, large ones re-enter the pipeline; each
//!    sorted bucket is copied back at the running write cursor.
//!
//! The main entry points are [`interposort`], [`interposort_seeded`],
//! [`interposort_with`] and [`interposort_timed`].

use std::time::Instant;

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::buckets::BucketStore;
use crate::core::{IndexSampler, SortError, SortTimings};
use crate::estimator::{self, PiecewiseModel};
use crate::fallback::insertion_sort;

/// Ranges below this size skip sampling and distribution entirely; the
/// sample-size formulas are not meaningful for tiny ranges.
const INSERTION_SORT_THRESHOLD: usize = 128;

/// Buckets below this size are finished with the fallback sort instead of
/// re-entering the pipeline.
const SMALL_BUCKET_THRESHOLD: usize = 96;

/// Sorts `data` in place, seeding the sampler from the operating system.
///
/// # Errors
///
/// Returns [`SortError::AllocationFailure`] if working storage could not be
/// allocated; the slice contents are then unspecified.
///
/// # Examples
///
/// ```
/// use interposort::interposort;
///
/// let mut data = vec![42, -7, 19, 0, 5];
/// interposort(&mut data).unwrap();
/// assert_eq!(data, vec![-7, 0, 5, 19, 42]);
/// ```
pub fn interposort(data: &mut [i64]) -> Result<(), SortError> {
    let mut rng = StdRng::from_os_rng();
    sort_range(data, &mut rng, None)
}

/// Sorts `data` in place with a deterministic sample sequence.
///
/// Two calls with the same seed over the same input make identical bucket
/// assignments and produce identical output.
///
/// # Examples
///
/// ```
/// use interposort::interposort_seeded;
///
/// let mut data = vec![3, -1, 4, 1, -5, 9, 2, 6];
/// interposort_seeded(&mut data, 7).unwrap();
/// assert_eq!(data, vec![-5, -1, 1, 2, 3, 4, 6, 9]);
/// ```
pub fn interposort_seeded(data: &mut [i64], seed: u64) -> Result<(), SortError> {
    let mut rng = StdRng::seed_from_u64(seed);
    sort_range(data, &mut rng, None)
}

/// Sorts `data` in place, drawing sample indices from `sampler`.
pub fn interposort_with<S: IndexSampler>(
    data: &mut [i64],
    sampler: &mut S,
) -> Result<(), SortError> {
    sort_range(data, sampler, None)
}

/// Like [`interposort_with`], additionally reporting named phase durations
/// for the top-level call. Recursive calls are not instrumented.
pub fn interposort_timed<S: IndexSampler>(
    data: &mut [i64],
    sampler: &mut S,
) -> Result<SortTimings, SortError> {
    let mut timings = SortTimings::default();
    sort_range(data, sampler, Some(&mut timings))?;
    debug!("sorted {} elements: {timings}", data.len());
    Ok(timings)
}

/// One full pipeline invocation over `arr`; recurses on large buckets.
fn sort_range<S: IndexSampler>(
    arr: &mut [i64],
    sampler: &mut S,
    mut timings: Option<&mut SortTimings>,
) -> Result<(), SortError> {
    let n = arr.len();
    if n <= 1 {
        return Ok(());
    }
    if n < INSERTION_SORT_THRESHOLD {
        insertion_sort(arr);
        return Ok(());
    }

    let phase = timings.is_some().then(Instant::now);
    let k = estimator::ladder_size(n);
    let ladder = draw_ladder(arr, k, sampler)?;
    let bucket_count = estimator::bucket_count(n, k);
    let model = PiecewiseModel::build(ladder, n, bucket_count)?;
    if let (Some(t), Some(start)) = (timings.as_deref_mut(), phase) {
        t.sampling += start.elapsed();
    }
    trace!("range n={n}: ladder k={k}, buckets={bucket_count}");

    let phase = timings.is_some().then(Instant::now);
    let mut store = BucketStore::new(bucket_count, n)?;
    for &value in arr.iter() {
        store.append(model.estimate(value), value)?;
    }
    assert_eq!(
        store.total_len(),
        n,
        "distribution lost or duplicated elements"
    );
    if let (Some(t), Some(start)) = (timings.as_deref_mut(), phase) {
        t.distribution += start.elapsed();
    }

    let phase = timings.is_some().then(Instant::now);
    let mut write = 0usize;
    for bucket in 0..store.bucket_count() {
        if store.bucket_len(bucket) == 0 {
            continue;
        }
        let mut elements = store.take_bucket(bucket)?;
        if elements.len() < SMALL_BUCKET_THRESHOLD || elements.len() == n {
            // A bucket holding the entire range means the estimator could not
            // split it; recursing would not shrink the problem.
            insertion_sort(&mut elements);
        } else {
            sort_range(&mut elements, sampler, None)?;
        }
        let end = write + elements.len();
        assert!(end <= n, "write cursor overran the range");
        arr[write..end].copy_from_slice(&elements);
        write = end;
    }
    assert_eq!(write, n, "sorted buckets did not cover the range");
    if let (Some(t), Some(start)) = (timings.as_deref_mut(), phase) {
        t.recursive_sort += start.elapsed();
    }

    Ok(())
}

/// Draws `k` values from `arr` with replacement and sorts them ascending.
/// Duplicate draws are valid; the estimator's degenerate-segment rule
/// absorbs them.
fn draw_ladder<S: IndexSampler>(
    arr: &[i64],
    k: usize,
    sampler: &mut S,
) -> Result<Vec<i64>, SortError> {
    let mut ladder = Vec::new();
    ladder.try_reserve_exact(k)?;
    for _ in 0..k {
        ladder.push(arr[sampler.next_index(arr.len())]);
    }
    insertion_sort(&mut ladder);
    Ok(ladder)
}
