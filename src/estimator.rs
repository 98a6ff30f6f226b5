//! Piecewise-linear bucket estimator built from a sorted sample ladder.
//!
//! The model maps an element value to a predicted destination bucket in two
//! steps: a rank search over the ladder selects one of `k + 1` linear
//! segments, then the segment's `(slope, offset)` pair is evaluated and the
//! result clamped into the valid bucket range. Both the segment index and the
//! bucket index clamps are hard invariants, not optimizations.

use crate::core::SortError;

/// One linear piece of the estimator, bounded by two consecutive ladder
/// values (the end segments are unbounded on one side).
#[derive(Debug, Clone, Copy)]
struct Segment {
    slope: f32,
    offset: f32,
}

/// Sample size for a range of `n` elements: `2^round(log2(log2(n)))`,
/// clamped to `[2, n]`.
pub(crate) fn ladder_size(n: usize) -> usize {
    debug_assert!(n >= 2);
    let log2_n = (n as f64).log2().max(1.0);
    let power = log2_n.log2().max(0.0);
    let k = f64::powf(2.0, power.round()) as usize;
    k.clamp(2, n)
}

/// Bucket count policy: `max(k + 2, round(n / log2(n)))`, falling back to the
/// minimum `k + 2` when `n` is too small for the ratio to be meaningful.
pub(crate) fn bucket_count(n: usize, k: usize) -> usize {
    let floor = k + 2;
    if n < 2 {
        return floor;
    }
    let log2_n = (n as f64).log2();
    if log2_n <= 0.0 {
        return floor;
    }
    floor.max((n as f64 / log2_n).round() as usize)
}

/// A fitted estimator: the ladder it was built from, one segment per ladder
/// interval, and the bucket range it predicts into.
pub(crate) struct PiecewiseModel {
    ladder: Vec<i64>,
    segments: Vec<Segment>,
    bucket_count: usize,
}

impl PiecewiseModel {
    /// Fits the model for a range of `n` elements over an ascending `ladder`.
    ///
    /// Breakpoints spread cumulative rank across `bucket_count` targets; a
    /// degenerate interval (both boundaries equal after `f32` conversion)
    /// gets a zero slope and maps straight to its breakpoint.
    pub(crate) fn build(
        ladder: Vec<i64>,
        n: usize,
        bucket_count: usize,
    ) -> Result<Self, SortError> {
        let k = ladder.len();
        debug_assert!(k >= 1 && bucket_count >= k + 2);

        let top = bucket_count - 1;
        let log2_n = (n as f64).log2() as f32;

        // targetbin[i]: predicted bucket of the i-th ladder position, with
        // fixed endpoints at the first and last bucket.
        let mut targetbin = Vec::new();
        targetbin.try_reserve_exact(k + 2)?;
        targetbin.push(0usize);
        for i in 1..=k {
            let spread = n as f32 * i as f32 / (k + 1) as f32 / log2_n;
            targetbin.push((spread.round() as usize).min(top));
        }
        targetbin.push(top);
        debug_assert!(targetbin.windows(2).all(|w| w[0] <= w[1]));

        let mut segments = Vec::new();
        segments.try_reserve_exact(k + 1)?;
        for i in 0..=k {
            let x1 = if i == 0 {
                ladder[0] as f32 - 1.0
            } else {
                ladder[i - 1] as f32
            };
            let x2 = if i == k {
                ladder[k - 1] as f32 + 1.0
            } else {
                ladder[i] as f32
            };
            segments.push(if x1 >= x2 {
                Segment {
                    slope: 0.0,
                    offset: targetbin[i] as f32,
                }
            } else {
                let slope = (targetbin[i + 1] as f32 - targetbin[i] as f32) / (x2 - x1);
                Segment {
                    slope,
                    offset: targetbin[i] as f32 - slope * x1,
                }
            });
        }

        Ok(Self {
            ladder,
            segments,
            bucket_count,
        })
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Predicted destination bucket for `value`, always in
    /// `[0, bucket_count)`.
    #[inline]
    pub(crate) fn estimate(&self, value: i64) -> usize {
        let k = self.ladder.len();
        // Number of ladder entries <= value; the rank search uses exact
        // integer comparison even where f32 collapsed the segment boundaries.
        let below = self.ladder.partition_point(|&s| s <= value);
        let segment = if below == 0 {
            0
        } else if below == k {
            k
        } else {
            below
        };
        let raw = (value as f32 * self.segments[segment].slope + self.segments[segment].offset)
            .round();
        raw.clamp(0.0, (self.bucket_count - 1) as f32) as usize
    }
}
