//! Per-bucket growable `Vec` storage.
//!
//! The simple strategy: one `Vec` per bucket with geometric growth through
//! `try_reserve`, so an exhausted allocator surfaces as an error instead of
//! an abort.

use crate::core::SortError;

pub(crate) struct BucketStore {
    buckets: Vec<Vec<i64>>,
    /// Elements appended so far; not decremented by `take_bucket`.
    total: usize,
}

impl BucketStore {
    pub(crate) fn new(bucket_count: usize, _expected_total: usize) -> Result<Self, SortError> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, Vec::new);
        Ok(Self { buckets, total: 0 })
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn total_len(&self) -> usize {
        self.total
    }

    pub(crate) fn bucket_len(&self, bucket: usize) -> usize {
        self.buckets[bucket].len()
    }

    #[inline]
    pub(crate) fn append(&mut self, bucket: usize, value: i64) -> Result<(), SortError> {
        let slot = &mut self.buckets[bucket];
        if slot.len() == slot.capacity() {
            slot.try_reserve(1)?;
        }
        slot.push(value);
        self.total += 1;
        Ok(())
    }

    /// Drains `bucket` into a contiguous buffer, leaving it empty.
    pub(crate) fn take_bucket(&mut self, bucket: usize) -> Result<Vec<i64>, SortError> {
        Ok(std::mem::take(&mut self.buckets[bucket]))
    }
}
