//! Dense bucket storage, one stripe of buckets per level.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::bucket::Bucket;

/// Flat bucket table covering every level.
///
/// Storage is a single dense allocation of `levels * buckets_per_level`
/// buckets, addressed `level * buckets_per_level + digit`. Allocated once
/// at construction, never resized.
#[derive(Debug)]
pub(crate) struct BucketTable {
    buckets: Box<[Bucket]>,
    buckets_per_level: usize,
}

impl BucketTable {
    /// Allocate the table for `levels` stripes of `buckets_per_level`.
    pub(crate) fn new(levels: usize, buckets_per_level: usize) -> Self {
        let total = levels * buckets_per_level;
        let buckets: Vec<Bucket> = (0..total).map(|_| Bucket::new()).collect();
        BucketTable {
            buckets: buckets.into_boxed_slice(),
            buckets_per_level,
        }
    }

    /// Bucket for `digit` at `level`.
    #[inline(always)]
    pub(crate) fn bucket(&self, level: usize, digit: usize) -> &Bucket {
        debug_assert!(digit < self.buckets_per_level);
        &self.buckets[level * self.buckets_per_level + digit]
    }

    /// Mutable bucket for `digit` at `level`.
    #[inline(always)]
    pub(crate) fn bucket_mut(&mut self, level: usize, digit: usize) -> &mut Bucket {
        debug_assert!(digit < self.buckets_per_level);
        &mut self.buckets[level * self.buckets_per_level + digit]
    }
}
