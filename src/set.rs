//! The bit-sliced set container.

use crate::bucket::RecordOutcome;
use crate::config::{Config, ConfigError};
use crate::constants::EMPTY_KEY;
use crate::segment::chain_contains;
use crate::table::BucketTable;

/// Fixed-capacity bit-sliced set of integer keys.
///
/// Each key is decomposed into equal-width bit slices (digits), one per
/// level. The digit at a level indexes that level's dense bucket stripe,
/// and every level's bucket stores the full key verbatim. A key that is
/// present therefore has exactly one live slot at every level, and a lookup
/// is free to verify membership against whichever level currently has the
/// fewest live entries in the key's bucket.
///
/// The table is allocated once at construction from the [`Config`] and is
/// never resized; memory grows only through per-bucket overflow segments.
/// All operations take exclusive access for mutation and are bounded by
/// chain length; there is no internal synchronization.
///
/// `u64::MAX` is reserved as the empty-slot sentinel and cannot be stored;
/// all three operations report it as absent. Key bits at or above the
/// configured width do not participate in indexing; see [`Config`].
///
/// # Example
/// ```rust
/// use bit_sliced_set::SlicedSet;
///
/// let mut set = SlicedSet::new(32, 8).unwrap();
/// assert!(set.insert(42));
/// assert!(!set.insert(42));
/// assert!(set.contains(42));
/// assert!(set.remove(42));
/// assert!(!set.contains(42));
/// ```
#[derive(Debug)]
pub struct SlicedSet {
    config: Config,
    table: BucketTable,
    len: usize,
}

impl SlicedSet {
    /// Create a set for `key_bits`-wide keys sliced into `level_bits`-wide
    /// digits.
    ///
    /// Allocates `(key_bits / level_bits) * 2^level_bits` buckets up front.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for widths rejected by [`Config::new`].
    pub fn new(key_bits: u32, level_bits: u32) -> Result<Self, ConfigError> {
        Ok(Self::with_config(Config::new(key_bits, level_bits)?))
    }

    /// Create a set from an already validated configuration.
    pub fn with_config(config: Config) -> Self {
        SlicedSet {
            config,
            table: BucketTable::new(config.levels(), config.buckets_per_level()),
            len: 0,
        }
    }

    /// The configuration this set was built with.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Number of keys in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a key.
    ///
    /// Returns `true` if the key was newly inserted, `false` if it was
    /// already present (no state changes on `false`). The reserved sentinel
    /// `u64::MAX` is rejected with `false`.
    pub fn insert(&mut self, key: u64) -> bool {
        if key == EMPTY_KEY {
            return false;
        }

        // Presence probe on the first level's full chain before anything is
        // mutated: a present key has a live slot here, so a duplicate can
        // never make it past this point and leave levels half-written.
        if self.table.bucket(0, self.config.digit(key, 0)).contains(key) {
            return false;
        }

        for level in 0..self.config.levels() {
            let digit = self.config.digit(key, level);
            match self.table.bucket_mut(level, digit).insert_record(key) {
                RecordOutcome::Recorded => {}
                RecordOutcome::AlreadyPresent => {
                    // Only reachable if some level lost or gained a record
                    // on its own; abort without touching further levels.
                    debug_assert!(false, "level {level} disagrees about key presence");
                    return false;
                }
            }
        }

        self.len += 1;
        true
    }

    /// Test membership.
    ///
    /// Fast path: scan the first level's inline segment. If that bucket has
    /// no overflow chain the key cannot be present at all. Otherwise every
    /// remaining level's bucket is consulted: an empty one proves absence,
    /// and the bucket with the fewest live entries becomes the one chain
    /// that gets scanned in full. The exact-key scan is mandatory either
    /// way, since digit collisions make bucket residence necessary but not
    /// sufficient.
    pub fn contains(&self, key: u64) -> bool {
        if key == EMPTY_KEY {
            // The sentinel marks free slots, so a slot scan would match it.
            return false;
        }

        let first = self.table.bucket(0, self.config.digit(key, 0));

        if first.head().position_of(key).is_some() {
            return true;
        }
        if !first.has_overflow() {
            return false;
        }

        // The first level's inline segment is already scanned; its
        // candidate chain starts at the overflow.
        let mut best = first;
        let mut candidate = first.overflow();

        for level in 1..self.config.levels() {
            let bucket = self.table.bucket(level, self.config.digit(key, level));
            if bucket.live_count() == 0 {
                return false;
            }
            if bucket.live_count() < best.live_count() {
                best = bucket;
                candidate = Some(bucket.head());
            }
        }

        chain_contains(candidate, key)
    }

    /// Remove a key.
    ///
    /// Returns `true` if the key was present and is now removed, `false`
    /// otherwise (no state changes on `false`).
    pub fn remove(&mut self, key: u64) -> bool {
        if key == EMPTY_KEY {
            return false;
        }

        // Same probe as insert: establish presence before any level is
        // tombstoned, so a missing key can never leave earlier levels
        // erased and later ones intact.
        if !self.table.bucket(0, self.config.digit(key, 0)).contains(key) {
            return false;
        }

        for level in 0..self.config.levels() {
            let digit = self.config.digit(key, level);
            if !self.table.bucket_mut(level, digit).erase_record(key) {
                debug_assert!(false, "level {level} disagrees about key presence");
                return false;
            }
        }

        self.len -= 1;
        true
    }
}
