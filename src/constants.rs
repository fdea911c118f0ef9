//! Core constants for the bit-sliced set.
#![allow(dead_code)]

/// Sentinel value for an empty key slot.
///
/// `u64::MAX` is reserved and cannot be stored as a key. Slots holding this
/// value are free; everything else is a live key.
pub const EMPTY_KEY: u64 = u64::MAX;

/// Number of key slots in one segment.
///
/// Tunable. With 4 slots a segment (slots + overflow link) stays well inside
/// one cache line.
pub const SEGMENT_SLOTS: usize = 4;

/// Cache line size the bucket layout is padded to.
pub const CACHE_LINE: usize = 64;

/// Maximum configurable key width in bits.
pub const MAX_KEY_BITS: u32 = 64;

/// Maximum configurable level width in bits.
///
/// A level of width `b` needs `2^b` buckets; beyond 32 bits no table could
/// be allocated, so wider configurations are rejected at construction.
pub const MAX_LEVEL_BITS: u32 = 32;
