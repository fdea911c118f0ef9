//! # bit-sliced-set
//!
//! Fixed-capacity bit-sliced set for dense integer key workloads.
//! O(1)-expected insert, contains and remove with cache-line-sized buckets.
//!
//! Keys are split into equal-width bit slices; each slice indexes a dense
//! pre-allocated bucket array, and every bucket records the full key. A
//! lookup picks the shortest candidate bucket chain across all slices
//! before doing the exact-key scan.
//!
//! ## Features
//! - Constant-size table, allocated once at construction
//! - Inline-then-overflow bucket storage, one cache line per bucket
//! - Cross-level shortest-chain lookup heuristic
//! - no_std compatible (requires alloc)

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bucket;
mod config;
mod constants;
mod segment;
mod set;
mod table;

#[cfg(test)]
mod proptests;

pub use config::{Config, ConfigError};
pub use set::SlicedSet;
