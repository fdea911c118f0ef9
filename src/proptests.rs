use proptest::prelude::*;
use std::collections::HashSet;
use std::vec::Vec;

use crate::SlicedSet;

#[derive(Debug, Clone)]
enum Op {
    Insert(u64),
    Remove(u64),
    Contains(u64),
}

fn op_strategy(max_key: u64) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..max_key).prop_map(Op::Insert),
        (0..max_key).prop_map(Op::Remove),
        (0..max_key).prop_map(Op::Contains),
    ]
}

/// Drive the same operation sequence through the set and a `HashSet` model
/// and require identical booleans at every step.
fn check_against_model(key_bits: u32, level_bits: u32, max_key: u64, ops: Vec<Op>) {
    let mut set = SlicedSet::new(key_bits, level_bits).unwrap();
    let mut model: HashSet<u64> = HashSet::new();

    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(set.insert(k), model.insert(k), "insert({k})");
            }
            Op::Remove(k) => {
                assert_eq!(set.remove(k), model.remove(&k), "remove({k})");
            }
            Op::Contains(k) => {
                assert_eq!(set.contains(k), model.contains(&k), "contains({k})");
            }
        }
        assert_eq!(set.len(), model.len());
    }

    // Final sweep over a bounded slice of the key space.
    for k in 0..max_key.min(512) {
        assert_eq!(set.contains(k), model.contains(&k), "final contains({k})");
    }
}

proptest! {
    // Tiny key space: heavy digit collisions, long chains, lots of
    // tombstone reuse.
    #[test]
    fn matches_hashset_dense(ops in proptest::collection::vec(op_strategy(64), 1..400)) {
        check_against_model(8, 4, 64, ops);
    }

    // Wider keys with an uneven slice width (high bits unindexed).
    #[test]
    fn matches_hashset_uneven_width(ops in proptest::collection::vec(op_strategy(1 << 20), 1..200)) {
        check_against_model(32, 12, 1 << 20, ops);
    }

    // Single-level configuration.
    #[test]
    fn matches_hashset_single_level(ops in proptest::collection::vec(op_strategy(256), 1..300)) {
        check_against_model(8, 8, 256, ops);
    }
}
