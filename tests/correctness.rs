//! Deterministic behavior tests: clustered updates, growth, baselines,
//! midpoint boundaries, and the capacity-doubling walk.

use rangemin::RangeMinTree;

mod test_helpers;
use test_helpers::ArrayModel;

#[test]
fn clustered_update_reads_back() {
    let mut tree = RangeMinTree::new(8, 0).unwrap();
    tree.update(5, 2, 5).unwrap();

    assert_eq!(tree.min(2, 5).unwrap(), 5);
    assert_eq!(tree.min(0, 1).unwrap(), 0);
    assert_eq!(tree.min(6, 7).unwrap(), 0);
}

#[test]
fn baseline_only_read() {
    let tree = RangeMinTree::new(8, 4).unwrap();
    assert_eq!(tree.min(0, 7).unwrap(), 4, "untouched tree reads baseline");
    assert_eq!(tree.min(3, 3).unwrap(), 4);
}

#[test]
fn growth_preserves_untouched_history() {
    let mut tree = RangeMinTree::new(8, 0).unwrap();
    tree.update(3, 10, 10).unwrap(); // 10 > 7 forces a doubling

    assert_eq!(tree.min(10, 10).unwrap(), 3);
    assert_eq!(
        tree.min(0, 7).unwrap(),
        0,
        "pre-growth territory must be unaffected"
    );
}

#[test]
fn overlapping_updates_compose() {
    let mut tree = RangeMinTree::new(16, 0).unwrap();
    tree.update(2, 0, 9).unwrap();
    tree.update(-5, 3, 6).unwrap();

    assert_eq!(tree.min(3, 6).unwrap(), -3);
    assert_eq!(tree.min(0, 2).unwrap(), 2);
    assert_eq!(tree.min(7, 9).unwrap(), 2);
}

#[test]
fn disjoint_updates_commute() {
    let mut forward = RangeMinTree::new(16, 0).unwrap();
    forward.update(4, 0, 5).unwrap();
    forward.update(-7, 9, 14).unwrap();

    let mut reversed = RangeMinTree::new(16, 0).unwrap();
    reversed.update(-7, 9, 14).unwrap();
    reversed.update(4, 0, 5).unwrap();

    for (left, right) in [(0, 15), (0, 5), (9, 14), (4, 10), (6, 8), (5, 9)] {
        assert_eq!(
            forward.min(left, right).unwrap(),
            reversed.min(left, right).unwrap(),
            "order must not matter over [{left}, {right}]"
        );
    }
}

#[test]
fn virgin_tail_folds_baseline() {
    let mut raised = RangeMinTree::new(8, 4).unwrap();
    raised.update(5, 0, 7).unwrap();
    // Touched portion sits at 9, the tail past capacity at the baseline 4.
    assert_eq!(raised.min(0, 100).unwrap(), 4);

    let mut lowered = RangeMinTree::new(8, 4).unwrap();
    lowered.update(-2, 0, 7).unwrap();
    // Touched portion sits at 2, below the baseline tail.
    assert_eq!(lowered.min(0, 100).unwrap(), 2);
}

#[test]
fn growth_keeps_negative_aggregates_visible() {
    let mut tree = RangeMinTree::new(8, 0).unwrap();
    tree.update(-5, 0, 7).unwrap();
    // Forces growth, then lands exactly on the new root's span.
    tree.update(1, 0, 15).unwrap();

    assert_eq!(
        tree.min(0, 15).unwrap(),
        -4,
        "the absorbed subtree's negative minimum must survive growth"
    );
    assert_eq!(tree.min(8, 15).unwrap(), 1);
}

#[test]
fn updates_ending_at_midpoints() {
    // Root midpoint of [0, 15] is 7; deeper left midpoints are 3 and 1.
    let mut tree = RangeMinTree::new(16, 0).unwrap();
    tree.update(6, 0, 7).unwrap();
    tree.update(2, 0, 3).unwrap();
    tree.update(1, 0, 1).unwrap();

    assert_eq!(tree.min(0, 1).unwrap(), 9);
    assert_eq!(tree.min(2, 3).unwrap(), 8);
    assert_eq!(tree.min(4, 7).unwrap(), 6);
    assert_eq!(tree.min(8, 15).unwrap(), 0);
    assert_eq!(tree.min(7, 8).unwrap(), 0);
}

#[test]
fn updates_starting_past_midpoints() {
    // Ranges beginning exactly at mid + 1 of their enclosing node.
    let mut tree = RangeMinTree::new(16, 0).unwrap();
    tree.update(3, 8, 15).unwrap();
    tree.update(2, 12, 15).unwrap();
    tree.update(1, 14, 15).unwrap();

    assert_eq!(tree.min(0, 7).unwrap(), 0);
    assert_eq!(tree.min(8, 11).unwrap(), 3);
    assert_eq!(tree.min(12, 13).unwrap(), 5);
    assert_eq!(tree.min(14, 15).unwrap(), 6);
    assert_eq!(tree.min(7, 8).unwrap(), 0);
    assert_eq!(tree.min(11, 12).unwrap(), 3);
}

#[test]
fn straddling_range_around_root_midpoint() {
    let mut tree = RangeMinTree::new(16, 0).unwrap();
    tree.update(4, 7, 8).unwrap();

    assert_eq!(tree.min(7, 7).unwrap(), 4);
    assert_eq!(tree.min(8, 8).unwrap(), 4);
    assert_eq!(tree.min(6, 6).unwrap(), 0);
    assert_eq!(tree.min(9, 9).unwrap(), 0);
    assert_eq!(tree.min(6, 9).unwrap(), 0);
    assert_eq!(tree.min(7, 8).unwrap(), 4);
}

/// Single-index updates landing exactly on successive powers of two, the
/// worst case for the doubling loop: every write grows the tree by at least
/// one level.
#[test]
fn capacity_doubling_walk_matches_model() {
    let final_len: i64 = 8 * 256;
    let mut tree = RangeMinTree::new(8, 0).unwrap();
    let mut model = ArrayModel::new(final_len as usize, 0);

    let mut index: i64 = 8;
    let mut step: i64 = 1;
    while index < final_len {
        tree.update(step, index, index).unwrap();
        model.add(step, index as usize, index as usize);

        assert_eq!(
            tree.min(index, index).unwrap(),
            model.min(index as usize, index as usize)
        );
        assert_eq!(
            tree.min(0, final_len - 1).unwrap(),
            model.min(0, model.len() - 1),
            "full-span minimum diverged after growing to index {index}"
        );

        index *= 2;
        step += 1;
    }
    assert_eq!(tree.capacity(), final_len);
}

#[test]
fn growth_is_monotonic_and_rightward() {
    let mut tree = RangeMinTree::new(4, 0).unwrap();
    tree.update(-1, 0, 3).unwrap();
    let before = tree.capacity();

    tree.update(7, 50, 60).unwrap();
    assert!(tree.capacity() > before);
    assert_eq!(tree.capacity(), 64);

    // Index 0 is stable across growth and keeps its history.
    assert_eq!(tree.min(0, 0).unwrap(), -1);
    assert_eq!(tree.min(0, 3).unwrap(), -1);
    assert_eq!(tree.min(4, 49).unwrap(), 0);
    assert_eq!(tree.min(50, 60).unwrap(), 7);
}
