//! Tests for the traversal family: orders, views, Morris threading,
//! mirroring and teardown

use std::collections::BTreeSet;

use generational_arena::Index;
use rstest::rstest;
use rstree::arena::TreeArena;
use rstree::generator::TreeGenerator;
use rstree::traverse;

/// root=5, left=3, right=8
fn small_tree() -> TreeArena {
    let mut tree = TreeArena::with_capacity(3);
    let root = tree.insert_root(5).unwrap();
    tree.insert_left(root, 3).unwrap();
    tree.insert_right(root, 8).unwrap();
    tree
}

fn seeded_tree(nodes: usize) -> TreeArena {
    TreeGenerator::from_seed(42).generate(nodes, 100).unwrap()
}

fn flatten(lines: &[Vec<u32>]) -> Vec<u32> {
    lines.iter().flatten().copied().collect()
}

/// Recomputes horizontal offsets independently of the top-view pass.
fn collect_offsets(tree: &TreeArena, idx: Option<Index>, offset: i32, seen: &mut BTreeSet<i32>) {
    if let Some(idx) = idx {
        if let Some(node) = tree.get_node(idx) {
            seen.insert(offset);
            collect_offsets(tree, node.left, offset - 1, seen);
            collect_offsets(tree, node.right, offset + 1, seen);
        }
    }
}

// ============================================================
// Three-node scenario from the drawing board
// ============================================================

#[test]
fn given_three_node_tree_when_pre_order_then_root_first() {
    let tree = small_tree();
    assert_eq!(traverse::pre_order(&tree), vec![5, 3, 8]);
    assert_eq!(traverse::pre_order_iterative(&tree), vec![5, 3, 8]);
}

#[test]
fn given_three_node_tree_when_in_order_then_left_to_right() {
    let tree = small_tree();
    assert_eq!(traverse::in_order(&tree), vec![3, 5, 8]);
}

#[test]
fn given_three_node_tree_when_morris_then_matches_recursive() {
    let mut tree = small_tree();
    assert_eq!(traverse::morris_in_order(&mut tree), vec![3, 5, 8]);
    assert_eq!(traverse::morris_pre_order(&mut tree), vec![5, 3, 8]);
}

#[test]
fn given_three_node_tree_when_level_order_then_grouped_by_depth() {
    let tree = small_tree();
    let expected = vec![vec![5], vec![3, 8]];
    assert_eq!(traverse::level_order(&tree), expected);
    assert_eq!(traverse::level_order_qlen(&tree), expected);
}

#[test]
fn given_three_node_tree_when_left_view_then_leftmost_per_level() {
    let tree = small_tree();
    assert_eq!(traverse::left_view(&tree), vec![5, 3]);
}

#[test]
fn given_three_node_tree_when_top_view_then_ordered_by_offset() {
    let mut tree = small_tree();
    assert_eq!(traverse::top_view(&mut tree), vec![3, 5, 8]);
}

// ============================================================
// Equivalence properties on generated trees
// ============================================================

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(15)]
#[case(16)]
#[case(100)]
#[case(1000)]
fn given_generated_tree_when_morris_then_matches_recursive_orders(#[case] nodes: usize) {
    let mut tree = seeded_tree(nodes);
    let expected_in = traverse::in_order(&tree);
    let expected_pre = traverse::pre_order(&tree);

    assert_eq!(traverse::morris_in_order(&mut tree), expected_in);
    assert_eq!(traverse::morris_pre_order(&mut tree), expected_pre);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(32)]
#[case(100)]
fn given_generated_tree_when_level_order_variants_then_identical(#[case] nodes: usize) {
    let tree = seeded_tree(nodes);
    assert_eq!(traverse::level_order(&tree), traverse::level_order_qlen(&tree));
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(1000)]
fn given_morris_pass_when_finished_then_shape_is_restored(#[case] nodes: usize) {
    let mut tree = seeded_tree(nodes);
    let shape_before = traverse::level_order(&tree);

    traverse::morris_in_order(&mut tree);
    traverse::morris_pre_order(&mut tree);

    // No lingering thread: recursive passes and teardown visit every
    // node exactly once
    assert_eq!(traverse::level_order(&tree), shape_before);
    assert_eq!(traverse::pre_order(&tree).len(), nodes);
    assert_eq!(tree.teardown().len(), nodes);
    assert!(tree.is_empty());
}

#[rstest]
#[case(1)]
#[case(12)]
#[case(100)]
fn given_mirror_applied_twice_when_traversing_then_original_sequence(#[case] nodes: usize) {
    let mut tree = seeded_tree(nodes);
    let before = traverse::pre_order(&tree);

    traverse::mirror(&mut tree);
    traverse::mirror(&mut tree);

    assert_eq!(traverse::pre_order(&tree), before);
}

#[test]
fn given_mirrored_tree_when_traversing_then_children_swapped() {
    let mut tree = small_tree();
    traverse::mirror(&mut tree);
    assert_eq!(traverse::pre_order(&tree), vec![5, 8, 3]);
    assert_eq!(traverse::level_order(&tree), vec![vec![5], vec![8, 3]]);
}

#[rstest]
#[case(1)]
#[case(31)]
#[case(100)]
fn given_generated_tree_when_top_view_then_one_value_per_offset(#[case] nodes: usize) {
    let mut tree = seeded_tree(nodes);
    let mut offsets = BTreeSet::new();
    collect_offsets(&tree, tree.root(), 0, &mut offsets);

    let view = traverse::top_view(&mut tree);
    assert_eq!(view.len(), offsets.len());
}

#[rstest]
#[case(1)]
#[case(15)]
#[case(100)]
fn given_generated_tree_when_zigzag_then_alternating_level_scans(#[case] nodes: usize) {
    let tree = seeded_tree(nodes);
    let levels = traverse::level_order(&tree);
    let zigzag = traverse::zigzag(&tree);

    assert_eq!(zigzag.len(), levels.len());
    for (depth, line) in zigzag.iter().enumerate() {
        let mut expected = levels[depth].clone();
        if depth % 2 == 1 {
            expected.reverse();
        }
        assert_eq!(line, &expected, "level {}", depth);
    }
}

#[rstest]
#[case(1)]
#[case(15)]
#[case(100)]
fn given_generated_tree_when_spiral_then_matches_zigzag_visitation(#[case] nodes: usize) {
    let tree = seeded_tree(nodes);
    let zigzag = traverse::zigzag(&tree);

    assert_eq!(flatten(&traverse::spiral(&tree)), flatten(&zigzag));

    // rspiral flips every level's scan direction relative to zigzag
    let reversed: Vec<Vec<u32>> = zigzag
        .iter()
        .map(|line| line.iter().rev().copied().collect())
        .collect();
    assert_eq!(flatten(&traverse::rspiral(&tree)), flatten(&reversed));
}

// ============================================================
// Lifecycle
// ============================================================

#[test]
fn given_manual_tree_when_teardown_then_post_order_free() {
    let mut tree = small_tree();
    assert_eq!(tree.teardown(), vec![3, 8, 5]);
    assert!(tree.is_empty());

    // Second teardown is a no-op
    assert_eq!(tree.teardown(), Vec::<u32>::new());
}

#[test]
fn given_empty_tree_when_traversing_then_all_passes_empty() {
    let mut tree = TreeArena::with_capacity(0);
    assert!(traverse::level_order(&tree).is_empty());
    assert!(traverse::pre_order(&tree).is_empty());
    assert!(traverse::in_order(&tree).is_empty());
    assert!(traverse::morris_in_order(&mut tree).is_empty());
    assert!(traverse::left_view(&tree).is_empty());
    assert!(traverse::top_view(&mut tree).is_empty());
    assert!(traverse::zigzag(&tree).is_empty());
    assert!(traverse::spiral(&tree).is_empty());
    assert!(tree.teardown().is_empty());
}

#[test]
fn given_one_tree_when_running_many_passes_then_composable_in_any_order() {
    let mut tree = seeded_tree(50);
    let pre = traverse::pre_order(&tree);

    traverse::top_view(&mut tree);
    traverse::morris_in_order(&mut tree);
    traverse::left_view(&tree);
    traverse::spiral(&tree);
    traverse::morris_pre_order(&mut tree);

    // Read-only passes and completed Morris passes leave the shape alone
    assert_eq!(traverse::pre_order(&tree), pre);
}
