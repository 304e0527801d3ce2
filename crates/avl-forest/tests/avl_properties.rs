use avl_forest::avl;
use avl_forest::layout::{compute_layout, SlotPos};
use avl_forest::types::{AvlNode, Link};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i16>().prop_map(|k| Op::Insert(k % 64)),
        2 => any::<i16>().prop_map(|k| Op::Remove(k % 64)),
    ]
}

fn apply(ops: &[Op]) -> (Link<i16>, Vec<i16>) {
    let mut root = None;
    let mut model = Vec::new();
    for op in ops {
        match *op {
            Op::Insert(k) => {
                root = avl::insert(root, k);
                model.push(k);
            }
            Op::Remove(k) => {
                root = avl::remove(root, &k);
                if let Some(i) = model.iter().position(|&m| m == k) {
                    model.swap_remove(i);
                }
            }
        }
    }
    model.sort_unstable();
    (root, model)
}

fn keys_of(root: &Link<i16>) -> Vec<i16> {
    avl::in_order(root).into_iter().copied().collect()
}

fn heights(node: Option<&AvlNode<i16>>, out: &mut Vec<u32>) {
    if let Some(n) = node {
        heights(n.left(), out);
        out.push(n.height);
        heights(n.right(), out);
    }
}

fn check_slots(node: &AvlNode<i16>, pos: SlotPos, grid: &avl_forest::Grid) -> usize {
    assert!(grid.is_visible(pos));
    let mut count = 1;
    if let Some(l) = node.left() {
        count += check_slots(l, pos.left(), grid);
    }
    if let Some(r) = node.right() {
        count += check_slots(r, pos.right(), grid);
    }
    count
}

proptest! {
    #[test]
    fn any_op_sequence_keeps_invariants(ops in prop::collection::vec(op(), 0..200)) {
        let (root, model) = apply(&ops);
        prop_assert!(avl::assert_avl_tree(&root).is_ok());
        prop_assert_eq!(keys_of(&root), model);
    }

    #[test]
    fn insert_then_remove_restores_in_order(
        keys in prop::collection::vec(0i16..500, 0..100),
        fresh in 500i16..1000,
    ) {
        let root = keys.iter().fold(None, |r, &k| avl::insert(r, k));
        let before = keys_of(&root);
        let root = avl::remove(avl::insert(root, fresh), &fresh);
        prop_assert_eq!(keys_of(&root), before);
        prop_assert!(avl::assert_avl_tree(&root).is_ok());
    }

    #[test]
    fn removing_absent_key_is_identity(
        keys in prop::collection::vec(0i16..500, 0..100),
        absent in 500i16..1000,
    ) {
        let root = keys.iter().fold(None, |r, &k| avl::insert(r, k));
        let mut before = Vec::new();
        heights(root.as_deref(), &mut before);
        let keys_before = keys_of(&root);

        let root = avl::remove(root, &absent);
        let mut after = Vec::new();
        heights(root.as_deref(), &mut after);
        prop_assert_eq!(keys_of(&root), keys_before);
        prop_assert_eq!(after, before);
    }

    #[test]
    fn layout_places_every_node(ops in prop::collection::vec(op(), 0..150)) {
        let (root, model) = apply(&ops);
        let grid = compute_layout(&root);
        prop_assert_eq!(grid.height(), avl::height(&root));
        prop_assert_eq!(grid.visible_count(), model.len());
        if let Some(node) = root.as_deref() {
            prop_assert_eq!(check_slots(node, SlotPos::ROOT, &grid), model.len());
        }
        for edge in grid.edges() {
            prop_assert_eq!(edge.child.parent(), Some(edge.parent));
        }
    }
}
