#![cfg(feature = "nightly")]
#![feature(test)]
extern crate test;

use avl_tree::{BalancedOrderedTree, RotationRule, Traversal};

const NUM_VALUES: usize = 10000;




/**
 * Deterministic pseudo-random values from a linear congruential generator.
 */
fn stupid_random_values(len: usize, mut seed: usize) -> Vec<usize> {
    let mut values = Vec::new();
    for _ in 0..len {
        seed = (1103515245 * seed + 12345) % (1 << 31);
        values.push(seed)
    }
    values
}




// ============================================================================
#[bench]
fn insert_random_values(b: &mut test::Bencher) {
    let values = stupid_random_values(NUM_VALUES, 666);

    b.iter(|| {
        let mut tree = BalancedOrderedTree::natural();
        tree.extend(values.iter().cloned());
        assert_eq!(tree.size(), NUM_VALUES);
    });
}




// ============================================================================
#[bench]
fn insert_ascending_values(b: &mut test::Bencher) {
    b.iter(|| {
        let tree: BalancedOrderedTree<_> = (0..NUM_VALUES).collect();
        assert!(tree.height() <= 20);
    });
}




// ============================================================================
#[bench]
fn insert_ascending_values_with_presence_rule(b: &mut test::Bencher) {
    b.iter(|| {
        let mut tree = BalancedOrderedTree::natural().with_rotation_rule(RotationRule::Presence);
        tree.extend(0..NUM_VALUES);
        assert_eq!(tree.size(), NUM_VALUES);
    });
}




// ============================================================================
#[bench]
fn find_every_value(b: &mut test::Bencher) {
    let values = stupid_random_values(NUM_VALUES, 12345);
    let tree: BalancedOrderedTree<_> = values.iter().cloned().collect();

    b.iter(|| {
        assert!(values.iter().all(|x| tree.find(x)));
    });
}




// ============================================================================
#[bench]
fn insert_then_remove_every_value(b: &mut test::Bencher) {
    let values = stupid_random_values(NUM_VALUES, 42);

    b.iter(|| {
        let mut tree: BalancedOrderedTree<_> = values.iter().cloned().collect();
        for x in &values {
            tree.remove(x);
        }
        assert!(tree.is_empty());
    });
}




// ============================================================================
#[bench]
fn export_in_order(b: &mut test::Bencher) {
    let tree: BalancedOrderedTree<_> = stupid_random_values(NUM_VALUES, 7).into_iter().collect();
    let mut out = vec![0; NUM_VALUES];

    b.iter(|| {
        tree.to_array_inorder(&mut out);
        assert_eq!(tree.copy_into(Traversal::ReverseOrder, &mut out), Ok(NUM_VALUES));
    });
}
