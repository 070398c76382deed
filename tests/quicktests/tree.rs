use ordered_tree::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Delete(x) => {
                assert_eq!(bst.delete(x), set.remove(x));
            }
        }
        assert_eq!(bst.len(), set.len());
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn inorder_is_strictly_increasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let values = tree.inorder_vals();

    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn cardinality_ignores_insert_order(xs: Vec<i8>) -> bool {
    let forwards: Tree<_> = xs.iter().copied().collect();
    let backwards: Tree<_> = xs.iter().rev().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    forwards.len() == distinct.len()
        && forwards.inorder_vals().len() == distinct.len()
        && forwards == backwards
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut once: Tree<_> = xs.iter().copied().collect();
    once.insert(x);
    let mut twice: Tree<_> = xs.into_iter().collect();
    twice.insert(x);
    twice.insert(x);

    once.preorder() == twice.preorder()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    tree.validate().is_ok()
        && deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
}

#[test]
fn scenario_from_sorted_walk() {
    let mut tree = Tree::new();
    for value in [5, 3, 7, 2, 4, 6, 8] {
        tree.insert(value);
    }
    assert_eq!(tree.inorder_vals(), vec![2, 3, 4, 5, 6, 7, 8]);
    assert!(tree.search(&6));
    assert!(!tree.search(&10));

    assert!(!tree.insert(5));
    assert!(!tree.delete(&99));
    assert_eq!(tree.inorder_vals(), vec![2, 3, 4, 5, 6, 7, 8]);

    assert!(tree.delete(&7));
    assert!(!tree.delete(&7));
    assert_eq!(tree.inorder_vals(), vec![2, 3, 4, 5, 6, 8]);
}
