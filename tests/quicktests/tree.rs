use bst_set::error::SetError;
use bst_set::tree::Tree;

use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| {
        let agrees = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
            Op::Remove(x) => tree.remove(x) == set.remove(x),
        };
        agrees && tree.check_invariant()
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn invariant_holds_after_every_insert(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    xs.into_iter().all(|x| {
        tree.insert(x);
        tree.check_invariant()
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i16>, x: i16) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);
    let before = tree.clone();

    !tree.insert(x) && tree == before
}

#[quickcheck]
fn remove_shrinks_by_one(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| {
        let len = tree.len();
        if tree.remove(x) {
            tree.len() == len - 1 && !tree.contains(x) && tree.check_invariant()
        } else {
            // Already removed as a duplicate earlier in `xs`.
            tree.len() == len
        }
    })
}

#[quickcheck]
fn remove_keeps_every_other_value(xs: Vec<i16>, x: i16) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.insert(x);
    tree.remove(&x);

    tree.check_invariant() && xs.iter().filter(|&&y| y != x).all(|y| tree.contains(y))
}

#[quickcheck]
fn iteration_is_strictly_increasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let values: Vec<_> = tree.iter().collect();

    values.len() == tree.len() && values.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn first_and_last(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.first() == Ok(min) && tree.last() == Ok(max),
        _ => tree.first() == Err(SetError::Empty) && tree.last() == Err(SetError::Empty),
    }
}

#[test]
fn scenario_from_the_docs() {
    let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.first(), Ok(&1));
    assert_eq!(tree.last(), Ok(&9));

    assert!(tree.remove(&5));
    assert!(tree.check_invariant());
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
    assert!(!tree.contains(&5));

    assert!(!tree.remove(&100));
    assert_eq!(tree.len(), 6);
}
