use ordered_tree::arena::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    for op in &ops {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
                set.insert(*k);
            }
            Op::Delete(k) => {
                tree.delete(k);
                set.remove(k);
            }
        }
    }

    tree.len() == set.len() && tree.traverse().eq(set.iter())
}

#[quickcheck]
fn agrees_with_owned_tree(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut arena: Tree<i8> = xs.iter().copied().collect();
    let mut owned: ordered_tree::owned::Tree<i8> = xs.into_iter().collect();
    for delete in &deletes {
        arena.delete(delete);
        owned.delete(delete);
    }

    arena.traverse().eq(owned.traverse())
}

#[quickcheck]
fn delete_absent_is_a_no_op(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|x| *x != k).collect();
    let before: Vec<_> = tree.traverse().copied().collect();
    tree.delete(&k);

    tree.traverse().copied().eq(before)
}
