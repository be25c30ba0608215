use super::*;
use crate::storage::ReserveError;
use arrayvec::ArrayVec;
use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    rc::Rc,
};

type ArrayForest = Forest<
    i32,
    usize,
    SparseStorage<Node<i32, usize>, ArrayVec<[SparseStorageSlot<Node<i32, usize>>; 3]>>,
>;

fn collect<T: Clone, K, S>(forest: &Forest<T, K, S>) -> Vec<T>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let mut values = Vec::new();
    forest.for_all(|x| values.push(x.clone()));
    values
}

#[test]
fn entity_ids() {
    let mut forest = Forest::<i32>::new();
    for id in [-1, 1, 2, 3, 4, 5].iter().copied() {
        forest.insert(id).unwrap();
    }
    assert_eq!(collect(&forest), [-1, 1, 2, 3, 4, 5]);

    forest.insert_child(|&id| id == 5, 56).unwrap();
    assert_eq!(collect(&forest), [-1, 1, 2, 3, 4, 5, 56]);

    let mut even = Vec::new();
    forest.for_all_filtered(|&id| even.push(id), |&id| id % 2 == 0);
    assert_eq!(even, [2, 4, 56]);

    assert_eq!(forest.erase(|&id| id == 5), Ok(5));
    assert!(!forest.contains(|&id| id == 5));
    assert!(!forest.contains(|&id| id == 56));
    assert!(forest.contains(|&id| id == 3));
    assert_eq!(collect(&forest), [-1, 1, 2, 3, 4]);
}

#[test]
fn roots_keep_insertion_order() {
    let mut forest = Forest::<u8>::new();
    assert!(forest.is_empty());
    assert_eq!(forest.num_roots(), 0);
    for x in 0..10 {
        forest.insert(x).unwrap();
    }
    assert_eq!(forest.num_roots(), 10);
    assert_eq!(forest.len(), 10);
    assert_eq!(collect(&forest), (0..10).collect::<Vec<_>>());

    forest.insert_child(|&x| x == 3, 30).unwrap();
    assert_eq!(forest.num_roots(), 10);
    forest.erase(|&x| x == 0).unwrap();
    forest.erase(|&x| x == 3).unwrap();
    forest.erase(|&x| x == 9).unwrap();
    assert_eq!(forest.num_roots(), 7);
    assert_eq!(forest.len(), 7);
    forest.clear();
    assert_eq!(forest.num_roots(), 0);
    forest.insert(0).unwrap();
    assert_eq!(forest.num_roots(), 1);
}

#[test]
fn children_are_appended_last() {
    let mut forest = Forest::<&str>::new();
    forest.insert("root").unwrap();
    forest.insert("other root").unwrap();
    for child in ["a", "b", "c"].iter().copied() {
        forest.insert_child(|&x| x == "root", child).unwrap();
    }
    forest.insert_child(|&x| x == "b", "b1").unwrap();
    assert_eq!(forest.num_roots(), 2);
    assert_eq!(forest.len(), 6);
    assert_eq!(
        collect(&forest),
        ["root", "a", "b", "b1", "c", "other root"],
    );
}

#[test]
fn first_match_is_depth_first() {
    let mut forest = Forest::<i32>::new();
    forest.insert(1).unwrap();
    forest.insert(2).unwrap();
    // The child 2 under the root 1 comes before the root 2
    forest.insert_child(|&x| x == 1, 2).unwrap();
    forest.insert_child(|&x| x == 2, 3).unwrap();
    assert_eq!(collect(&forest), [1, 2, 3, 2]);
    assert_eq!(forest.erase(|&x| x == 2), Ok(2));
    assert_eq!(collect(&forest), [1, 2]);
    assert_eq!(forest.num_roots(), 2);
}

#[test]
fn insert_child_without_match() {
    let mut forest = Forest::<i32>::new();
    assert_eq!(forest.insert_child(|_| true, 1), Err(InsertError::NoMatch));
    forest.insert(1).unwrap();
    let mut constructed = false;
    let result = forest.insert_child_with(
        |&x| x == 7,
        || {
            constructed = true;
            7
        },
    );
    assert_eq!(result, Err(InsertError::NoMatch));
    assert!(!constructed);
    assert_eq!(forest.len(), 1);
}

#[test]
fn filtered_traversal_descends_into_rejected_nodes() {
    let mut forest = Forest::<i32>::new();
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 3).unwrap();
    forest.insert_child(|&x| x == 3, 4).unwrap();
    forest.insert_child(|&x| x == 4, 5).unwrap();
    forest.insert_child(|&x| x == 5, 6).unwrap();
    forest.insert(7).unwrap();
    forest.insert_child(|&x| x == 7, 8).unwrap();

    let mut even = Vec::new();
    forest.for_all_filtered(|&x| even.push(x), |&x| x % 2 == 0);
    assert_eq!(even, [4, 6, 8]);

    let mut none = Vec::new();
    forest.for_all_filtered(|&x| none.push(x), |_| false);
    assert!(none.is_empty());
}

#[test]
fn erase_keeps_siblings() {
    let mut forest = Forest::<i32>::new();
    forest.insert(0).unwrap();
    for x in 1..=3 {
        forest.insert_child(|&y| y == 0, x).unwrap();
    }
    forest.insert_child(|&y| y == 2, 20).unwrap();
    forest.insert_child(|&y| y == 20, 200).unwrap();

    assert_eq!(forest.erase(|&y| y == 2), Ok(2));
    assert_eq!(collect(&forest), [0, 1, 3]);
    assert_eq!(forest.len(), 3);

    // The erased node's position can be filled again, after the remaining siblings
    forest.insert_child(|&y| y == 0, 2).unwrap();
    assert_eq!(collect(&forest), [0, 1, 3, 2]);

    assert_eq!(forest.erase(|&y| y == 1), Ok(1));
    assert_eq!(forest.erase(|&y| y == 2), Ok(2));
    assert_eq!(collect(&forest), [0, 3]);
    assert_eq!(forest.erase(|&y| y == 3), Ok(3));
    forest.insert_child(|&y| y == 0, 4).unwrap();
    assert_eq!(collect(&forest), [0, 4]);
}

#[test]
fn erase_without_match() {
    let mut forest = Forest::<i32>::new();
    assert_eq!(forest.erase(|_| true), Err(NotFound));
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 2).unwrap();
    let mut collected = Vec::new();
    assert_eq!(forest.erase_with(|&x| x == 3, |x| collected.push(x)), Err(NotFound));
    assert!(collected.is_empty());
    assert_eq!(collect(&forest), [1, 2]);
}

#[test]
fn erase_drops_descendants() {
    let counter = Rc::new(());
    let mut forest = Forest::<(u32, Rc<()>)>::new();
    forest.insert((0, Rc::clone(&counter))).unwrap();
    forest.insert((1, Rc::clone(&counter))).unwrap();
    for x in 2..6 {
        forest
            .insert_child(|&(y, _)| y == x - 1 || (x == 2 && y == 0), (x, Rc::clone(&counter)))
            .unwrap();
    }
    assert_eq!(Rc::strong_count(&counter), 7);
    let erased = forest.erase(|&(y, _)| y == 0).unwrap();
    assert_eq!(erased.0, 0);
    drop(erased);
    assert_eq!(Rc::strong_count(&counter), 2);
    assert_eq!(forest.len(), 1);
}

#[test]
fn erase_with_collects_in_post_order() {
    let mut forest = Forest::<i32>::new();
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 2).unwrap();
    forest.insert_child(|&x| x == 2, 3).unwrap();
    forest.insert_child(|&x| x == 2, 4).unwrap();
    forest.insert_child(|&x| x == 1, 5).unwrap();
    forest.insert_child(|&x| x == 5, 6).unwrap();
    forest.insert(7).unwrap();

    let mut descendants = Vec::new();
    assert_eq!(forest.erase_with(|&x| x == 1, |x| descendants.push(x)), Ok(1));
    assert_eq!(descendants, [3, 4, 2, 6, 5]);
    assert_eq!(collect(&forest), [7]);
}

#[test]
fn erase_with_panicking_collector() {
    let counter = Rc::new(());
    let mut forest = Forest::<(u32, Rc<()>)>::new();
    forest.insert((1, Rc::clone(&counter))).unwrap();
    for &(parent, x) in [(1, 2), (1, 3), (3, 4), (3, 5), (4, 6)].iter() {
        forest
            .insert_child(|&(y, _)| y == parent, (x, Rc::clone(&counter)))
            .unwrap();
    }
    forest.insert((7, Rc::clone(&counter))).unwrap();
    assert_eq!(Rc::strong_count(&counter), 8);

    let mut collected = Vec::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        forest.erase_with(
            |&(y, _)| y == 1,
            |(x, _)| {
                if x == 6 {
                    panic!("collector failed on {}", x);
                }
                collected.push(x);
            },
        )
    }));
    assert!(result.is_err());
    assert_eq!(collected, [2]);
    // Neither the matched node nor any of its descendants survive
    assert_eq!(forest.len(), 1);
    assert_eq!(forest.num_roots(), 1);
    assert!(!forest.contains(|&(y, _)| y == 1));
    assert_eq!(Rc::strong_count(&counter), 2);

    forest.insert_child(|&(y, _)| y == 7, (8, Rc::clone(&counter))).unwrap();
    assert_eq!(
        collect(&forest).into_iter().map(|(x, _)| x).collect::<Vec<_>>(),
        [7, 8],
    );
}

#[test]
fn erase_deep_chain() {
    let mut forest = Forest::<u32>::new();
    forest.insert(0).unwrap();
    for x in 1..1000 {
        forest.insert_child(|&y| y == x - 1, x).unwrap();
    }
    assert_eq!(forest.len(), 1000);
    assert_eq!(forest.erase(|&y| y == 0), Ok(0));
    assert!(forest.is_empty());
    assert_eq!(forest.len(), 0);
}

#[test]
fn get_and_get_mut() {
    let mut forest = Forest::<(u32, &str)>::new();
    forest.insert((1, "one")).unwrap();
    forest.insert_child(|&(id, _)| id == 1, (2, "two")).unwrap();
    assert_eq!(forest.get(|&(id, _)| id == 2), Ok(&(2, "two")));
    assert_eq!(forest.get(|&(id, _)| id == 3), Err(NotFound));

    forest.get_mut(|&(id, _)| id == 2).unwrap().1 = "deux";
    assert_eq!(forest.get(|&(id, _)| id == 2), Ok(&(2, "deux")));
    assert_eq!(forest.get_mut(|&(id, _)| id == 3), Err(NotFound));
}

#[test]
fn for_all_mut_visits_everything() {
    let mut forest = Forest::<i32>::new();
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 2).unwrap();
    forest.insert_child(|&x| x == 2, 3).unwrap();
    forest.insert(4).unwrap();
    forest.for_all_mut(|x| *x *= 10);
    assert_eq!(collect(&forest), [10, 20, 30, 40]);
}

#[test]
fn clear() {
    let mut forest = Forest::<i32>::new();
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 2).unwrap();
    forest.clear();
    assert!(forest.is_empty());
    assert_eq!(forest.len(), 0);
    assert!(!forest.contains(|_| true));
    forest.insert(3).unwrap();
    assert_eq!(collect(&forest), [3]);
}

#[test]
fn fixed_capacity() {
    let mut forest = ArrayForest::new();
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 2).unwrap();
    forest.insert(3).unwrap();

    let full = Err(InsertError::ConstructionFailure(ReserveError::CapacityExceeded));
    assert_eq!(forest.insert(4), full);
    let mut constructed = false;
    let result = forest.insert_child_with(
        |&x| x == 3,
        || {
            constructed = true;
            4
        },
    );
    assert_eq!(result, full);
    assert!(!constructed);
    assert_eq!(collect(&forest), [1, 2, 3]);

    // Erasing frees up a slot
    assert_eq!(forest.erase(|&x| x == 2), Ok(2));
    forest.insert_child(|&x| x == 3, 4).unwrap();
    assert_eq!(collect(&forest), [1, 3, 4]);
}

#[cfg(feature = "smallvec")]
#[test]
fn smallvec_storage() {
    type SmallVecForest = Forest<
        u8,
        usize,
        SparseStorage<Node<u8, usize>, smallvec::SmallVec<[SparseStorageSlot<Node<u8, usize>>; 2]>>,
    >;
    let mut forest = SmallVecForest::new();
    forest.insert(0).unwrap();
    forest.insert(1).unwrap();
    // Spills to the heap
    forest.insert_child(|&x| x == 1, 10).unwrap();
    forest.insert_child(|&x| x == 10, 100).unwrap();
    forest.insert(2).unwrap();
    assert_eq!(forest.len(), 5);
    assert_eq!(collect(&forest), [0, 1, 10, 100, 2]);

    assert_eq!(forest.erase(|&x| x == 0), Ok(0));
    assert_eq!(forest.num_holes(), 1);
    forest.insert_child(|&x| x == 2, 20).unwrap();
    assert!(forest.is_dense());
    assert_eq!(collect(&forest), [1, 10, 100, 2, 20]);

    assert_eq!(forest.erase(|&x| x == 10), Ok(10));
    forest.defragment();
    assert!(forest.is_dense());
    assert_eq!(collect(&forest), [1, 2, 20]);
}

#[test]
fn holes_are_reused() {
    let mut forest = SparseVecForest::new();
    for x in 0..4 {
        forest.insert(x).unwrap();
    }
    forest.erase(|&x| x == 1).unwrap();
    assert_eq!(forest.num_holes(), 1);
    assert!(!forest.is_dense());
    forest.insert(9).unwrap();
    assert!(forest.is_dense());
    assert_eq!(forest.len(), 4);
    assert_eq!(collect(&forest), [0, 2, 3, 9]);
}

#[test]
fn defragment_keeps_shape() {
    let mut forest = SparseVecForest::new();
    for x in 0..3 {
        forest.insert(x).unwrap();
    }
    for x in 10..14 {
        forest.insert_child(|&y| y == 0, x).unwrap();
        forest.insert_child(|&y| y == 2, x + 10).unwrap();
    }
    forest.insert_child(|&y| y == 21, 210).unwrap();
    forest.insert_child(|&y| y == 23, 230).unwrap();
    forest.insert_child(|&y| y == 230, 2300).unwrap();

    forest.erase(|&y| y == 0).unwrap();
    forest.erase(|&y| y == 22).unwrap();
    assert_eq!(forest.num_holes(), 6);
    let before = collect(&forest);

    forest.defragment();
    assert!(forest.is_dense());
    assert_eq!(forest.len(), before.len());
    assert_eq!(collect(&forest), before);
    assert_eq!(forest.num_roots(), 2);

    // The links have to stay usable after being moved around
    forest.insert_child(|&y| y == 230, 2301).unwrap();
    forest.insert_child(|&y| y == 2, 24).unwrap();
    forest.insert(3).unwrap();
    assert_eq!(
        collect(&forest),
        [1, 2, 20, 21, 210, 23, 230, 2300, 2301, 24, 3],
    );
    assert_eq!(forest.erase(|&y| y == 23), Ok(23));
    assert_eq!(collect(&forest), [1, 2, 20, 21, 210, 24, 3]);
}
