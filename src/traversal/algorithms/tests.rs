use super::*;
use crate::{
    traversal::{Traversable, TraversableMut, Visitor, VisitorDirection, CursorDirectionError},
    Forest,
    TryRemoveLeafError,
};
use std::vec::Vec;

type Sample = Forest<u32>;

/// 1 -> [2 -> [3, 4], 5], 6 -> [7]
fn sample() -> Sample {
    let mut forest = Forest::new();
    forest.insert(1).unwrap();
    forest.insert_child(|&x| x == 1, 2).unwrap();
    forest.insert_child(|&x| x == 2, 3).unwrap();
    forest.insert_child(|&x| x == 2, 4).unwrap();
    forest.insert_child(|&x| x == 1, 5).unwrap();
    forest.insert(6).unwrap();
    forest.insert_child(|&x| x == 6, 7).unwrap();
    forest
}
fn find(forest: &Sample, value: u32) -> usize {
    forest
        .traverse(FindFirst::<Sample, _>::new(|&x| x == value))
        .flatten()
        .expect("value not in the forest")
}

/// Climbs from the starting node up to its root, recording every payload on the way.
struct Ancestry(Vec<u32>);
impl Visitor for Ancestry {
    type Target = Forest<u32>;
    type Output = Vec<u32>;

    fn visit(
        &mut self,
        traversable: &Forest<u32>,
        cursor: &usize,
    ) -> VisitorDirection<usize, Vec<u32>> {
        self.0.push(*traversable.value_of(cursor));
        if traversable.parent_of(cursor).is_some() {
            VisitorDirection::Parent
        } else {
            VisitorDirection::Stop(core::mem::take(&mut self.0))
        }
    }
}

#[test]
fn preorder() {
    let forest = sample();
    let mut order = Vec::new();
    let mut cursor = forest.cursor_to_first_root();
    while let Some(current) = cursor {
        order.push(*forest.value_of(&current));
        cursor = preorder_successor(&forest, &current);
    }
    assert_eq!(order, [1, 2, 3, 4, 5, 6, 7]);

    let mut visited = Vec::new();
    forest.traverse(ForEach::<Sample, _>::new(|&x| visited.push(x)));
    assert_eq!(visited, order);
}

#[test]
fn find_first() {
    let forest = sample();
    let five = forest.traverse(FindFirst::<Sample, _>::new(|&x| x == 5)).flatten();
    assert_eq!(five.map(|cursor| *forest.value_of(&cursor)), Some(5));
    assert_eq!(forest.traverse(FindFirst::<Sample, _>::new(|&x| x > 10)), Some(None));
    assert_eq!(Sample::new().traverse(FindFirst::<Sample, _>::new(|_| true)), None);
}

#[test]
fn filtered() {
    let forest = sample();
    let mut odd = Vec::new();
    forest.traverse(ForEachFiltered::<Sample, _, _>::new(|&x| odd.push(x), |&x| x % 2 == 1));
    assert_eq!(odd, [1, 3, 5, 7]);
}

#[test]
fn climbing_visitor() {
    let forest = sample();
    let start = find(&forest, 4);
    assert_eq!(forest.traverse_from(start, Ancestry(Vec::new())), [4, 2, 1]);
    let start = find(&forest, 7);
    assert_eq!(forest.traverse_from(start, Ancestry(Vec::new())), [7, 6]);
}

#[test]
fn cursor_directions() {
    let forest = sample();
    let two = find(&forest, 2);
    let five = find(&forest, 5);
    let three = forest
        .advance_cursor(two, VisitorDirection::<usize, ()>::Child(0))
        .unwrap();
    assert_eq!(forest.value_of(&three), &3);
    let four = forest
        .advance_cursor(two, VisitorDirection::<usize, ()>::Child(1))
        .unwrap();
    assert_eq!(forest.value_of(&four), &4);
    assert_eq!(
        forest.advance_cursor(two, VisitorDirection::<usize, ()>::Child(2)),
        Err(CursorDirectionError { previous_state: two }),
    );
    assert_eq!(
        forest.advance_cursor(two, VisitorDirection::<usize, ()>::NextSibling),
        Ok(five),
    );
    assert_eq!(
        forest.advance_cursor(five, VisitorDirection::<usize, ()>::NextSibling),
        Err(CursorDirectionError { previous_state: five }),
    );
    assert_eq!(
        forest.advance_cursor(two, VisitorDirection::<usize, ()>::SetTo(100)),
        Err(CursorDirectionError { previous_state: two }),
    );
    assert_eq!(
        forest
            .advance_cursor(two, VisitorDirection::Stop(()))
            .unwrap_or_else(CursorDirectionError::recover),
        two,
    );
    let root = find(&forest, 1);
    assert_eq!(
        forest.advance_cursor(root, VisitorDirection::<usize, ()>::Parent),
        Err(CursorDirectionError { previous_state: root }),
    );
}

#[test]
fn removal() {
    let mut forest = sample();
    let two = find(&forest, 2);
    assert_eq!(forest.try_remove_leaf(&two), Err(TryRemoveLeafError));
    let four = find(&forest, 4);
    assert_eq!(forest.try_remove_leaf(&four), Ok(4));

    let one = find(&forest, 1);
    let mut removed = Vec::new();
    assert_eq!(recursive_removal_with(&mut forest, one, |x| removed.push(x)), 1);
    assert_eq!(removed, [3, 2, 5]);

    let six = find(&forest, 6);
    assert_eq!(recursive_removal(&mut forest, six), 6);
    assert!(forest.is_empty());
}
