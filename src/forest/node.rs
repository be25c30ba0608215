use core::fmt::Debug;
use crate::{
    storage::Storage,
    util::unreachable_debugchecked,
};

/// A node of a forest.
///
/// Created by the forest internally and only publicly exposed so that forest storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) parent: Option<K>,
    pub(super) prev_sibling: Option<K>,
    pub(super) next_sibling: Option<K>,
    pub(super) children: ChildList<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a childless node which is to be appended after `prev_sibling`.
    #[inline(always)]
    pub(super) fn new(value: T, parent: Option<K>, prev_sibling: Option<K>) -> Self {
        Self {
            value,
            parent,
            prev_sibling,
            next_sibling: None,
            children: ChildList::default(),
        }
    }
}
impl<T> Node<T, usize> {
    /// Fixes the keys pointing at a node which was just moved to `index` inside the storage.
    ///
    /// Relies on the node's own links being intact: the parent, siblings and children it points to are updated to point back at the new index.
    pub(super) fn fix_move<S>(storage: &mut S, roots: &mut ChildList<usize>, index: usize)
    where S: Storage<Element = Self, Key = usize>,
    {
        let (parent, prev_sibling, next_sibling, mut child) = {
            let node = Self::expect_mut(storage, index);
            (node.parent, node.prev_sibling, node.next_sibling, node.children.first)
        };
        while let Some(key) = child {
            let child_node = Self::expect_mut(storage, key);
            child_node.parent = Some(index);
            child = child_node.next_sibling;
        }
        match (prev_sibling, parent) {
            (Some(prev), _) => Self::expect_mut(storage, prev).next_sibling = Some(index),
            (None, Some(parent)) => Self::expect_mut(storage, parent).children.first = Some(index),
            (None, None) => roots.first = Some(index),
        }
        match (next_sibling, parent) {
            (Some(next), _) => Self::expect_mut(storage, next).prev_sibling = Some(index),
            (None, Some(parent)) => Self::expect_mut(storage, parent).children.last = Some(index),
            (None, None) => roots.last = Some(index),
        }
    }
    fn expect_mut<S>(storage: &mut S, key: usize) -> &mut Self
    where S: Storage<Element = Self, Key = usize>,
    {
        storage.get_mut(&key).unwrap_or_else(|| unsafe {
            // SAFETY: links between nodes are kept valid across moves
            unreachable_debugchecked("node link points to a key which is not in the storage")
        })
    }
}

/// The ends and the length of a sibling list: either the children of a node or the roots of a forest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ChildList<K> {
    pub(super) first: Option<K>,
    pub(super) last: Option<K>,
    pub(super) len: usize,
}
impl<K> Default for ChildList<K> {
    #[inline(always)]
    fn default() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
        }
    }
}
