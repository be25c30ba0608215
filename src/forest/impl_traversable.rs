use core::fmt::Debug;
use crate::{
    storage::Storage,
    traversal::{
        Traversable,
        TraversableMut,
        VisitorDirection,
        CursorResult,
        CursorDirectionError,
    },
    TryRemoveLeafError,
};
use super::{Forest, Node};

impl<T, K, S> Traversable for Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    fn advance_cursor<V>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, V>,
    ) -> CursorResult<Self::Cursor> {
        let next = match direction {
            VisitorDirection::Parent => self.node(&cursor).parent.clone(),
            VisitorDirection::NextSibling => self.node(&cursor).next_sibling.clone(),
            VisitorDirection::Child(num) => self.nth_child_of(&cursor, num as usize),
            // Do not allow returning invalid cursors, as those will cause panicking
            VisitorDirection::SetTo(new_cursor) => Some(new_cursor)
                .filter(|new_cursor| self.storage.contains_key(new_cursor)),
            VisitorDirection::Stop(..) => None,
        };
        next.ok_or(CursorDirectionError {
            previous_state: cursor,
        })
    }
    #[inline(always)]
    fn cursor_to_first_root(&self) -> Option<Self::Cursor> {
        self.roots.first.clone()
    }
    #[inline]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        &self.node(cursor).value
    }
    #[inline]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node(cursor).parent.clone()
    }
    #[inline]
    fn next_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node(cursor).next_sibling.clone()
    }
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor> {
        let children = &self.node(cursor).children;
        if child_num >= children.len {
            return None;
        }
        let mut child = children.first.clone();
        for _ in 0..child_num {
            child = self.node(&child?).next_sibling.clone();
        }
        child
    }
}
impl<T, K, S> TraversableMut for Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn value_mut_of(&mut self, cursor: &Self::Cursor) -> &mut Self::Value {
        &mut self.node_mut(cursor).value
    }
    fn try_remove_leaf(&mut self, cursor: &Self::Cursor) -> Result<Self::Value, TryRemoveLeafError> {
        let node = self.node(cursor);
        if node.children.first.is_some() {
            return Err(TryRemoveLeafError);
        }
        let parent = node.parent.clone();
        let prev_sibling = node.prev_sibling.clone();
        let next_sibling = node.next_sibling.clone();
        match &prev_sibling {
            Some(prev) => self.node_mut(prev).next_sibling = next_sibling.clone(),
            None => self.child_list_mut(parent.as_ref()).first = next_sibling.clone(),
        }
        match &next_sibling {
            Some(next) => self.node_mut(next).prev_sibling = prev_sibling,
            None => self.child_list_mut(parent.as_ref()).last = prev_sibling,
        }
        self.child_list_mut(parent.as_ref()).len -= 1;
        Ok(self.storage.remove(cursor).value)
    }
}
