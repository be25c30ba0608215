use super::super::TraversableMut;

/// Removes the node at the specified cursor together with all of its descendants, returning the payload of that node and dropping the payloads of the descendants.
///
/// See [`recursive_removal_with`] for a version which collects the payloads of the descendants instead of dropping them.
///
/// # Panics
/// Will panic if the cursor is invalid.
///
/// [`recursive_removal_with`]: fn.recursive_removal_with.html " "
#[inline(always)]
pub fn recursive_removal<T>(traversable: &mut T, pivot: T::Cursor) -> T::Value
where T: TraversableMut,
{
    recursive_removal_with(traversable, pivot, drop)
}

/// Removes the node at the specified cursor together with all of its descendants, returning the payload of that node and feeding the payloads of the descendants into the collector.
///
/// Descendants are removed bottom-up, so the collector receives them in post-order: the children of a node before the node itself, left to right. The removal does not recurse, so arbitrarily deep subtrees cannot overflow the stack.
///
/// If the collector panics, the rest of the subtree, the pivot included, is still removed while unwinding, with the remaining payloads dropped instead of collected. The traversable never keeps a partially removed subtree.
///
/// # Panics
/// Will panic if the cursor is invalid, or if the traversable refuses to remove a node which has no children. Panics of the collector are propagated after the subtree is gone.
pub fn recursive_removal_with<T, C>(traversable: &mut T, pivot: T::Cursor, mut collector: C) -> T::Value
where
    T: TraversableMut,
    C: FnMut(T::Value),
{
    let mut cursor = pivot.clone();
    loop {
        while let Some(first_child) = traversable.nth_child_of(&cursor, 0) {
            cursor = first_child;
        }
        if cursor == pivot {
            return traversable
                .try_remove_leaf(&cursor)
                .expect("the pivot had no children left but could not be removed");
        }
        let parent = traversable
            .parent_of(&cursor)
            .expect("a descendant of the pivot had no parent");
        // Unlinked before the collector sees the payload
        let value = traversable
            .try_remove_leaf(&cursor)
            .expect("a node without children could not be removed");
        let guard = FinishOnUnwind {
            traversable: &mut *traversable,
            pivot: &pivot,
        };
        collector(value);
        guard.disarm();
        cursor = parent;
    }
}

/// Armed while the collector runs. If it unwinds, removes what is left of the pivot's subtree, dropping the payloads.
struct FinishOnUnwind<'a, T: TraversableMut> {
    traversable: &'a mut T,
    pivot: &'a T::Cursor,
}
impl<T: TraversableMut> FinishOnUnwind<'_, T> {
    #[inline(always)]
    fn disarm(self) {
        core::mem::forget(self)
    }
}
impl<T: TraversableMut> Drop for FinishOnUnwind<'_, T> {
    fn drop(&mut self) {
        recursive_removal(&mut *self.traversable, self.pivot.clone());
    }
}
