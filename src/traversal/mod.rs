//! Cursor-driven traversal of forests.
//!
//! A [`Traversable`] exposes its nodes through cheap *cursors* and knows how to move a cursor to a parent, a sibling or a child. A [`Visitor`] holds the state of an algorithm: it is shown one node at a time and answers with a [`VisitorDirection`] saying where to go next or that it's done. [`TraversableMut`] adds payload mutation and leaf removal on top.
//!
//! The searches and traversals used by `Forest` live in [`algorithms`] and are written against these traits only.
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraversableMut`]: trait.TraversableMut.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "

pub mod algorithms;

use core::fmt::{self, Formatter, Debug, Display};
use crate::TryRemoveLeafError;

/// A stateful algorithm which steers a cursor through a [`Traversable`].
///
/// Visitors only get shared access to the traversable, so they cannot change it.
///
/// [`Traversable`]: trait.Traversable.html " "
pub trait Visitor {
    /// The structure being walked.
    type Target: Traversable;
    /// What the visitor produces once it stops.
    type Output;
    /// Inspects the node at the cursor and decides where to go next.
    ///
    /// # Panics
    /// May panic if called again after returning `Stop`.
    fn visit(
        &mut self,
        traversable: &Self::Target,
        cursor: &<Self::Target as Traversable>::Cursor,
    ) -> VisitorDirection<<Self::Target as Traversable>::Cursor, Self::Output>;
}

/// Where a visitor wants the cursor to go after a visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<C: Clone + Debug + Eq, V> {
    /// Up to the parent.
    Parent,
    /// Right, to the next sibling.
    NextSibling,
    /// Down, to the child with the given zero-based index.
    Child(u32),
    /// Jump straight to an arbitrary node, such as the next sibling of an ancestor after a subtree is exhausted.
    SetTo(C),
    /// Finish with the given result.
    Stop(V),
}

/// Forest-like structures which visitors can walk.
///
/// There may be several roots. Roots have no parent and are siblings of one another.
pub trait Traversable: Sized {
    /// The payload stored in every node.
    type Value;
    /// A handle to a node, cloned on every step.
    ///
    /// Mutating the traversable may invalidate cursors or make them refer to other nodes.
    type Cursor: Clone + Debug + Eq;

    /// Moves the cursor as the direction says.
    ///
    /// # Errors
    /// Fails, handing the cursor back, if there is no node in that direction. `Stop` never leads anywhere and always fails.
    fn advance_cursor<V>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, V>,
    ) -> CursorResult<Self::Cursor>;
    /// The first root, or `None` if there are no nodes at all.
    fn cursor_to_first_root(&self) -> Option<Self::Cursor>;
    /// The payload of the node.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// The parent of the node, or `None` for roots.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// The sibling right after the node, or `None` for the last child or last root.
    fn next_sibling_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// The child of the node at the zero-based index, or `None` if there are not that many children.
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor>;

    /// Shows the node at the cursor to the visitor and follows its answer once.
    fn step<V>(&self, visitor: &mut V, cursor: Self::Cursor) -> Step<Self::Cursor, V::Output>
    where V: Visitor<Target = Self>,
    {
        match visitor.visit(self, &cursor) {
            VisitorDirection::Stop(output) => Step::End(output),
            direction => Step::NextCursor(self.advance_cursor(cursor, direction)),
        }
    }
    /// Runs the visitor from the first root until it stops. Returns `None` without running it if there are no nodes.
    ///
    /// # Panics
    /// Panics if the visitor asks to move somewhere the cursor cannot go.
    #[inline(always)]
    fn traverse<V>(&self, visitor: V) -> Option<V::Output>
    where V: Visitor<Target = Self>,
    {
        let root = self.cursor_to_first_root()?;
        Some(self.traverse_from(root, visitor))
    }
    /// Runs the visitor from the given node until it stops.
    ///
    /// # Panics
    /// Panics if the visitor asks to move somewhere the cursor cannot go.
    fn traverse_from<V>(&self, start: Self::Cursor, mut visitor: V) -> V::Output
    where V: Visitor<Target = Self>,
    {
        let mut step = self.step(&mut visitor, start);
        loop {
            match step {
                Step::End(output) => return output,
                Step::NextCursor(Ok(cursor)) => step = self.step(&mut visitor, cursor),
                Step::NextCursor(Err(CursorDirectionError { previous_state })) => panic!(
                    "visitor gave directions which cannot be followed from {:?}",
                    previous_state,
                ),
            }
        }
    }
}

/// Traversables whose payloads can be changed and whose leaves can be removed.
pub trait TraversableMut: Traversable {
    /// The payload of the node, mutably.
    fn value_mut_of(&mut self, cursor: &Self::Cursor) -> &mut Self::Value;
    /// Detaches and removes a node without children, returning its payload. The cursor becomes invalid.
    ///
    /// # Errors
    /// Refuses to remove nodes which still have children. [`recursive_removal`] takes care of whole subtrees.
    ///
    /// [`recursive_removal`]: algorithms/fn.recursive_removal.html " "
    fn try_remove_leaf(&mut self, cursor: &Self::Cursor) -> Result<Self::Value, TryRemoveLeafError>;
}

/// The outcome of [`Traversable::step`].
///
/// [`Traversable::step`]: trait.Traversable.html#method.step " "
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step<C: Clone + Debug + Eq, V> {
    /// The visitor wants to continue, and this is where its directions led.
    NextCursor(CursorResult<C>),
    /// The visitor stopped with this result.
    End(V),
}

/// A visitor's directions pointed at a node which does not exist.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorDirectionError<C: Clone + Debug + Eq> {
    /// Where the cursor was before the failed move.
    pub previous_state: C,
}
/// Either the moved cursor or the unmoved one wrapped in an error.
pub type CursorResult<C> = Result<C, CursorDirectionError<C>>;
impl<C: Clone + Debug + Eq> CursorDirectionError<C> {
    /// Takes the unmoved cursor back out, e.g. with `CursorResult::unwrap_or_else`.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn recover(self) -> C {
        self.previous_state
    }
}
impl<C: Clone + Debug + Eq> Display for CursorDirectionError<C> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cursor at {:?} cannot move in the requested direction", self.previous_state)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<C: Clone + Debug + Eq> std::error::Error for CursorDirectionError<C> {}
