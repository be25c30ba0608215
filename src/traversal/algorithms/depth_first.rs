use core::{
    convert::Infallible,
    fmt::{self, Formatter, Debug},
    marker::PhantomData,
};
use super::super::{Traversable, Visitor, VisitorDirection};

/// Returns the direction leading from the node at the specified cursor to the next node in depth-first, left-to-right order, or `None` if the node is the last one in that order.
///
/// The first child comes first; if there are no children, the next sibling of the node or of its closest ancestor which has one is picked.
pub fn preorder_direction<T, V>(
    traversable: &T,
    cursor: &T::Cursor,
) -> Option<VisitorDirection<T::Cursor, V>>
where T: Traversable,
{
    if traversable.nth_child_of(cursor, 0).is_some() {
        return Some(VisitorDirection::Child(0));
    }
    if traversable.next_sibling_of(cursor).is_some() {
        return Some(VisitorDirection::NextSibling);
    }
    let mut ancestor = traversable.parent_of(cursor);
    while let Some(current) = ancestor {
        if let Some(sibling) = traversable.next_sibling_of(&current) {
            return Some(VisitorDirection::SetTo(sibling));
        }
        ancestor = traversable.parent_of(&current);
    }
    None
}
/// Returns a cursor to the node which comes after the one at the specified cursor in depth-first, left-to-right order, or `None` if it's the last one.
pub fn preorder_successor<T>(traversable: &T, cursor: &T::Cursor) -> Option<T::Cursor>
where T: Traversable,
{
    preorder_direction::<T, Infallible>(traversable, cursor)
        .and_then(|direction| traversable.advance_cursor(cursor.clone(), direction).ok())
}

/// A `Visitor` which finds the first node in depth-first, left-to-right order whose payload satisfies the predicate, producing a cursor to it or `None` if there isn't one.
pub struct FindFirst<T, P> {
    predicate: P,
    _target: PhantomData<fn(&T)>,
}
impl<T, P> FindFirst<T, P>
where
    T: Traversable,
    P: FnMut(&T::Value) -> bool,
{
    /// Creates the visitor from the predicate to test payloads with.
    #[inline(always)]
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            _target: PhantomData,
        }
    }
}
impl<T, P> Visitor for FindFirst<T, P>
where
    T: Traversable,
    P: FnMut(&T::Value) -> bool,
{
    type Target = T;
    type Output = Option<T::Cursor>;

    fn visit(
        &mut self,
        traversable: &T,
        cursor: &T::Cursor,
    ) -> VisitorDirection<T::Cursor, Self::Output> {
        if (self.predicate)(traversable.value_of(cursor)) {
            return VisitorDirection::Stop(Some(cursor.clone()));
        }
        preorder_direction(traversable, cursor).unwrap_or(VisitorDirection::Stop(None))
    }
}
impl<T, P> Debug for FindFirst<T, P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindFirst").finish_non_exhaustive()
    }
}

/// A `Visitor` which calls a closure on the payload of every node, in depth-first, left-to-right order.
pub struct ForEach<T, F> {
    f: F,
    _target: PhantomData<fn(&T)>,
}
impl<T, F> ForEach<T, F>
where
    T: Traversable,
    F: FnMut(&T::Value),
{
    /// Creates the visitor from the closure to call on every payload.
    #[inline(always)]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _target: PhantomData,
        }
    }
}
impl<T, F> Visitor for ForEach<T, F>
where
    T: Traversable,
    F: FnMut(&T::Value),
{
    type Target = T;
    type Output = ();

    fn visit(&mut self, traversable: &T, cursor: &T::Cursor) -> VisitorDirection<T::Cursor, ()> {
        (self.f)(traversable.value_of(cursor));
        preorder_direction(traversable, cursor).unwrap_or(VisitorDirection::Stop(()))
    }
}
impl<T, F> Debug for ForEach<T, F> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEach").finish_non_exhaustive()
    }
}

/// A `Visitor` which calls a closure on the payload of every node which satisfies the predicate, in depth-first, left-to-right order.
///
/// The predicate only decides whether the closure is called: the children of a node which does not satisfy it are still visited and tested.
pub struct ForEachFiltered<T, F, P> {
    f: F,
    predicate: P,
    _target: PhantomData<fn(&T)>,
}
impl<T, F, P> ForEachFiltered<T, F, P>
where
    T: Traversable,
    F: FnMut(&T::Value),
    P: FnMut(&T::Value) -> bool,
{
    /// Creates the visitor from the closure to call on matching payloads and the predicate to test payloads with.
    #[inline(always)]
    pub fn new(f: F, predicate: P) -> Self {
        Self {
            f,
            predicate,
            _target: PhantomData,
        }
    }
}
impl<T, F, P> Visitor for ForEachFiltered<T, F, P>
where
    T: Traversable,
    F: FnMut(&T::Value),
    P: FnMut(&T::Value) -> bool,
{
    type Target = T;
    type Output = ();

    fn visit(&mut self, traversable: &T, cursor: &T::Cursor) -> VisitorDirection<T::Cursor, ()> {
        let value = traversable.value_of(cursor);
        if (self.predicate)(value) {
            (self.f)(value);
        }
        preorder_direction(traversable, cursor).unwrap_or(VisitorDirection::Stop(()))
    }
}
impl<T, F, P> Debug for ForEachFiltered<T, F, P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEachFiltered").finish_non_exhaustive()
    }
}
