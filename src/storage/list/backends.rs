use arrayvec::ArrayVec;
use super::{ListStorage, ReserveError};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
unsafe impl<T> ListStorage for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }
    #[inline(always)]
    fn push(&mut self, element: T) {
        Vec::push(self, element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }
    #[inline(always)]
    fn new() -> Self {
        Vec::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        Vec::try_reserve(self, additional).map_err(|_| ReserveError::AllocationFailed)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        Vec::shrink_to_fit(self)
    }
    #[inline(always)]
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

unsafe impl<A> ListStorage for ArrayVec<A>
where A: arrayvec::Array,
{
    type Element = A::Item;

    #[inline]
    #[track_caller]
    fn with_capacity(capacity: usize) -> Self {
        assert_eq!(
            capacity,
            A::CAPACITY,
            "the capacity of an ArrayVec is fixed by its backing array",
        );
        ArrayVec::new()
    }
    #[inline(always)]
    fn push(&mut self, element: A::Item) {
        ArrayVec::push(self, element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<A::Item> {
        ArrayVec::pop(self)
    }
    #[inline(always)]
    fn as_slice(&self) -> &[A::Item] {
        ArrayVec::as_slice(self)
    }
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        ArrayVec::as_mut_slice(self)
    }
    #[inline(always)]
    fn new() -> Self {
        ArrayVec::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
    #[inline(always)]
    fn clear(&mut self) {
        ArrayVec::clear(self)
    }
}

#[cfg(feature = "smallvec")]
use smallvec::SmallVec;
#[cfg(feature = "smallvec")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "smallvec")))]
unsafe impl<A> ListStorage for SmallVec<A>
where A: smallvec::Array,
{
    type Element = A::Item;

    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }
    #[inline(always)]
    fn push(&mut self, element: A::Item) {
        SmallVec::push(self, element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<A::Item> {
        SmallVec::pop(self)
    }
    #[inline(always)]
    fn as_slice(&self) -> &[A::Item] {
        SmallVec::as_slice(self)
    }
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        SmallVec::as_mut_slice(self)
    }
    #[inline(always)]
    fn new() -> Self {
        SmallVec::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        SmallVec::capacity(self)
    }
    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        // Inline storage never fails, spilling to the heap can
        SmallVec::try_reserve(self, additional).map_err(|_| ReserveError::AllocationFailed)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        SmallVec::shrink_to_fit(self)
    }
    #[inline(always)]
    fn clear(&mut self) {
        SmallVec::clear(self)
    }
}
