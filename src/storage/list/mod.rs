mod backends;

mod sparse;
pub use sparse::{
    SparseStorage,
    Slot as SparseStorageSlot,
};
#[cfg(feature = "alloc")]
pub use sparse::Vec as SparseVec;


use super::ReserveError;

/// Growable lists which a [`SparseStorage`] can be built on top of.
///
/// Implemented for `Vec` (with the `alloc` feature), `ArrayVec` and `SmallVec` (with the `smallvec` feature).
///
/// # Safety
/// `SparseStorage` stores indices into the list and relies on the following:
/// - `new` and `with_capacity` produce empty lists;
/// - `push` places the element at index `len()` and `pop` takes it from index `len() - 1`, leaving the rest untouched;
/// - `as_slice` and `as_mut_slice` view every element in order;
/// - after `try_reserve(n)` succeeds, the next `n` pushes do not panic.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub unsafe trait ListStorage: Sized {
    /// The element type.
    type Element;

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// # Panics
    /// Lists backed by a fixed-size buffer panic if `capacity` differs from the size of the buffer.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element.
    ///
    /// # Panics
    /// Fixed-size lists may panic when full.
    fn push(&mut self, element: Self::Element);
    /// Takes the last element off the list.
    fn pop(&mut self) -> Option<Self::Element>;
    /// Views the elements as a slice.
    fn as_slice(&self) -> &[Self::Element];
    /// Views the elements as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Element];

    /// The number of elements in the list.
    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    /// Checks whether the list is empty.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Bounds-checked element access.
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        self.as_slice().get(index)
    }
    /// Bounds-checked mutable element access.
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        self.as_mut_slice().get_mut(index)
    }
    /// Creates an empty list without allocating. Defaults to `with_capacity(0)`, which fixed-size lists have to override.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// The number of elements the list can hold before it has to grow. Defaults to `len`, i.e. a list which is always full.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Ensures that `additional` more elements can be pushed without panicking.
    ///
    /// The default implementation never allocates and only checks against `capacity`.
    ///
    /// # Errors
    /// Fails if a fixed capacity would be exceeded or if the allocator refused to provide the memory.
    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        match self.len().checked_add(additional) {
            Some(required) if required <= self.capacity() => Ok(()),
            _ => Err(ReserveError::CapacityExceeded),
        }
    }
    /// Releases unused memory, if the list has any. Does nothing by default.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
    /// Drops every element, keeping the allocated capacity. Pops one element at a time by default.
    #[inline]
    fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}
