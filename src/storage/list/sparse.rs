use core::{mem, num::NonZeroUsize};
use crate::{
    storage::{Storage, ReserveError},
    util::unreachable_debugchecked,
};
use super::ListStorage;

const U_ONE: NonZeroUsize = unsafe {
    // SAFETY: one is not zero
    NonZeroUsize::new_unchecked(1)
};

/// Sparse storage on top of a `Vec`, the default arena for forests.
#[cfg(feature = "alloc")]
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;

/// A wrapper around a list-like storage type which turns it into a [`Storage`] with stable keys.
///
/// Sparse storage with element type `E` wraps a list storage which stores `Slot<E>`, which is either an element or a "hole". Removing an element does not shift the elements after it, but replaces it with a hole instead, so that keys held by other elements stay valid. Holes are linked into a first-in-first-out free list and get reused by later additions before the underlying storage is grown.
///
/// Holes can be removed all at once with [`defragment_with`], which moves elements around and reports every move so that the keys stored inside the elements can be fixed.
///
/// [`Storage`]: ../trait.Storage.html " "
/// [`defragment_with`]: #method.defragment_with " "
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    /// Length, first element, last element
    hole_list: Option<(NonZeroUsize, usize, usize)>,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Removes all holes from the sparse storage by moving elements from the end of the storage into them.
    ///
    /// After every move, the closure is called with the storage, the index the element was moved from and the index it was moved to. Elements which store keys to other elements have to use it to fix those keys. **This is an expensive operation and should only be called if `is_dense` is `false` to avoid needless overhead.**
    pub fn defragment_with<F>(&mut self, mut f: F)
    where F: FnMut(&mut Self, usize, usize) {
        if self.hole_list.is_none() {
            return;
        }
        // The hole list is not consulted from here on, and will be empty once we're done
        self.hole_list = None;
        self.pop_trailing_holes();
        let mut index = 0;
        while index < self.storage.len() {
            if self.slot(index).is_hole() {
                // Trailing holes were popped, so the last slot is an element and lies after this one
                let last_index = self.storage.len() - 1;
                let moved = self.storage.pop().unwrap_or_else(|| unsafe {
                    // SAFETY: we are in bounds, so the storage cannot be empty
                    unreachable_debugchecked("popping from a non-empty storage failed")
                });
                *self.slot_mut(index) = moved;
                f(self, last_index, index);
                self.pop_trailing_holes();
            }
            index += 1;
        }
    }
    /// The number of holes waiting to be reused. Tracked by the hole list, so this does not scan the storage.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_list.map_or(0, |x| x.0.get())
    }
    /// Checks whether every slot holds an element.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes() == 0
    }

    fn pop_trailing_holes(&mut self) {
        while let Some(last_index) = self.storage.len().checked_sub(1) {
            if self.slot(last_index).is_element() {
                break;
            }
            self.storage.pop();
        }
    }
    fn slot(&self, index: usize) -> &Slot<E> {
        self.storage.get(index).unwrap_or_else(|| unsafe {
            // SAFETY: only called with indices which were bounds-checked or come from the hole list
            unreachable_debugchecked("sparse storage slot index out of bounds")
        })
    }
    fn slot_mut(&mut self, index: usize) -> &mut Slot<E> {
        self.storage.get_mut(index).unwrap_or_else(|| unsafe {
            // SAFETY: as above
            unreachable_debugchecked("sparse storage slot index out of bounds")
        })
    }
    /// Replaces the element at the specified index with a hole and appends it to the end of the hole list, returning the value or `None` if it was already a hole.
    fn punch_hole(&mut self, index: usize) -> Option<E> {
        let element = self.slot_mut(index).punch_hole()?;
        if let Some((count, first, last)) = self.hole_list {
            // Make the previous end point to the hole we just punched
            self.slot_mut(last).set_hole_link(Some(index));
            let count = NonZeroUsize::new(count.get() + 1).unwrap_or_else(|| unsafe {
                // SAFETY: it's impossible to have more than usize::MAX elements in a storage
                unreachable_debugchecked("hole count overflowed")
            });
            self.hole_list = Some((count, first, index));
        } else {
            self.hole_list = Some((
                U_ONE, // Only one hole
                index, // List starts from the hole we just punched...
                index, // ...and ends with it
            ));
        }
        Some(element)
    }
}
static HOLE_PANIC_MSG: &str = "\
the element at the specified index was a hole in the sparse storage";
unsafe impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Key = usize;
    type Element = E;

    #[inline]
    fn add(&mut self, element: Self::Element) -> usize {
        if let Some((count, first, last)) = self.hole_list {
            let hole = self.slot_mut(first);
            let next_hole = hole.hole_link();
            *hole = Slot::new_element(element);
            self.hole_list = NonZeroUsize::new(count.get() - 1).map(|count| {
                let next_hole = next_hole.unwrap_or_else(|| unsafe {
                    // SAFETY: according to hole count, the hole list cannot end here
                    unreachable_debugchecked("hole list ended before the hole count ran out")
                });
                (count, next_hole, last)
            });
            first
        } else {
            self.storage.push(Slot::new_element(element));
            self.storage.len() - 1
        }
    }
    #[inline]
    fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        let num_holes = self.num_holes();
        if additional <= num_holes {
            Ok(())
        } else {
            self.storage.try_reserve(additional - num_holes)
        }
    }
    #[inline]
    #[track_caller]
    fn remove(&mut self, index: &usize) -> Self::Element {
        assert!(self.storage.len() > *index, "index out of bounds");
        self.punch_hole(*index).unwrap_or_else(|| panic!("{}", HOLE_PANIC_MSG))
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.num_holes()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {storage: S::with_capacity(capacity), hole_list: None}
    }
    #[inline]
    unsafe fn get_unchecked(&self, index: &usize) -> &Self::Element {
        match self.storage.as_slice().get_unchecked(*index).element() {
            Some(element) => element,
            None => unreachable_debugchecked(HOLE_PANIC_MSG),
        }
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: &usize) -> &mut Self::Element {
        match self.storage.as_mut_slice().get_unchecked_mut(*index).element_mut() {
            Some(element) => element,
            None => unreachable_debugchecked(HOLE_PANIC_MSG),
        }
    }
    #[inline]
    fn contains_key(&self, index: &usize) -> bool {
        self.storage.get(*index).map_or(false, Slot::is_element)
    }
    #[inline]
    fn clear(&mut self) {
        self.storage.clear();
        self.hole_list = None;
    }

    #[inline(always)]
    fn new() -> Self {
        Self {storage: S::new(), hole_list: None}
    }
    /// Returns the capacity of the underlying storage. Holes are not counted as occupied, since they get reused before the storage grows.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

/// A slot inside a sparse storage.
///
/// Opaque to users of the crate: it only needs to be nameable so that the element type of the list backing a `SparseStorage` can be spelled out.
///
/// Under the hood, it is either an element or a hole which stores the index of the next hole in the hole list.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T> (SlotInner<T>);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum SlotInner<T> {
    Element(T),
    /// Links to the next hole in the hole list, if any.
    Hole(Option<usize>),
}

impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(val: T) -> Self {
        Self (SlotInner::Element(val))
    }
    #[inline(always)]
    const fn is_element(&self) -> bool {
        matches!(self.0, SlotInner::Element(..))
    }
    #[inline(always)]
    const fn is_hole(&self) -> bool {
        matches!(self.0, SlotInner::Hole(..))
    }
    #[inline]
    fn element(&self) -> Option<&T> {
        match &self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    #[inline]
    fn element_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element(x) => Some(x),
            SlotInner::Hole(..) => None,
        }
    }
    /// Returns the index of the next hole, or `None` if this is the last hole or not a hole at all.
    #[inline]
    fn hole_link(&self) -> Option<usize> {
        match self.0 {
            SlotInner::Hole(x) => x,
            SlotInner::Element(..) => None,
        }
    }
    #[inline]
    fn set_hole_link(&mut self, val: Option<usize>) {
        match &mut self.0 {
            SlotInner::Hole(x) => *x = val,
            SlotInner::Element(..) => unsafe {
                // SAFETY: the hole list only ever points to holes
                unreachable_debugchecked("hole list pointed to an element")
            },
        }
    }
    /// Turns the slot into a hole which is the end of the hole list, returning the element or `None` if it was a hole already.
    #[inline]
    fn punch_hole(&mut self) -> Option<T> {
        if self.is_hole() {
            return None;
        }
        match mem::replace(&mut self.0, SlotInner::Hole(None)) {
            SlotInner::Element(val) => Some(val),
            SlotInner::Hole(..) => None,
        }
    }
}
