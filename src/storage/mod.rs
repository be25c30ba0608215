//! Utilities for treating the backing storage for forests generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the main trait for the arena storages backing forests
//! - [`ListStorage`], a trait used for defining arenas in terms of list-like collections
//! - [`SparseStorage`], a wrapper around `ListStorage`s which turns removals into holes instead of shifting elements around, and the only `Storage` implementation provided by the crate
//! - [`ReserveError`], the error produced when a storage cannot make room for more elements
//! - [`DefaultStorage`], a type definition for the default backing storage used by forests unless a different one is specified; takes different values depending on feature flags
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`ReserveError`]: enum.ReserveError.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

use core::fmt::{self, Formatter, Debug, Display};

/// Arenas which hold the nodes of a forest and hand out keys to them.
///
/// # Safety
/// Forests link their nodes together by keys and trust the arena to uphold the following:
/// - a freshly created arena, whether by `new` or `with_capacity`, holds no elements;
/// - `get_unchecked` and `get_unchecked_mut` are sound for every key for which `contains_key` returns `true`;
/// - adding or removing elements never invalidates or redirects the keys of other elements;
/// - after `try_reserve(n)` succeeds, the next `n` additions neither panic nor fail to allocate;
/// - an element is handed back unchanged until it is removed or mutated through a `&mut` accessor.
pub unsafe trait Storage: Sized {
    /// The key handed out for every added element.
    type Key: Clone + Debug + Eq;
    /// The element type.
    type Element;

    /// Stores the element and returns the key it can be found at.
    ///
    /// # Panics
    /// May panic if the arena is full and cannot grow. Call `try_reserve` first to get an error instead.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Ensures that `additional` more elements can be added without running out of room.
    ///
    /// # Errors
    /// Fails if a fixed capacity would be exceeded or if the allocator refused to provide the memory.
    fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError>;
    /// Takes the element at the key out of the arena. The key becomes invalid and may later be handed out again.
    ///
    /// # Panics
    /// Must panic if there is no element at the key.
    fn remove(&mut self, key: &Self::Key) -> Self::Element;
    /// The number of elements currently stored.
    fn len(&self) -> usize;
    /// Creates an arena with room for `capacity` elements.
    ///
    /// # Panics
    /// Arenas backed by a fixed-size buffer panic if `capacity` differs from the size of the buffer.
    fn with_capacity(capacity: usize) -> Self;
    /// Looks up an element without validating the key.
    ///
    /// # Safety
    /// `contains_key` must return `true` for the key.
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element;
    /// Mutable version of [`get_unchecked`].
    ///
    /// # Safety
    /// `contains_key` must return `true` for the key.
    ///
    /// [`get_unchecked`]: #tymethod.get_unchecked " "
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element;
    /// Checks whether an element is stored at the key.
    fn contains_key(&self, key: &Self::Key) -> bool;
    /// Drops every element, invalidating all keys.
    fn clear(&mut self);

    /// Looks up an element, returning `None` for keys which are not in use.
    #[inline]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        if !self.contains_key(key) {
            return None;
        }
        // SAFETY: presence was checked above
        Some(unsafe { self.get_unchecked(key) })
    }
    /// Mutable version of [`get`].
    ///
    /// [`get`]: #method.get " "
    #[inline]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        if !self.contains_key(key) {
            return None;
        }
        // SAFETY: as above
        Some(unsafe { self.get_unchecked_mut(key) })
    }
    /// Creates an empty arena without allocating. Defaults to `with_capacity(0)`, which fixed-size arenas have to override.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Checks whether the arena holds no elements.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// The number of elements the arena can hold before it has to grow. Defaults to `len`.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Releases unused memory, if the arena has any. Does nothing by default.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The error type returned by [`Storage::try_reserve`] and [`ListStorage::try_reserve`] when the storage cannot make room for the requested amount of elements.
///
/// [`Storage::try_reserve`]: trait.Storage.html#tymethod.try_reserve " "
/// [`ListStorage::try_reserve`]: trait.ListStorage.html#method.try_reserve " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReserveError {
    /// The storage has a fixed capacity, and it would have been exceeded.
    CapacityExceeded,
    /// The memory allocator failed to provide the requested memory, or the requested capacity overflowed `usize`.
    AllocationFailed,
}
impl Display for ReserveError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::CapacityExceeded => "the fixed capacity of the storage would be exceeded",
            Self::AllocationFailed => "failed to allocate memory for the storage",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for ReserveError {}

/// The storage a `Forest` uses when none is specified.
///
/// With the `alloc` feature, this is [`SparseVec`].
/// Otherwise, a [*sparse*][`SparseStorage`] [`ArrayVec`] *with zero-sized backing storage* is used, which is only useful as a placeholder since it can never hold any elements
///
/// [`SparseVec`]: type.SparseVec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = SparseVec<T>;

#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = SparseStorage<T, arrayvec::ArrayVec<[SparseStorageSlot<T>; 0]>>;
