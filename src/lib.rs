//! Implements an arena-allocated forest of freeform trees and interfaces to work with it.
//!
//! ------------------------
//!
//! # Overview
//! Coppice implements a *forest*: an ordered sequence of root nodes, each of which owns an ordered sequence of child nodes, with no restrictions on the number of children a node can have. Every node stores exactly one payload value, and nodes are selected by testing their payloads with predicates rather than by keys:
//! - [`insert`] appends a new root node, [`insert_child`] appends a new child to the first node matching a predicate
//! - [`contains`] and [`get`] search for the first node matching a predicate
//! - [`for_all`] calls a closure on every node, [`for_all_filtered`] only on the ones matching a predicate
//! - [`erase`] removes the first node matching a predicate together with its entire subtree
//!
//! "First" always refers to depth-first, left-to-right order: a node comes before its children, and all of its descendants come before its next sibling.
//!
//! The forest uses a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the nodes are stored in some sort of backing storage, typically a [`Vec`] (or its variants, like [`SmallVec`] or [`ArrayVec`]), and instead of using pointers to link to children, indices into the storage are used instead. This makes dropping a deep forest non-recursive and gives room for supporting configurations without a global memory allocator.
//!
//! # Example
//! ```rust
//! use coppice::Forest;
//!
//! let mut forest = Forest::<_>::new();
//! for id in [-1, 1, 2, 3, 4, 5].iter().copied() {
//!     forest.insert(id).unwrap();
//! }
//! forest.insert_child(|&id| id == 5, 56).unwrap();
//!
//! let mut even = Vec::new();
//! forest.for_all_filtered(|&id| even.push(id), |&id| id % 2 == 0);
//! assert_eq!(even, [2, 4, 56]);
//!
//! forest.erase(|&id| id == 5).unwrap();
//! assert!(!forest.contains(|&id| id == 56));
//! assert!(forest.contains(|&id| id == 3));
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type used is `Storage`. The crate implements it for `SparseStorage`, which wraps a list-like collection implementing `ListStorage` and turns removals into holes which get reused by later insertions, so that the indices stored in the nodes never need to be shifted around.
//!
//! Several types from both the standard library and external crates already implement `ListStorage` out of the box:
//! - [`Vec`] - requires the `alloc` feature
//! - [`ArrayVec`] - always available, gives the forest a fixed capacity which is reported as an error when exceeded
//! - [`SmallVec`] - requires the `smallvec` feature
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types.
//! - `alloc` (**enabled by default**) - adds `ListStorage` trait implementations for [`Vec`] and makes a sparse `Vec` the default storage. *This does not require standard library support.*
//! - `unwind_safety` (**enabled by default**) - aborts the process instead of unwinding when an internal consistency check fails in a debug build. Requires `std`.
//! - `smallvec` - adds a `ListStorage` trait implementation for [`SmallVec`].
//!
//! # Public dependencies
//! - `arrayvec` (**required**) - `^0.5`
//! - `smallvec` (*optional*) - `^1.6`
//!
//! [`insert`]: forest/struct.Forest.html#method.insert " "
//! [`insert_child`]: forest/struct.Forest.html#method.insert_child " "
//! [`contains`]: forest/struct.Forest.html#method.contains " "
//! [`get`]: forest/struct.Forest.html#method.get " "
//! [`for_all`]: forest/struct.Forest.html#method.for_all " "
//! [`for_all_filtered`]: forest/struct.Forest.html#method.for_all_filtered " "
//! [`erase`]: forest/struct.Forest.html#method.erase " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    unused_qualifications,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::unused_self,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // .expect() states the broken invariant
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod forest;
pub use forest::Forest;

pub mod traversal;
pub use traversal::{Visitor, Traversable, TraversableMut};

/// A prelude for using Coppice, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as ForestStorage,
        SparseStorage as SparseForestStorage,
        DefaultStorage as DefaultForestStorage,
    };
    #[doc(no_inline)]
    pub use crate::forest::{
        Forest,
        Node as ForestNode,
    };
    #[doc(no_inline)]
    pub use crate::{
        InsertError as ForestInsertError,
        NotFound as ForestNotFound,
    };
}

pub(crate) mod util;

use core::fmt::{self, Formatter};
use storage::ReserveError;

/// The error type returned by methods on forests which insert nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertError {
    /// No node satisfied the predicate which was supposed to select the parent of the new node.
    NoMatch,
    /// The node could not be constructed because the storage could not make room for it. The forest is left unchanged.
    ConstructionFailure(ReserveError),
}
impl From<ReserveError> for InsertError {
    #[inline]
    fn from(op: ReserveError) -> Self {
        Self::ConstructionFailure(op)
    }
}
impl fmt::Display for InsertError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NoMatch => "no node matched the predicate for the parent",
            Self::ConstructionFailure(..) => "failed to construct the node",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InsertError {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoMatch => None,
            Self::ConstructionFailure(e) => Some(e),
        }
    }
}

/// The error type returned by methods on forests which need a node matching a predicate, when there is no such node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NotFound;
impl fmt::Display for NotFound {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("no node matched the predicate")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for NotFound {}

/// The error type returned by [`TraversableMut::try_remove_leaf`] when the node was a branch node, i.e. had children, and thus would require recursion to remove.
///
/// [`TraversableMut::try_remove_leaf`]: traversal/trait.TraversableMut.html#tymethod.try_remove_leaf " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TryRemoveLeafError;
impl fmt::Display for TryRemoveLeafError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("cannot remove branch nodes without recursion")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for TryRemoveLeafError {}
