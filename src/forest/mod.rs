//! Forests of freeform trees, ones which don't impose any restrictions on the number of roots or on the number of child nodes that a node can have.
//!
//! Nodes of a forest have no identity other than their position and payload. Every operation which needs a specific node takes a predicate and picks the first node whose payload satisfies it, in depth-first, left-to-right order: a node comes before its children, and all of its descendants come before its next sibling.
//!
//! # Example
//! ```rust
//! use coppice::Forest;
//!
//! // The turbofish is needed to state that we are using the default storage instead of asking
//! // the compiler to infer it, which would be impossible.
//! let mut forest = Forest::<_>::new();
//!
//! // Roots are appended after all existing roots:
//! forest.insert("Earth").unwrap();
//! forest.insert("Mars").unwrap();
//!
//! // Children are appended to the first node which matches the predicate:
//! forest.insert_child(|&name| name == "Earth", "Moon").unwrap();
//! forest.insert_child(|&name| name == "Mars", "Phobos").unwrap();
//! forest.insert_child(|&name| name == "Mars", "Deimos").unwrap();
//!
//! let mut names = Vec::new();
//! forest.for_all(|&name| names.push(name));
//! assert_eq!(names, ["Earth", "Moon", "Mars", "Phobos", "Deimos"]);
//!
//! // Erasing a node takes its entire subtree with it:
//! assert_eq!(forest.erase(|&name| name == "Mars"), Ok("Mars"));
//! assert!(!forest.contains(|&name| name == "Deimos"));
//! assert_eq!(forest.len(), 2);
//! ```

use core::fmt::Debug;
use crate::{
    storage::{Storage, ListStorage, DefaultStorage, SparseStorage, SparseStorageSlot},
    traversal::{
        algorithms::{
            recursive_removal_with,
            preorder_successor,
            FindFirst,
            ForEach,
            ForEachFiltered,
        },
        Traversable,
        TraversableMut,
    },
    InsertError,
    NotFound,
};

mod node;
mod impl_traversable;

use node::ChildList;
pub use node::Node;

#[cfg(test)]
mod tests;

/// A forest of freeform trees.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug)]
pub struct Forest<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    roots: ChildList<K>,
}
impl<T, K, S> Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty forest.
    ///
    /// # Example
    /// ```rust
    /// # use coppice::Forest;
    /// let forest = Forest::<u32>::new();
    /// assert!(forest.is_empty());
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            roots: ChildList::default(),
        }
    }
    /// Creates an empty forest with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            roots: ChildList::default(),
        }
    }
    /// Returns the total number of nodes in the forest, at any depth.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the forest has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.roots.first.is_none()
    }
    /// Returns the number of root nodes in the forest.
    #[inline(always)]
    pub fn num_roots(&self) -> usize {
        self.roots.len
    }

    /// Appends a new root node with the specified payload after all existing roots.
    ///
    /// # Errors
    /// Fails with `ConstructionFailure` if the storage cannot make room for the node, in which case the forest is left unchanged and the payload is dropped.
    #[inline]
    pub fn insert(&mut self, value: T) -> Result<(), InsertError> {
        self.insert_with(|| value)
    }
    /// Appends a new root node after all existing roots, with the payload returned by the closure.
    ///
    /// The closure is only called once the storage has made room for the node.
    ///
    /// # Errors
    /// Fails with `ConstructionFailure` if the storage cannot make room for the node, in which case the forest is left unchanged.
    pub fn insert_with(&mut self, f: impl FnOnce() -> T) -> Result<(), InsertError> {
        self.storage.try_reserve(1)?;
        self.attach(None, f());
        Ok(())
    }
    /// Appends a new node with the specified payload as the last child of the first node which satisfies the predicate.
    ///
    /// # Errors
    /// Fails with `NoMatch` if no node satisfies the predicate, or with `ConstructionFailure` if the storage cannot make room for the node. In both cases, the forest is left unchanged and the payload is dropped.
    ///
    /// # Example
    /// ```rust
    /// # use coppice::{Forest, InsertError};
    /// let mut forest = Forest::<_>::new();
    /// forest.insert(1).unwrap();
    /// assert_eq!(forest.insert_child(|&x| x == 1, 10), Ok(()));
    /// assert_eq!(forest.insert_child(|&x| x == 2, 20), Err(InsertError::NoMatch));
    /// ```
    #[inline]
    pub fn insert_child(
        &mut self,
        predicate: impl FnMut(&T) -> bool,
        value: T,
    ) -> Result<(), InsertError> {
        self.insert_child_with(predicate, || value)
    }
    /// Appends a new node as the last child of the first node which satisfies the predicate, with the payload returned by the closure.
    ///
    /// The closure is only called once the parent has been found and the storage has made room for the node.
    ///
    /// # Errors
    /// Fails with `NoMatch` if no node satisfies the predicate, or with `ConstructionFailure` if the storage cannot make room for the node. In both cases, the forest is left unchanged.
    pub fn insert_child_with(
        &mut self,
        predicate: impl FnMut(&T) -> bool,
        f: impl FnOnce() -> T,
    ) -> Result<(), InsertError> {
        let parent = self.find_key(predicate).ok_or(InsertError::NoMatch)?;
        self.storage.try_reserve(1)?;
        self.attach(Some(parent), f());
        Ok(())
    }

    /// Returns `true` if any node satisfies the predicate, `false` otherwise.
    ///
    /// The search stops at the first match.
    #[inline]
    pub fn contains(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.find_key(predicate).is_some()
    }
    /// Returns a reference to the payload of the first node which satisfies the predicate.
    ///
    /// # Errors
    /// Fails with `NotFound` if no node satisfies the predicate.
    ///
    /// # Example
    /// ```rust
    /// # use coppice::{Forest, NotFound};
    /// let mut forest = Forest::<_>::new();
    /// forest.insert((1, "one")).unwrap();
    /// forest.insert((2, "two")).unwrap();
    /// assert_eq!(forest.get(|&(id, _)| id == 2), Ok(&(2, "two")));
    /// assert_eq!(forest.get(|&(id, _)| id == 3), Err(NotFound));
    /// ```
    pub fn get(&self, predicate: impl FnMut(&T) -> bool) -> Result<&T, NotFound> {
        let key = self.find_key(predicate).ok_or(NotFound)?;
        Ok(&self.node(&key).value)
    }
    /// Returns a *mutable* reference to the payload of the first node which satisfies the predicate.
    ///
    /// # Errors
    /// Fails with `NotFound` if no node satisfies the predicate.
    pub fn get_mut(&mut self, predicate: impl FnMut(&T) -> bool) -> Result<&mut T, NotFound> {
        let key = self.find_key(predicate).ok_or(NotFound)?;
        Ok(&mut self.node_mut(&key).value)
    }

    /// Calls the closure on the payload of every node, in depth-first, left-to-right order.
    #[inline]
    pub fn for_all(&self, f: impl FnMut(&T)) {
        self.traverse(ForEach::<Self, _>::new(f));
    }
    /// Calls the closure on the payload of every node which satisfies the predicate, in depth-first, left-to-right order.
    ///
    /// Every node is tested, including the descendants of nodes which do not satisfy the predicate.
    ///
    /// # Example
    /// ```rust
    /// # use coppice::Forest;
    /// let mut forest = Forest::<_>::new();
    /// forest.insert(1).unwrap();
    /// forest.insert_child(|&x| x == 1, 2).unwrap();
    /// forest.insert_child(|&x| x == 2, 3).unwrap();
    /// forest.insert_child(|&x| x == 3, 4).unwrap();
    ///
    /// let mut even = Vec::new();
    /// forest.for_all_filtered(|&x| even.push(x), |&x| x % 2 == 0);
    /// assert_eq!(even, [2, 4]);
    /// ```
    #[inline]
    pub fn for_all_filtered(&self, f: impl FnMut(&T), predicate: impl FnMut(&T) -> bool) {
        self.traverse(ForEachFiltered::<Self, _, _>::new(f, predicate));
    }
    /// Calls the closure on a *mutable* reference to the payload of every node, in depth-first, left-to-right order.
    pub fn for_all_mut(&mut self, mut f: impl FnMut(&mut T)) {
        let mut cursor = self.cursor_to_first_root();
        while let Some(current) = cursor {
            f(self.value_mut_of(&current));
            cursor = preorder_successor(&*self, &current);
        }
    }

    /// Removes the first node which satisfies the predicate together with its entire subtree, returning the payload of that node.
    ///
    /// The payloads of the descendants are dropped. The siblings of the removed node stay where they were.
    ///
    /// # Errors
    /// Fails with `NotFound` if no node satisfies the predicate, in which case the forest is left unchanged.
    #[inline]
    pub fn erase(&mut self, predicate: impl FnMut(&T) -> bool) -> Result<T, NotFound> {
        self.erase_with(predicate, drop)
    }
    /// Removes the first node which satisfies the predicate together with its entire subtree, returning the payload of that node and feeding the payloads of the descendants into the collector.
    ///
    /// The collector receives the descendants in post-order: the children of a node before the node itself.
    ///
    /// # Panics
    /// If the collector panics, the whole subtree is still erased before the panic is propagated. The payloads which the collector did not get to are dropped.
    ///
    /// # Errors
    /// Fails with `NotFound` if no node satisfies the predicate, in which case the forest is left unchanged and the collector is never called.
    ///
    /// # Example
    /// ```rust
    /// # use coppice::Forest;
    /// let mut forest = Forest::<_>::new();
    /// forest.insert(1).unwrap();
    /// forest.insert_child(|&x| x == 1, 2).unwrap();
    /// forest.insert_child(|&x| x == 2, 3).unwrap();
    /// forest.insert_child(|&x| x == 1, 4).unwrap();
    ///
    /// let mut descendants = Vec::new();
    /// assert_eq!(forest.erase_with(|&x| x == 1, |x| descendants.push(x)), Ok(1));
    /// assert_eq!(descendants, [3, 2, 4]);
    /// assert!(forest.is_empty());
    /// ```
    pub fn erase_with(
        &mut self,
        predicate: impl FnMut(&T) -> bool,
        collector: impl FnMut(T),
    ) -> Result<T, NotFound> {
        let key = self.find_key(predicate).ok_or(NotFound)?;
        Ok(recursive_removal_with(self, key, collector))
    }
    /// Removes all nodes from the forest.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
        self.roots = ChildList::default();
    }

    fn find_key(&self, predicate: impl FnMut(&T) -> bool) -> Option<K> {
        self.traverse(FindFirst::<Self, _>::new(predicate)).flatten()
    }
    /// Appends a node to the child list of `parent`, or to the roots if it's `None`. Room must have been reserved beforehand.
    fn attach(&mut self, parent: Option<K>, value: T) -> K {
        let prev_sibling = self.child_list(parent.as_ref()).last.clone();
        let key = self
            .storage
            .add(Node::new(value, parent.clone(), prev_sibling.clone()));
        if let Some(prev) = &prev_sibling {
            self.node_mut(prev).next_sibling = Some(key.clone());
        }
        let list = self.child_list_mut(parent.as_ref());
        if list.first.is_none() {
            list.first = Some(key.clone());
        }
        list.last = Some(key.clone());
        list.len += 1;
        key
    }
    #[track_caller]
    fn node(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", key))
    }
    #[track_caller]
    fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", key))
    }
    fn child_list(&self, parent: Option<&K>) -> &ChildList<K> {
        match parent {
            Some(key) => &self.node(key).children,
            None => &self.roots,
        }
    }
    fn child_list_mut(&mut self, parent: Option<&K>) -> &mut ChildList<K> {
        match parent {
            Some(key) => &mut self.node_mut(key).children,
            None => &mut self.roots,
        }
    }
}
impl<T, K, S> Default for Forest<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, S> Forest<T, usize, SparseStorage<Node<T, usize>, S>>
where S: ListStorage<Element = SparseStorageSlot<Node<T, usize>>>,
{
    /// Removes all holes from the sparse storage, fixing the links between the nodes which were moved.
    ///
    /// The shape of the forest and the order of the nodes are not affected.
    ///
    /// # Example
    /// ```rust
    /// use coppice::forest::SparseVecForest;
    ///
    /// let mut forest = SparseVecForest::new();
    /// for i in 0..5 {
    ///     forest.insert(i).unwrap();
    /// }
    /// for i in 5..10 {
    ///     forest.insert_child(|&x| x == 0, i).unwrap();
    /// }
    /// forest.erase(|&x| x == 0).unwrap();
    ///
    /// // Erasing the first root and its children left 6 holes:
    /// assert_eq!(forest.num_holes(), 6);
    /// forest.defragment();
    /// assert!(forest.is_dense());
    ///
    /// let mut roots = Vec::new();
    /// forest.for_all(|&x| roots.push(x));
    /// assert_eq!(roots, [1, 2, 3, 4]);
    /// ```
    pub fn defragment(&mut self) {
        let roots = &mut self.roots;
        self.storage
            .defragment_with(|storage, _, to| Node::fix_move(storage, roots, to));
    }
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    ///
    /// # Example
    /// See the example in [`defragment`].
    ///
    /// [`defragment`]: #method.defragment " "
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.storage.num_holes()
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    ///
    /// # Example
    /// See the example in [`defragment`].
    ///
    /// [`defragment`]: #method.defragment " "
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.storage.is_dense()
    }
}

/// A forest which uses a *sparse* `Vec` as backing storage.
///
/// The default `Forest` type already uses this, but it's added here for explicitness.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub type SparseVecForest<T> = Forest<T, usize, crate::storage::SparseVec<Node<T, usize>>>;
