//! Ubiquitous algorithms for forests.
//!
//! This includes:
//! - Depth-first (pre-order) search and traversal, as the [`FindFirst`], [`ForEach`] and [`ForEachFiltered`] visitors
//! - Recursive removal, implemented without actual recursion
//!
//! [`FindFirst`]: struct.FindFirst.html " "
//! [`ForEach`]: struct.ForEach.html " "
//! [`ForEachFiltered`]: struct.ForEachFiltered.html " "

mod depth_first;
pub use depth_first::*;
mod recursive_removal;
pub use recursive_removal::*;

#[cfg(test)]
mod tests;
