//! Depth-first traversal shared by every graph representation.
//!
//! This module provides the [`Traversable`] abstraction, the pre-order
//! [`DepthFirst`] walker built on it, and the queries that only need edges
//! (reachability and self-loop detection).

mod depth_first;
mod reachability;
mod traversable;

pub use depth_first::*;
pub use reachability::*;
pub use traversable::*;
