//! Bookkeeping structures used while walking a graph.
//!
//! # Submodules
//!
//! - [`visited`]: sets recording which nodes a traversal has already reached

pub mod visited;
