//! Loading graphs from JSON description files.
//!
//! A file describes exactly one graph, tagged by `kind`: a vertex graph, an
//! airport network, or an adjacency map. Descriptions are resolved into the
//! in-memory representations of [`crate::search`], with every reference
//! checked on the way.

mod graph_load;

pub use graph_load::*;
