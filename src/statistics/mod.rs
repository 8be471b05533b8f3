//! Counters describing the work done by a traversal.
//!
//! Every depth-first walk keeps its own [`Stats`]. Queries merge the
//! counters of their walks into a caller-provided object, so that several
//! queries can be totalled and reported together.

mod stats;
pub use stats::*;
