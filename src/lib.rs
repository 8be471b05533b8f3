pub mod error;
pub mod fs;
pub mod search;
pub mod sets;
pub mod statistics;

pub use error::{GraphError, GraphResult};
