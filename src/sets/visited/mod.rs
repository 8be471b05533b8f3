mod hashset;
mod uncompressed_set;
mod visitor_set;

pub use uncompressed_set::*;
pub use visitor_set::*;
