pub mod graph_algo;

mod adjacency_map;
mod airport;
mod node;
mod vertex_graph;

pub use adjacency_map::*;
pub use airport::*;
pub use node::*;
pub use vertex_graph::*;
