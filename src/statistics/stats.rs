#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    traversals: usize,
    nodes_visited: usize,
    edges_examined: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            traversals: 0,
            nodes_visited: 0,
            edges_examined: 0,
        }
    }

    /// Record that a new depth-first walk was started
    pub fn bump_traversals(&mut self) {
        self.traversals += 1
    }

    /// Record that one more node was reached for the first time
    pub fn bump_nodes(&mut self) {
        self.nodes_visited += 1
    }

    /// Record that the outgoing edges of a node were looked at
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_examined += edge_amount
    }

    pub fn get_traversals(&self) -> usize {
        self.traversals
    }

    pub fn get_nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn get_edges_examined(&self) -> usize {
        self.edges_examined
    }

    /// Adds the counters of `other` to this object
    pub fn merge(&mut self, other: &Stats) {
        self.traversals += other.traversals;
        self.nodes_visited += other.nodes_visited;
        self.edges_examined += other.edges_examined;
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
