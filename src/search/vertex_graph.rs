use std::{
    fmt::{Debug, Display},
    io::{self, Write},
};

use crate::{
    search::{
        graph_algo::{self, Traversable},
        node::{Vertex, VertexId},
    },
    sets::visited::UncompressedSet,
    statistics::Stats,
};

/// Length of a string value, counted in characters.
fn value_len(value: &str) -> usize {
    value.chars().count()
}

/// In-memory graph of vertices linked by ordered neighbor lists.
///
/// # Invariants
/// - `vertices[i]` is the vertex with id `i`.
/// - Every neighbor id is a valid index into `vertices`.
///
/// Cycles, duplicate edges and self-references are all allowed. Queries
/// never modify the graph.
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> VertexGraph<T> {
    pub fn new() -> Self {
        VertexGraph {
            vertices: Vec::new(),
        }
    }

    /// Adds a vertex with no neighbors and returns its handle.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId {
            internal: self.vertices.len(),
        };
        self.vertices.push(Vertex {
            value,
            neighbors: Vec::new(),
        });
        id
    }

    /// Appends `to` to the neighbor list of `from`.
    ///
    /// # Panics
    /// If either id does not belong to this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        assert!(to.internal < self.vertices.len(), "unknown vertex {to:?}");
        self.vertices[from.internal].neighbors.push(to);
    }

    /// Appends every id of `to`, in order, to the neighbor list of `from`.
    pub fn add_edges(&mut self, from: VertexId, to: impl IntoIterator<Item = VertexId>) {
        for target in to {
            self.add_edge(from, target);
        }
    }

    /// # Panics
    /// If `id` does not belong to this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex<T> {
        &self.vertices[id.internal]
    }

    /// # Panics
    /// If `id` does not belong to this graph.
    pub fn value(&self, id: VertexId) -> &T {
        &self.vertices[id.internal].value
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(|internal| VertexId { internal })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices reachable from `start` that list themselves as a neighbor.
    ///
    /// See [`graph_algo::self_loops`].
    ///
    /// # Panics
    /// If `start` does not belong to this graph.
    pub fn self_loops(&self, start: Option<VertexId>) -> Vec<VertexId> {
        graph_algo::self_loops(self, start)
    }

    pub fn self_loops_with_stats(
        &self,
        start: Option<VertexId>,
        stats: &mut Stats,
    ) -> Vec<VertexId> {
        graph_algo::self_loops_with_stats(self, start, stats)
    }

    /// Whether `destination` can be reached from `start`.
    ///
    /// See [`graph_algo::can_reach`].
    ///
    /// # Panics
    /// If `start` does not belong to this graph.
    pub fn can_reach(&self, start: Option<VertexId>, destination: Option<VertexId>) -> bool {
        graph_algo::can_reach(self, start.as_ref(), destination.as_ref())
    }

    pub fn can_reach_with_stats(
        &self,
        start: Option<VertexId>,
        destination: Option<VertexId>,
        stats: &mut Stats,
    ) -> bool {
        graph_algo::can_reach_with_stats(self, start.as_ref(), destination.as_ref(), stats)
    }
}

impl<T: Display> VertexGraph<T> {
    /// Writes the value of every self-looping vertex reachable from `start`, one per line.
    ///
    /// # Panics
    /// If `start` does not belong to this graph.
    pub fn write_self_loops<W: Write>(
        &self,
        start: Option<VertexId>,
        sink: &mut W,
        stats: &mut Stats,
    ) -> io::Result<()> {
        for id in self.self_loops_with_stats(start, stats) {
            writeln!(sink, "{}", self.value(id))?;
        }
        Ok(())
    }
}

impl<T: AsRef<str>> VertexGraph<T> {
    /// Values reachable from `start` that are strictly shorter than `max_len`
    /// characters, in depth-first pre-order.
    ///
    /// Each vertex contributes at most once, but distinct vertices with equal
    /// values all show up.
    ///
    /// # Panics
    /// If `start` does not belong to this graph.
    pub fn short_values(&self, start: Option<VertexId>, max_len: usize) -> Vec<&str> {
        self.short_values_with_stats(start, max_len, &mut Stats::new())
    }

    pub fn short_values_with_stats(
        &self,
        start: Option<VertexId>,
        max_len: usize,
        stats: &mut Stats,
    ) -> Vec<&str> {
        let mut walk = self.depth_first(start);
        let values = walk
            .by_ref()
            .map(|id| self.value(id).as_ref())
            .filter(|value| value_len(value) < max_len)
            .collect();
        stats.merge(walk.stats());
        values
    }

    /// Writes [`short_values`](Self::short_values) to `sink`, one per line.
    ///
    /// # Panics
    /// If `start` does not belong to this graph.
    pub fn write_short_values<W: Write>(
        &self,
        start: Option<VertexId>,
        max_len: usize,
        sink: &mut W,
        stats: &mut Stats,
    ) -> io::Result<()> {
        for value in self.short_values_with_stats(start, max_len, stats) {
            writeln!(sink, "{value}")?;
        }
        Ok(())
    }

    /// The longest value reachable from `start`, the start's own value included.
    ///
    /// On ties the value met first in pre-order wins. An absent start gives
    /// the empty string.
    ///
    /// # Panics
    /// If `start` does not belong to this graph.
    pub fn longest_value(&self, start: Option<VertexId>) -> &str {
        self.longest_value_with_stats(start, &mut Stats::new())
    }

    pub fn longest_value_with_stats(&self, start: Option<VertexId>, stats: &mut Stats) -> &str {
        let mut longest = "";
        let mut longest_len = 0;
        let mut walk = self.depth_first(start);
        for id in walk.by_ref() {
            let value = self.value(id).as_ref();
            let len = value_len(value);
            if len > longest_len {
                longest = value;
                longest_len = len;
            }
        }
        stats.merge(walk.stats());
        longest
    }
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for VertexGraph<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexGraph")
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<T> Traversable for VertexGraph<T> {
    type Key = VertexId;
    type Visited = UncompressedSet;

    fn visitor_set(&self) -> UncompressedSet {
        UncompressedSet::new(self.vertices.len())
    }

    fn neighbors(&self, key: &VertexId) -> &[VertexId] {
        &self.vertices[key.internal].neighbors
    }
}
