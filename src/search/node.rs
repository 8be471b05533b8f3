use std::fmt::Debug;

/// Handle to a vertex inside a [`VertexGraph`](crate::search::VertexGraph).
///
/// Handles compare by identity: two vertices carrying equal values still have
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) internal: usize,
}

impl VertexId {
    pub fn index(self) -> usize {
        self.internal
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> usize {
        id.internal
    }
}

/// A value together with the ordered list of vertices it points to.
///
/// The neighbor list may repeat entries and may contain the vertex itself.
pub struct Vertex<T> {
    pub(crate) value: T,
    pub(crate) neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

impl<T: Debug> Debug for Vertex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vertex")
            .field("value", &self.value)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
