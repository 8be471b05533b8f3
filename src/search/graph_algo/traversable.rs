use crate::sets::visited::VisitorSet;

use super::DepthFirst;

/// A directed graph that can be walked depth-first.
///
/// Implemented by the vertex arena, the airport network and the adjacency
/// map, so that every query runs on the same walker regardless of how the
/// edges are stored.
pub trait Traversable {
    /// Node handle. Equality between keys is node identity.
    type Key: Clone + Eq;

    /// Visited-set representation best suited to the key type.
    ///
    /// Arena graphs use a bitset sized to the graph, keyed graphs a hash set.
    type Visited: VisitorSet<Self::Key>;

    /// Creates an empty visited set for a single traversal.
    fn visitor_set(&self) -> Self::Visited;

    /// Ordered outgoing edges of `key`.
    ///
    /// Keys with no outgoing edges, including keys the graph has no entry
    /// for, yield an empty slice.
    fn neighbors(&self, key: &Self::Key) -> &[Self::Key];

    /// Starts a pre-order depth-first walk from `start`.
    ///
    /// An absent start yields an empty walk.
    fn depth_first(&self, start: Option<Self::Key>) -> DepthFirst<'_, Self>
    where
        Self: Sized,
    {
        DepthFirst::new(self, start)
    }
}
