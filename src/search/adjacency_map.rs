use std::hash::Hash;

use hashbrown::{HashMap, HashSet};

use crate::{search::graph_algo::Traversable, statistics::Stats};

/// A directed graph stored as a map from each key to its neighbor keys.
///
/// Keys may show up as neighbors without having an entry of their own. Such
/// dangling keys have no outgoing edges and are not considered part of the
/// graph's key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap<K: Eq + Hash> {
    edges: HashMap<K, Vec<K>>,
}

impl<K: Clone + Eq + Hash> AdjacencyMap<K> {
    pub fn new() -> Self {
        AdjacencyMap {
            edges: HashMap::new(),
        }
    }

    /// Sets the outgoing edges of `key`, replacing any previous entry.
    ///
    /// Any collection works; an ordered one keeps its order for traversal.
    pub fn insert(&mut self, key: K, neighbors: impl IntoIterator<Item = K>) {
        self.edges.insert(key, neighbors.into_iter().collect());
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.edges.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.edges.keys()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Keys of this map reachable from `start` through zero or more edges.
    pub fn reachable(&self, start: Option<&K>) -> HashSet<K> {
        self.partition(start, true, &mut Stats::new())
    }

    /// Keys of this map that cannot be reached from `start`.
    ///
    /// When `start` is absent or has no entry in the map, nothing is reached
    /// and every key is unreachable.
    pub fn unreachable(&self, start: Option<&K>) -> HashSet<K> {
        self.partition(start, false, &mut Stats::new())
    }

    /// [`unreachable`](Self::unreachable), merging the walk's counters into `stats`.
    pub fn unreachable_with_stats(&self, start: Option<&K>, stats: &mut Stats) -> HashSet<K> {
        self.partition(start, false, stats)
    }

    fn partition(&self, start: Option<&K>, reached: bool, stats: &mut Stats) -> HashSet<K> {
        let start = start.filter(|key| self.contains_key(key)).cloned();

        let mut walk = self.depth_first(start);
        walk.by_ref().for_each(drop);
        stats.merge(walk.stats());

        self.edges
            .keys()
            .filter(|key| walk.is_visited(key) == reached)
            .cloned()
            .collect()
    }
}

impl<K: Clone + Eq + Hash> Default for AdjacencyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I> FromIterator<(K, I)> for AdjacencyMap<K>
where
    K: Clone + Eq + Hash,
    I: IntoIterator<Item = K>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut map = AdjacencyMap::new();
        for (key, neighbors) in iter {
            map.insert(key, neighbors);
        }
        map
    }
}

impl<K: Clone + Eq + Hash> Traversable for AdjacencyMap<K> {
    type Key = K;
    type Visited = HashSet<K>;

    fn visitor_set(&self) -> HashSet<K> {
        HashSet::new()
    }

    fn neighbors(&self, key: &K) -> &[K] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::search::graph_algo::can_reach;

    use super::*;

    //   3 -> 7, 34
    //   7 -> 12, 45, 34, 56
    //  12 -> 7, 56, 78
    //  34 -> 34, 91       (self-loop)
    //  56 -> 78
    //  78 -> 91
    //  91 -> 56
    //  45 -> 23
    //  23 -> (leaf)
    //  67 -> 91
    fn setup_complex_map() -> AdjacencyMap<u32> {
        [
            (3, vec![7, 34]),
            (7, vec![12, 45, 34, 56]),
            (12, vec![7, 56, 78]),
            (34, vec![34, 91]),
            (56, vec![78]),
            (78, vec![91]),
            (91, vec![56]),
            (45, vec![23]),
            (23, vec![]),
            (67, vec![91]),
        ]
        .into_iter()
        .collect()
    }

    fn set(keys: &[u32]) -> HashSet<u32> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_unreachable_from_root() {
        let graph = setup_complex_map();
        assert_eq!(graph.unreachable(Some(&3)), set(&[67]));
    }

    #[test]
    fn test_unreachable_from_side_entry() {
        let graph = setup_complex_map();
        assert_eq!(graph.unreachable(Some(&67)), set(&[3, 7, 12, 34, 45, 23]));
    }

    #[test]
    fn test_unreachable_from_leaf() {
        let graph = setup_complex_map();
        assert_eq!(
            graph.unreachable(Some(&23)),
            set(&[3, 7, 12, 34, 56, 78, 91, 45, 67])
        );
        assert_eq!(graph.reachable(Some(&23)), set(&[23]));
    }

    #[test]
    fn test_absent_or_unknown_start_reaches_nothing() {
        let graph = setup_complex_map();
        let all: HashSet<u32> = graph.keys().copied().collect();
        assert_eq!(graph.unreachable(None), all);
        assert_eq!(graph.unreachable(Some(&1000)), all);
        assert!(graph.reachable(Some(&1000)).is_empty());
    }

    #[test]
    fn test_dangling_keys_never_reported() {
        // 99 is only ever a neighbor
        let graph: AdjacencyMap<u32> = [(1, vec![99]), (2, vec![1])].into_iter().collect();
        assert_eq!(graph.unreachable(Some(&1)), set(&[2]));
        assert_eq!(graph.reachable(Some(&1)), set(&[1]));
        assert!(!graph.contains_key(&99));
    }

    #[test]
    fn test_empty_map() {
        let graph: AdjacencyMap<u32> = AdjacencyMap::default();
        assert!(graph.is_empty());
        assert!(graph.unreachable(Some(&1)).is_empty());
    }

    #[test]
    fn test_unordered_neighbor_sets_accepted() {
        let graph: AdjacencyMap<&str> = [
            ("a", set_of(&["b", "c"])),
            ("b", set_of(&[])),
            ("d", set_of(&["a"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(graph.len(), 3);
        assert_eq!(
            graph.unreachable(Some(&"a")),
            ["d"].into_iter().collect::<HashSet<_>>()
        );
    }

    fn set_of<'a>(keys: &[&'a str]) -> HashSet<&'a str> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_insert_replaces_entry() {
        let mut graph = setup_complex_map();
        graph.insert(67, vec![3]);
        assert!(graph.unreachable(Some(&67)).is_empty());
    }

    #[test]
    fn test_partition_and_cross_check_with_can_reach() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let graph: AdjacencyMap<u32> = (0..20u32)
                .map(|key| {
                    let degree = rng.random_range(0..4);
                    let neighbors: Vec<u32> =
                        (0..degree).map(|_| rng.random_range(0..24)).collect();
                    (key, neighbors)
                })
                .collect();
            let start = rng.random_range(0..20);

            let reached = graph.reachable(Some(&start));
            let missed = graph.unreachable(Some(&start));

            assert!(reached.contains(&start));
            assert!(reached.is_disjoint(&missed));
            assert_eq!(reached.len() + missed.len(), graph.len());

            for key in graph.keys() {
                assert_eq!(
                    can_reach(&graph, Some(&start), Some(key)),
                    reached.contains(key),
                    "can_reach disagrees on {start} -> {key}"
                );
            }
        }
    }

    #[test]
    fn test_unreachable_with_stats_counts_the_walk() {
        let graph = setup_complex_map();
        let mut stats = Stats::new();

        assert_eq!(
            graph.unreachable_with_stats(Some(&67), &mut stats),
            set(&[3, 7, 12, 34, 45, 23])
        );
        // 67 -> 91 -> 56 -> 78
        assert_eq!(stats.get_traversals(), 1);
        assert_eq!(stats.get_nodes_visited(), 4);
        assert_eq!(stats.get_edges_examined(), 4);

        // an unknown start still counts as one (empty) walk
        graph.unreachable_with_stats(Some(&1000), &mut stats);
        assert_eq!(stats.get_traversals(), 2);
        assert_eq!(stats.get_nodes_visited(), 4);
    }
}
