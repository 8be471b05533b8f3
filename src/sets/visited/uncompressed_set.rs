use crate::sets::visited::VisitorSet;

/// A fixed-capacity visited set for arena graphs, one bit per node.
///
/// Any handle convertible into a dense arena index can be used as key.
///
/// # Examples
///
/// ```
/// use dfsgraph::sets::visited::{UncompressedSet, VisitorSet};
///
/// let mut visited = UncompressedSet::new(10);
/// assert!(!VisitorSet::<usize>::get(&visited, &3));
///
/// assert!(visited.set(3usize));
/// assert!(VisitorSet::<usize>::get(&visited, &3));
/// ```
pub struct UncompressedSet {
    buffer: Box<[u8]>,
    capacity: usize,
}

impl UncompressedSet {
    /// Constructs a set able to track `capacity` nodes, none of them visited.
    pub fn new(capacity: usize) -> Self {
        UncompressedSet {
            buffer: vec![0u8; capacity.div_ceil(8)].into_boxed_slice(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of nodes marked so far.
    pub fn count(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    fn locate(&self, index: usize) -> (usize, u8) {
        assert!(
            index < self.capacity,
            "node index {index} outside of a graph of {} nodes",
            self.capacity
        );
        (index / 8, 1u8 << (index % 8))
    }
}

impl<K: Copy + Into<usize>> VisitorSet<K> for UncompressedSet {
    /// # Panics
    ///
    /// Panics if the key's index is not below `capacity`.
    fn get(&self, key: &K) -> bool {
        let (byte, mask) = self.locate((*key).into());
        self.buffer[byte] & mask != 0
    }

    /// # Panics
    ///
    /// Panics if the key's index is not below `capacity`.
    fn set(&mut self, key: K) -> bool {
        let (byte, mask) = self.locate(key.into());
        let fresh = self.buffer[byte] & mask == 0;
        self.buffer[byte] |= mask;
        fresh
    }
}
