use std::hash::Hash;

use hashbrown::HashSet;

use crate::sets::visited::VisitorSet;

impl<K: Eq + Hash> VisitorSet<K> for HashSet<K> {
    fn get(&self, key: &K) -> bool {
        self.contains(key)
    }

    fn set(&mut self, key: K) -> bool {
        self.insert(key)
    }
}
