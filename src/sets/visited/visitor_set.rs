/// Records which nodes a single traversal has already reached.
///
/// A fresh set is created for every traversal and is owned exclusively by it.
pub trait VisitorSet<K> {
    fn get(&self, key: &K) -> bool;

    /// Marks `key` as visited. Returns `true` if it had not been visited yet.
    fn set(&mut self, key: K) -> bool;
}
