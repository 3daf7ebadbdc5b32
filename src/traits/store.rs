/// Persistent integer key-value storage
pub trait KeyValueStore {
    /// Value for `key`, or `default` when absent
    fn get(&self, key: &str, default: i64) -> i64;

    fn set(&mut self, key: &str, value: i64);

    fn contains(&self, key: &str) -> bool;

    /// Persist pending writes
    fn flush(&mut self) -> std::io::Result<()>;
}
