use alloc::collections::BTreeMap;

/// The subset produced by [`pick`](super::pick).
///
/// Holds exactly the requested keys. Values borrow from the source, so the
/// subset is a shallow copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picked<'a, K, V> {
    entries: BTreeMap<K, Option<&'a V>>,
}

impl<'a, K: Ord, V> Picked<'a, K, V> {
    pub(crate) fn from_entries(entries: BTreeMap<K, Option<&'a V>>) -> Self {
        Self { entries }
    }

    /// Value picked for `key`. `None` both for keys that were not requested
    /// and for requested keys the source did not hold.
    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.entries.get(key).copied().flatten()
    }

    /// Whether `key` was requested, regardless of whether the source held it.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<&'a V>)> {
        self.entries.iter().map(|(key, value)| (key, *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_owned_map(&self) -> BTreeMap<K, Option<V>>
    where
        K: Clone,
        V: Clone,
    {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.cloned()))
            .collect()
    }
}
