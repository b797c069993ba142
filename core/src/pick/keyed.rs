use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};

/// A source whose keys form an explicit, enumerable type.
pub trait Keyed {
    type Key: Clone + Ord;
    type Value;

    /// Value stored under `key`, or `None` when the source lacks it.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;
}

impl<K: Clone + Ord, V> Keyed for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> Keyed for hashbrown::HashMap<K, V, S>
where
    K: Clone + Ord + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<T: Keyed + ?Sized> Keyed for &T {
    type Key = T::Key;
    type Value = T::Value;

    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value> {
        (**self).lookup(key)
    }
}
