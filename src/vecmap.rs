use std::iter::FromIterator;
use std::slice::Iter;
use std::vec::IntoIter;

/// A map implemented as a `Vec` of pairs in insertion order.
///
/// This is the codec's canonical mapping type: its iteration order is its
/// insertion order, so the array-of-pairs wire layout is deterministic, and
/// decoding reproduces the pairs exactly as they appeared on the wire.
/// Lookups scan; it is meant for the small field maps that ride in messages,
/// not as a general-purpose container.
#[derive(Eq, PartialEq, Clone, Hash, Debug, Default)]
pub struct VecMap<K, V>(Vec<(K, V)>);

impl<K, V> VecMap<K, V> {
    /// Creates a new, empty `VecMap`.
    pub fn new() -> VecMap<K, V> {
        VecMap(Vec::new())
    }

    /// Creates a new `VecMap` with preallocated capacity.
    pub fn with_capacity(cap: usize) -> VecMap<K, V> {
        VecMap(Vec::with_capacity(cap))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> Iter<(K, V)> {
        self.0.iter()
    }
}

impl<K: PartialEq, V> VecMap<K, V> {
    /// Inserts an entry, replacing and returning the previous value for an
    /// equal key. New keys append at the end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        for (k, v) in self.0.iter_mut() {
            if *k == key {
                return Some(std::mem::replace(v, value));
            }
        }
        self.0.push((key, value));
        None
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Indicates whether the key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, V> From<Vec<(K, V)>> for VecMap<K, V> {
    fn from(v: Vec<(K, V)>) -> Self {
        VecMap(v)
    }
}

impl<K, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a VecMap<K, V> {
    type IntoIter = Iter<'a, (K, V)>;
    type Item = &'a (K, V);

    fn into_iter(self) -> Iter<'a, (K, V)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        VecMap(Vec::from_iter(iter))
    }
}
