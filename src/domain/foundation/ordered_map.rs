//! Insertion-ordered map used for choices, criteria and rating tables.
//!
//! Tie-breaking in the ranking and the default display order both follow
//! declaration order, so lookups go through a hash index while iteration
//! follows the order keys were first inserted.

use std::collections::HashMap;
use std::hash::Hash;

/// A map that iterates in insertion order.
///
/// Re-inserting an existing key replaces its value but keeps its position.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    /// Keys in insertion order.
    keys: Vec<K>,
    /// Values keyed by the same keys.
    values: HashMap<K, V>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            values: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Clone + Eq + Hash, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.values.insert(key.clone(), value);
        if previous.is_none() {
            self.keys.push(key);
        }
        previous
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().filter_map(move |key| self.values.get(key).map(|v| (key, v)))
    }

    /// Builds a new map with the same keys and order, transforming each value.
    pub fn map_values<W>(&self, mut f: impl FnMut(&K, &V) -> W) -> OrderedMap<K, W> {
        let mut mapped = OrderedMap::new();
        for (key, value) in self.iter() {
            mapped.insert(key.clone(), f(key, value));
        }
        mapped
    }
}

impl<K: Clone + Eq + Hash, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_insertion_order() {
        let map: OrderedMap<&str, i32> = vec![("c", 1), ("a", 2), ("b", 3)].into_iter().collect();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn reinsert_keeps_position_and_replaces_value() {
        let mut map = OrderedMap::new();
        map.insert("x", 1);
        map.insert("y", 2);
        assert_eq!(map.insert("x", 10), Some(1));

        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("x", 10), ("y", 2)]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookups() {
        let map: OrderedMap<&str, i32> = vec![("a", 1)].into_iter().collect();
        assert_eq!(map.get(&"a"), Some(&1));
        assert!(map.get(&"b").is_none());
        assert!(map.contains_key(&"a"));
        assert!(!map.is_empty());
        assert!(OrderedMap::<&str, i32>::new().is_empty());
    }

    #[test]
    fn map_values_preserves_order() {
        let map: OrderedMap<&str, i32> = vec![("b", 1), ("a", 2)].into_iter().collect();
        let doubled = map.map_values(|_, v| v * 2);
        let entries: Vec<_> = doubled.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("b", 2), ("a", 4)]);
    }
}
