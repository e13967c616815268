use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A container that can hold key → list-of-values groups.
///
/// Implemented for `HashMap` (any hasher), `BTreeMap` (keys iterate sorted)
/// and `Vec<(K, Vec<V>)>` (keys kept in first-seen order).
pub trait GroupMap<K, V> {
    /// Returns the group for `key`, creating an empty one if it is new.
    fn group_mut(&mut self, key: K) -> &mut Vec<V>;
}

impl<K, V, S> GroupMap<K, V> for HashMap<K, Vec<V>, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn group_mut(&mut self, key: K) -> &mut Vec<V> {
        self.entry(key).or_default()
    }
}

impl<K, V> GroupMap<K, V> for BTreeMap<K, Vec<V>>
where
    K: Ord,
{
    fn group_mut(&mut self, key: K) -> &mut Vec<V> {
        self.entry(key).or_default()
    }
}

// Linear lookup; fine for the handful of keys this is meant for.
impl<K, V> GroupMap<K, V> for Vec<(K, Vec<V>)>
where
    K: PartialEq,
{
    fn group_mut(&mut self, key: K) -> &mut Vec<V> {
        let index = match self.iter().position(|(existing, _)| *existing == key) {
            Some(index) => index,
            None => {
                self.push((key, Vec::new()));
                self.len() - 1
            }
        };
        &mut self[index].1
    }
}
