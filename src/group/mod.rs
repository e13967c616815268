//! Partitioning elements into groups by a derived key.
//!
//! Within a group, elements keep their encounter order. Key order depends on
//! the target container, see [`GroupMap`].

mod map;

pub use map::GroupMap;

use std::collections::HashMap;
use std::hash::Hash;

/// Grouping operations.
pub trait GroupBy: Iterator {
    /// Groups elements into a new `HashMap` keyed by `to_key`.
    fn group_by_key<K, F>(self, to_key: F) -> HashMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        self.group_by_into(HashMap::new(), to_key)
    }

    /// Groups elements into `dest`, appending to any groups already present.
    fn group_by_into<K, M, F>(self, mut dest: M, mut to_key: F) -> M
    where
        Self: Sized,
        M: GroupMap<K, Self::Item>,
        F: FnMut(&Self::Item) -> K,
    {
        let mut elements = 0usize;
        for element in self {
            let key = to_key(&element);
            dest.group_mut(key).push(element);
            elements += 1;
        }
        tracing::trace!(elements, "grouped input");
        dest
    }
}

impl<I> GroupBy for I where I: Iterator + ?Sized {}
