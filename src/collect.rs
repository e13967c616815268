//! Copying an iterator into concrete containers.

use std::collections::{BTreeSet, HashSet, LinkedList};
use std::hash::Hash;

/// Materializing copies: `copy_to`, the `to_*` family and `reversed`.
pub trait Materialize: Iterator {
    /// Copies all elements into `dest` and returns it.
    fn copy_to<C>(self, mut dest: C) -> C
    where
        Self: Sized,
        C: Extend<Self::Item>,
    {
        dest.extend(self);
        dest
    }

    /// Copies all elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.copy_to(Vec::new())
    }

    /// Copies all elements into a general-purpose collection (a `Vec`).
    fn to_collection(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.to_list()
    }

    /// Copies all elements into a `HashSet`, dropping duplicates.
    fn to_set(self) -> HashSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
    {
        self.copy_to(HashSet::new())
    }

    /// Copies all elements into a `BTreeSet`, dropping duplicates.
    fn to_sorted_set(self) -> BTreeSet<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.copy_to(BTreeSet::new())
    }

    /// Copies all elements into a `LinkedList`.
    fn to_linked_list(self) -> LinkedList<Self::Item>
    where
        Self: Sized,
    {
        self.copy_to(LinkedList::new())
    }

    /// Copies all elements into a `Vec` stably sorted by the extracted key.
    fn to_sorted_list_by_key<K, F>(self, to_key: F) -> Vec<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut answer = self.to_list();
        answer.sort_by_key(to_key);
        answer
    }

    /// Materializes the elements in reverse encounter order.
    fn reversed(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut answer = self.to_list();
        answer.reverse();
        tracing::trace!(elements = answer.len(), "reversed input");
        answer
    }
}

impl<I> Materialize for I where I: Iterator + ?Sized {}
