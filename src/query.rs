//! Predicate queries over a single pass of an iterator.
//!
//! Every query consumes its iterator. The short-circuiting ones (`all_match`,
//! `any_match`, `find_first`) stop pulling as soon as the answer is known, so
//! a caller holding `iter.by_ref()` can keep reading after them.

/// Scalar queries: all, any, count, find and for-each.
pub trait Query: Iterator {
    /// Returns `true` if every element matches `predicate`.
    ///
    /// An empty iterator yields `true`.
    fn all_match<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        for element in self {
            if !predicate(&element) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if at least one element matches `predicate`.
    ///
    /// An empty iterator yields `false`.
    fn any_match<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        for element in self {
            if predicate(&element) {
                return true;
            }
        }
        false
    }

    /// Returns the number of elements matching `predicate`.
    fn count_matching<P>(self, mut predicate: P) -> usize
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let mut count = 0;
        for element in self {
            if predicate(&element) {
                count += 1;
            }
        }
        count
    }

    /// Returns the first element matching `predicate`, or `None` if nothing
    /// matched.
    fn find_first<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        for element in self {
            if predicate(&element) {
                return Some(element);
            }
        }
        None
    }

    /// Performs `operation` on each element.
    fn each<F>(self, mut operation: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for element in self {
            operation(element);
        }
    }
}

impl<I> Query for I where I: Iterator + ?Sized {}
