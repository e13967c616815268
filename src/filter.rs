//! Filtering into caller-supplied containers.
//!
//! Destinations are any `C: Extend<Item>`, taken by value and handed back
//! populated. Existing contents are kept; new elements are appended in
//! encounter order when the container is ordered.

/// Operations that copy a selection of elements into a destination.
pub trait FilterInto: Iterator {
    /// Appends every element matching `predicate` to `dest`.
    fn filter_into<C, P>(self, mut dest: C, mut predicate: P) -> C
    where
        Self: Sized,
        C: Extend<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        dest.extend(self.filter(|element| predicate(element)));
        dest
    }

    /// Appends every element *not* matching `predicate` to `dest`.
    fn filter_not_into<C, P>(self, mut dest: C, mut predicate: P) -> C
    where
        Self: Sized,
        C: Extend<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        dest.extend(self.filter(|element| !predicate(element)));
        dest
    }

    /// Appends the contents of every `Some` element to `dest`, skipping `None`.
    fn filter_some_into<T, C>(self, mut dest: C) -> C
    where
        Self: Sized + Iterator<Item = Option<T>>,
        C: Extend<T>,
    {
        dest.extend(self.flatten());
        dest
    }

    /// Transforms each element into a sub-sequence and appends all of them,
    /// in order, to `dest`.
    ///
    /// A transform returning `None` (or any empty sequence) contributes
    /// nothing.
    fn flat_map_into<C, U, F>(self, mut dest: C, mut transform: F) -> C
    where
        Self: Sized,
        U: IntoIterator,
        C: Extend<U::Item>,
        F: FnMut(Self::Item) -> U,
    {
        for element in self {
            dest.extend(transform(element));
        }
        dest
    }

    /// Appends the leading run of elements matching `predicate`.
    ///
    /// Stops at the first element that fails, even when later ones would
    /// match. The failing element is consumed and dropped.
    fn take_while_into<C, P>(self, mut dest: C, mut predicate: P) -> C
    where
        Self: Sized,
        C: Extend<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        dest.extend(self.take_while(|element| predicate(element)));
        dest
    }
}

impl<I> FilterInto for I where I: Iterator + ?Sized {}

/// Null-source form of [`FilterInto::filter_some_into`].
///
/// A `None` source leaves `dest` untouched.
pub fn filter_some_from<I, T, C>(source: Option<I>, dest: C) -> C
where
    I: IntoIterator<Item = Option<T>>,
    C: Extend<T>,
{
    match source {
        Some(source) => source.into_iter().filter_some_into(dest),
        None => dest,
    }
}
