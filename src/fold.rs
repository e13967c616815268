//! Left and right folds.
//!
//! `fold_right` only needs a forward iterator: it materializes the reversed
//! sequence first and then folds that from the left. On an iterator that
//! never ends it never returns.

use crate::collect::Materialize;

/// Accumulating folds.
pub trait Fold: Iterator {
    /// Folds from left to right: `acc = operation(acc, element)`.
    fn fold_left<B, F>(self, initial: B, mut operation: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut answer = initial;
        for element in self {
            answer = operation(answer, element);
        }
        answer
    }

    /// Folds from right to left: the last element is combined with `initial`
    /// first.
    ///
    /// Takes two passes, one to reverse and one to fold.
    fn fold_right<B, F>(self, initial: B, operation: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let reversed = self.reversed();
        tracing::trace!(elements = reversed.len(), "fold_right materialized input");
        reversed.into_iter().fold_left(initial, operation)
    }
}

impl<I> Fold for I where I: Iterator + ?Sized {}
