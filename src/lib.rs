//! # Functional extension operations for iterators
//!
//! Every operation here consumes a single-pass iterator exactly once and
//! produces a scalar, a populated container, a string, or a side effect.
//! They are provided as extension traits with blanket implementations, so
//! any `Iterator` picks them up once [`prelude`] is in scope.
//!
//! ## Operations
//!
//! 1. **Queries** ([`Query`]): `all_match`, `any_match`, `count_matching`,
//!    `find_first`, `each`
//! 2. **Filtering into containers** ([`FilterInto`]): `filter_into`,
//!    `filter_not_into`, `filter_some_into`, `flat_map_into`,
//!    `take_while_into`
//! 3. **Folds** ([`Fold`]): `fold_left`, `fold_right`
//! 4. **Grouping** ([`GroupBy`]): `group_by_key`, `group_by_into`
//! 5. **Joining** ([`Render`]): `append_string`, `write_string`,
//!    `make_string` and their `Option`-aware variants
//! 6. **Copies** ([`Materialize`]): `copy_to`, `to_list`, `to_set`,
//!    `to_sorted_set`, `to_linked_list`, `reversed`, ...
//!
//! ## Usage Example
//!
//! ```
//! use iterops::prelude::*;
//!
//! let words = ["apple", "avocado", "banana", "cherry", "blueberry"];
//!
//! assert!(words.iter().all_match(|w| w.len() > 4));
//! assert_eq!(words.iter().count_matching(|w| w.starts_with('b')), 2);
//!
//! let by_initial: Vec<(Option<char>, Vec<&str>)> = words
//!     .into_iter()
//!     .group_by_into(Vec::new(), |w| w.chars().next());
//! assert_eq!(by_initial[0], (Some('a'), vec!["apple", "avocado"]));
//!
//! let joiner = Joiner::new().with_prefix("[").with_postfix("]").with_limit(2);
//! assert_eq!(words.iter().make_string(&joiner), "[apple, avocado, ...]");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod collect;  // Container copies and reversal
pub mod filter;   // Filtering into caller-supplied containers
pub mod fold;     // Left and right folds
pub mod group;    // Key-based grouping
pub mod prelude;  // Every extension trait in one import
pub mod query;    // Predicate queries
pub mod render;   // Joining into text

// Re-exports for convenience
pub use collect::Materialize;
pub use filter::{filter_some_from, FilterInto};
pub use fold::Fold;
pub use group::{GroupBy, GroupMap};
pub use query::Query;
pub use render::{Joiner, Nullable, Render, RenderError, NULL_TEXT};
