//! Glob-import this module to bring every extension trait into scope.
//!
//! ```
//! use iterops::prelude::*;
//!
//! let evens = (1..=6).filter_into(Vec::new(), |n| n % 2 == 0);
//! assert_eq!(evens.iter().make_string(&Joiner::new()), "2, 4, 6");
//! ```

pub use crate::collect::Materialize;
pub use crate::filter::FilterInto;
pub use crate::fold::Fold;
pub use crate::group::{GroupBy, GroupMap};
pub use crate::query::Query;
pub use crate::render::{Joiner, Nullable, Render};
