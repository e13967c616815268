use std::fmt;

/// Text rendered in place of a missing element.
pub const NULL_TEXT: &str = "null";

/// Configuration for joining elements into text.
///
/// Defaults: separator `", "`, empty prefix and postfix, no limit, and
/// `"..."` as the truncation marker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Joiner {
    /// Placed between consecutive elements.
    pub separator: String,

    /// Written before the first element.
    pub prefix: String,

    /// Written after everything else.
    pub postfix: String,

    /// Maximum number of elements rendered; `None` renders all of them.
    pub limit: Option<usize>,

    /// Appended when more elements remained than `limit` allows.
    pub truncated: String,
}

impl Joiner {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            postfix: String::new(),
            limit: None,
            truncated: "...".to_string(),
        }
    }

    /// Set the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the postfix.
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Cap the number of rendered elements. A negative limit means no limit.
    pub fn with_limit(mut self, limit: isize) -> Self {
        self.limit = usize::try_from(limit).ok();
        self
    }

    /// Remove any element cap.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Set the truncation marker.
    pub fn with_truncated(mut self, truncated: impl Into<String>) -> Self {
        self.truncated = truncated.into();
        self
    }

    /// Whether rendering `count` elements overruns the limit.
    pub(crate) fn exceeds_limit(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count > limit)
    }
}

impl Default for Joiner {
    fn default() -> Self {
        Self::new()
    }
}

/// Displays the wrapped value, or [`NULL_TEXT`] when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullable<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(NULL_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_limit_is_unlimited() {
        assert_eq!(Joiner::new().with_limit(-1).limit, None);
        assert_eq!(Joiner::new().with_limit(0).limit, Some(0));
        assert_eq!(Joiner::new().with_limit(3).unlimited(), Joiner::default());
    }

    #[test]
    fn test_exceeds_limit() {
        let joiner = Joiner::new().with_limit(2);
        assert!(!joiner.exceeds_limit(2));
        assert!(joiner.exceeds_limit(3));
        assert!(!Joiner::new().exceeds_limit(usize::MAX));
    }

    #[test]
    fn test_nullable_display() {
        assert_eq!(Nullable(Some(4)).to_string(), "4");
        assert_eq!(Nullable::<i32>(None).to_string(), "null");
        assert_eq!(format!("{:>3}", Nullable(Some(7))), "  7");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_partial_config() {
        let joiner = Joiner::new().with_separator("|").with_limit(2);
        let json = serde_json::to_string(&joiner).expect("serializes");
        let back: Joiner = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, joiner);

        let partial: Joiner = serde_json::from_str(r#"{"prefix": "["}"#).expect("deserializes");
        assert_eq!(partial, Joiner::new().with_prefix("["));
    }
}
