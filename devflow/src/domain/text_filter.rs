//! Case-insensitive substring matching for search queries.
//!
//! Search terms are escaped before compilation, so callers can pass raw
//! user input without it being interpreted as a pattern.

use regex::{Regex, RegexBuilder};

/// Error raised when a search term cannot be compiled into a matcher.
#[derive(Debug, Clone, thiserror::Error)]
#[error("search pattern failed to compile: {0}")]
pub struct TextFilterError(#[from] regex::Error);

/// A compiled case-insensitive substring matcher.
#[derive(Debug, Clone)]
pub struct TextFilter {
    pattern: Regex,
}

impl TextFilter {
    /// Compile a matcher for the given search term.
    pub fn new(needle: &str) -> Result<Self, TextFilterError> {
        let pattern = RegexBuilder::new(&regex::escape(needle.trim()))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Whether the haystack contains the search term, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        self.pattern.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("borrow", "The Borrow Checker", true)]
    #[case("BORROW", "borrowing twice", true)]
    #[case("borrow", "ownership", false)]
    fn matching_ignores_case(#[case] needle: &str, #[case] haystack: &str, #[case] hit: bool) {
        let filter = TextFilter::new(needle).expect("compile filter");
        assert_eq!(filter.matches(haystack), hit);
    }

    #[rstest]
    fn metacharacters_are_treated_literally() {
        let filter = TextFilter::new("c++ (modern)").expect("compile filter");
        assert!(filter.matches("Prefer C++ (modern) idioms"));
        assert!(!filter.matches("cpp modern"));
    }
}
