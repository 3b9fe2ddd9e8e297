//! Error types for page composition
//!
//! Cache misses and unknown registry names are plain `Option` values; only the
//! composition entry point turns a missing page into an error.

use thiserror::Error;

// == Compose Error Enum ==
/// Errors surfaced by [`crate::compose::PageComposer`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// No registered composition for the requested page
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

// == Result Type Alias ==
/// Convenience Result type for page composition.
pub type Result<T> = std::result::Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_not_found_message() {
        let err = ComposeError::PageNotFound("missingpage".to_string());
        assert_eq!(err.to_string(), "Page not found: missingpage");
    }
}
