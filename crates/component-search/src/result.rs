//! Result and error types for component search criteria.

use thiserror::Error;

/// Result type for criteria construction
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while assembling search criteria
#[derive(Debug, Error)]
pub enum SearchError {
    /// Count range with `min > max`
    #[error("Parameter min: invalid value {min}: must be less than or equal to max: {max}")]
    InvalidRange {
        /// Requested minimum
        min: i32,
        /// Requested maximum
        max: i32,
    },

    /// Criteria template could not be parsed or rendered
    #[error("Template error: {message}")]
    Template {
        /// Error message
        message: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Create an invalid range error
    #[must_use]
    pub const fn invalid_range(min: i32, max: i32) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Create a template error
    #[must_use]
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_bounds() {
        let msg = SearchError::invalid_range(5, 2).to_string();
        assert_eq!(
            msg,
            "Parameter min: invalid value 5: must be less than or equal to max: 2"
        );
    }

    #[test]
    fn test_template_message() {
        let err = SearchError::template("missing field");
        assert_eq!(err.to_string(), "Template error: missing field");
    }
}
