//! Error types for backend access, payload normalization and form validation.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a single backend request. Displays as the bare detail so the
/// message can be shown inline as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Transport(String),
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("{0}")]
    Decode(String),
}

impl StoreError {
    /// Non-success response: the body is the detail when present
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let body = body.trim();
        let detail = if body.is_empty() { fallback } else { body };
        StoreError::Status {
            status,
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("menu record has no id")]
    MissingId,
    #[error("invalid menu id: {0}")]
    InvalidId(String),
    #[error("invalid scope: {0}")]
    InvalidScope(String),
}

/// Client-side submission checks; these never reach the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please give this menu a name.")]
    MissingName,
    #[error("Add at least one item to the menu.")]
    NoItems,
    #[error("Every item must have a quantity of at least 1 ({0}).")]
    NonPositiveQuantity(String),
    #[error("{0} is already on this menu.")]
    DuplicateItem(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_body() {
        let err = StoreError::from_status(404, "Menu not found", "Failed to load menu");
        assert_eq!(err.to_string(), "Menu not found");

        let err = StoreError::from_status(500, "  \n", "Failed to load menu");
        assert_eq!(err.to_string(), "Failed to load menu");
        assert!(matches!(err, StoreError::Status { status: 500, .. }));
    }
}
