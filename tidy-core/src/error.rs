use thiserror::Error;

/// Message shown to the user when an add is attempted without a title.
pub const VALIDATION_MESSAGE: &str = "Please enter a todo title";

/// Input rejected by the store or by the form parsers.
///
/// A rejected operation never touches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Please enter a todo title")]
    EmptyTitle,

    #[error("invalid priority: {0:?} (expected Low, Medium or High)")]
    InvalidPriority(String),

    #[error("invalid status: {0:?} (expected Pending or Completed)")]
    InvalidStatus(String),
}

impl TodoError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::EmptyTitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_message_matches_the_form_text() {
        assert_eq!(TodoError::EmptyTitle.to_string(), VALIDATION_MESSAGE);
        assert!(TodoError::EmptyTitle.is_validation());
        assert!(!TodoError::InvalidPriority("x".into()).is_validation());
    }
}
