//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    #[error("Missing or empty title field")]
    EmptyTitle,

    #[error("Missing or empty text field for segment")]
    EmptyText,
}
