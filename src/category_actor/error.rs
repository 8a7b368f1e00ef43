//! Error types for the Category store.

use crate::model::CategoryId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    #[error("Category validation error: {0}")]
    Validation(String),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
