//! Error types for the Member store.

use crate::model::MemberId;
use thiserror::Error;

/// Errors that can occur during member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MemberError {
    /// The requested member was not found.
    #[error("Member not found: {0}")]
    NotFound(MemberId),

    /// Another member already uses this name.
    #[error("Member already exists: {0}")]
    Duplicate(String),

    /// The member data provided is invalid.
    #[error("Member validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
