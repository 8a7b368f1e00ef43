//! # Store Errors
//!
//! Errors raised by the store plumbing itself. Entity errors travel boxed inside
//! [`StoreError::Entity`] and are recovered with [`StoreError::downcast`].

/// Errors that can occur while talking to a store actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Store has no identities left")]
    IdsExhausted,
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recover the entity's own error type from an [`StoreError::Entity`].
    ///
    /// Returns the error unchanged when it is a plumbing error or carries a different type.
    pub fn downcast<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            StoreError::Entity(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(inner) => Err(StoreError::Entity(inner)),
            },
            other => Err(other),
        }
    }
}
