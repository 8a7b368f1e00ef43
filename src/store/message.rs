//! # Store Messages
//!
//! Request envelopes sent from a [`StoreClient`](crate::store::StoreClient) to a
//! [`StoreActor`](crate::store::StoreActor). Every request carries its own oneshot reply.

use crate::store::entity::Entity;
use crate::store::error::StoreError;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot reply channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Predicate evaluated inside the store actor by [`StoreRequest::Find`].
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// Matches every entity.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, entity: &T) -> bool {
        (self.0)(entity)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// The request set understood by every store: save, read, query, update, delete, and a
/// custom entity-specific action.
///
/// Generic over `T: Entity`, so the payload types are those declared by the entity.
#[derive(Debug)]
pub enum StoreRequest<T: Entity> {
    Save {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: Entity> StoreRequest<T> {
    /// Short request name for logs and test failures.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreRequest::Save { .. } => "Save",
            StoreRequest::FindById { .. } => "FindById",
            StoreRequest::Find { .. } => "Find",
            StoreRequest::Update { .. } => "Update",
            StoreRequest::Delete { .. } => "Delete",
            StoreRequest::Action { .. } => "Action",
        }
    }
}
