//! # Store Client
//!
//! [`StoreClient`] is the typed request API of a store actor. [`EntityClient`] is the trait
//! that domain-specific clients implement to inherit the common read paths.

use crate::store::entity::Entity;
use crate::store::error::StoreError;
use crate::store::message::{Filter, StoreRequest};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// Cheap-to-clone handle onto a [`StoreActor`](crate::store::StoreActor).
///
/// Every call sends one [`StoreRequest`] and awaits its oneshot reply.
#[derive(Clone)]
pub struct StoreClient<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Entity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn save(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Save { params, respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    /// All entities accepted by `filter`, in id order.
    pub async fn find(&self, filter: Filter<T>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Find { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

/// Shared read paths for domain clients (`MemberClient`, `ItemClient`, ...).
///
/// Implementors provide the inner [`StoreClient`] and the mapping from [`StoreError`] into
/// their own error type; `find_by_id`, `find_all` and `delete` come for free.
#[async_trait]
pub trait EntityClient<T: Entity>: Send + Sync {
    type Error: Send + Sync;

    fn inner(&self) -> &StoreClient<T>;

    /// Usually a [`StoreError::downcast`] into the entity error, with a fallback variant
    /// for plumbing failures.
    fn map_error(e: StoreError) -> Self::Error;

    /// The entity error for a missing id.
    fn not_found(id: T::Id) -> Self::Error;

    /// [`EntityClient::map_error`] for requests that name an id, turning
    /// [`StoreError::NotFound`] into [`EntityClient::not_found`].
    fn map_id_error(id: T::Id, e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(_) => Self::not_found(id),
            other => Self::map_error(other),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_id(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(Filter::all()).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .delete(id.clone())
            .await
            .map_err(|e| Self::map_id_error(id, e))
    }
}
