//! # Entity Trait
//!
//! The contract every stored resource (member, item, order, category) implements so that a
//! single generic [`StoreActor`](crate::store::StoreActor) can own it.
//!
//! Associated types pin down the id, the payloads for create/update, the custom actions,
//! the injected context and the error type. A `MemberCreate` can never be sent to the item
//! store; the compiler rejects it.
//!
//! # Hooks
//! [`Entity::on_create`] and [`Entity::on_delete`] have default no-op implementations.
//! [`Entity::on_update`] and [`Entity::handle_action`] must be written by every entity.
//! [`Entity::conflicts_with`] defaults to "no constraint".

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be kept by a [`StoreActor`](crate::store::StoreActor).
///
/// # Async & Context
/// Hooks are async so they can talk to other stores. The `Context` is handed to
/// [`StoreActor::run`](crate::store::StoreActor::run), not to the constructor, which lets
/// stores that depend on each other be created first and wired second.
#[async_trait]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identity of the entity. `Ord` keeps listings in id order.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to modify an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `RemoveStock`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly assigned id and the create payload.
    /// Runs synchronously before [`Entity::on_create`].
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Store-wide constraint check (e.g. unique names), called by the actor against every
    /// other stored entity before a create or update is committed. Returning an error
    /// rejects the write.
    ///
    /// The actor serves one request at a time, so the check and the write are atomic.
    fn conflicts_with(&self, _other: &Self) -> Option<Self::Error> {
        None
    }

    /// Runs after construction and before the entity is stored. A failure discards it.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before removal. A failure keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
