//! Generic actor-backed entity store.
//!
//! - [`Entity`] - trait a stored resource implements
//! - [`StoreActor`] - task that owns one entity map and serves requests sequentially
//! - [`StoreClient`] / [`EntityClient`] - typed request API and the shared client trait
//! - [`IdGenerator`] / [`Sequence`] - identity assignment for saved entities
//! - [`StoreError`] - plumbing errors plus the boxed entity error
//!
//! See [`mock`] for test doubles.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod ids;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::{EntityClient, StoreClient};
pub use entity::Entity;
pub use error::StoreError;
pub use ids::{IdGenerator, Sequence};
pub use message::{Filter, Response, StoreRequest};
