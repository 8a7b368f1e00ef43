//! # Category Store
//!
//! Catalog tree nodes. A category names its parent and holds a set of item ids; checking
//! that those ids exist is left to [`ItemService`](crate::service::ItemService).

pub mod entity;
pub mod error;

pub use entity::CategoryAction;
pub use error::*;

use crate::clients::CategoryClient;
use crate::model::Category;
use crate::store::StoreActor;

/// Creates a new Category store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Category>, CategoryClient) {
    let (actor, inner) = StoreActor::new(buffer_size);
    (actor, CategoryClient::new(inner))
}
