//! # Item Store
//!
//! Keeps the catalog of [`StockItem`]s and guards their stock.
//!
//! Besides CRUD, the store understands three [`ItemAction`]s:
//!
//! ```rust,ignore
//! let level = item_client.check_stock(item_id).await?;
//! let unit_price = item_client.remove_stock(item_id, 2).await?; // may be InsufficientStock
//! item_client.add_stock(item_id, 2).await?;
//! ```
//!
//! Requests are served one at a time, so two orders racing for the last unit cannot
//! both succeed.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ItemClient;
use crate::model::StockItem;
use crate::store::StoreActor;

/// Creates a new Item store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<StockItem>, ItemClient) {
    let (actor, inner) = StoreActor::new(buffer_size);
    (actor, ItemClient::new(inner))
}
