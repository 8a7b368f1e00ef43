//! # Order Store
//!
//! Keeps placed orders. Depends on the member and item stores, injected at run time:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run((member_client, item_client)));
//! ```
//!
//! Orders are created by `place_order`, change state through [`OrderAction`]s and are
//! never deleted.

pub mod actions;
pub mod entity;
pub mod error;
pub mod transaction;

pub use actions::*;
pub use error::*;
pub use transaction::StockTransaction;

use crate::clients::OrderClient;
use crate::model::Order;
use crate::store::StoreActor;

/// Creates a new Order store and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Order>, OrderClient) {
    let (actor, inner) = StoreActor::new(buffer_size);
    (actor, OrderClient::new(inner))
}
