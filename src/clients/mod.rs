//! Domain clients: typed wrappers around [`StoreClient`](crate::store::StoreClient).
//!
//! Each client maps [`StoreError`](crate::store::StoreError) back into its store's own
//! error enum, so callers match on `ItemError::InsufficientStock` rather than on strings.

pub mod category_client;
pub mod item_client;
pub mod member_client;
pub mod order_client;

pub use category_client::*;
pub use item_client::*;
pub use member_client::*;
pub use order_client::*;
