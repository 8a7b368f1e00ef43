//! Plain data types stored by the [`Entity`](crate::store::Entity) stores.

pub mod category;
pub mod item;
pub mod member;
pub mod order;

pub use category::*;
pub use item::*;
pub use member::*;
pub use order::*;
