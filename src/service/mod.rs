//! Application services: the operations a shop front end calls.
//!
//! Services hold clients, check cross-store preconditions (the member exists, the name is
//! free, the parent category exists) and translate store errors into [`ShopError`].
//!
//! [`ShopError`]: crate::error::ShopError

pub mod item_service;
pub mod member_service;
pub mod order_service;

pub use item_service::ItemService;
pub use member_service::MemberService;
pub use order_service::OrderService;
