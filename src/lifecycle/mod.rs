//! Process-level wiring: starting the stores and installing the log subscriber.

pub mod shop_system;
pub mod tracing;

pub use shop_system::ShopSystem;
pub use self::tracing::setup_tracing;
