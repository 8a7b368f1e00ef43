//! # Shop Actors
//!
//! Order management for a small shop (members, a catalog of books, albums and movies,
//! categories, and orders) built on actor-owned in-memory stores.
//!
//! ## Design
//!
//! Every entity type lives in its own [`StoreActor`](store::StoreActor): a Tokio task that
//! owns an `id -> entity` map and serves requests one at a time over an `mpsc` channel.
//! No locks guard entity state, and concurrent orders for the same item are serialized by
//! the item store, so stock is never lost or driven negative.
//!
//! Entity behaviour is written once per type through the [`Entity`](store::Entity) trait:
//! creation, updates, deletion hooks and custom actions such as `RemoveStock` or
//! `Cancel`. Dependencies (the order store needs the member and item stores) are injected
//! when the actor is started, not when it is built.
//!
//! ### Errors
//! Each store has its own `thiserror` enum (`MemberError`, `ItemError`, ...). Errors cross
//! the channel boxed in [`StoreError`](store::StoreError) and are downcast back by the
//! clients, then folded into [`ShopError`](error::ShopError) at the service layer.
//!
//! ### Placing and cancelling
//! Placing an order removes stock for each line through a
//! [`StockTransaction`](order_actor::StockTransaction); the first failing line rolls back
//! the lines already taken. Cancelling restores every line the same way.
//!
//! ## Module Tour
//!
//! - [`store`]: the generic actor, client, entity trait and test mocks
//! - [`model`]: plain data types
//! - [`member_actor`], [`item_actor`], [`category_actor`], [`order_actor`]: entity impls
//! - [`clients`]: typed per-store clients
//! - [`service`]: `MemberService`, `ItemService`, `OrderService`
//! - [`lifecycle`]: [`ShopSystem`](lifecycle::ShopSystem) and tracing setup
//! - [`config`]: [`ShopConfig`](config::ShopConfig)
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod category_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod item_actor;
pub mod lifecycle;
pub mod member_actor;
pub mod model;
pub mod order_actor;
pub mod service;
pub mod store;
