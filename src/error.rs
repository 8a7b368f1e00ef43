//! # Shop Errors
//!
//! [`ShopError`] is what the services return. Each store error converts into it, so a
//! service method can `?` across member, item and order calls.

use crate::category_actor::CategoryError;
use crate::item_actor::ItemError;
use crate::member_actor::MemberError;
use crate::model::{ItemId, OrderId};
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error("Insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        requested: u32,
        available: u32,
    },

    #[error("Invalid state for {order}: {reason}")]
    InvalidOrderState { order: OrderId, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Member name already taken: {0}")]
    DuplicateMember(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    /// A store could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ShopError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ShopError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<MemberError> for ShopError {
    fn from(e: MemberError) -> Self {
        match e {
            MemberError::NotFound(id) => ShopError::not_found("member", id),
            MemberError::Duplicate(name) => ShopError::DuplicateMember(name),
            MemberError::Validation(reason) => ShopError::Invalid(reason),
            MemberError::ActorCommunication(reason) => ShopError::Unavailable(reason),
        }
    }
}

impl From<ItemError> for ShopError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::NotFound(id) => ShopError::not_found("item", id),
            ItemError::InsufficientStock {
                item,
                requested,
                available,
            } => ShopError::InsufficientStock {
                item,
                requested,
                available,
            },
            ItemError::InvalidQuantity { .. }
            | ItemError::StockOverflow { .. }
            | ItemError::Validation(_) => ShopError::Invalid(e.to_string()),
            ItemError::ActorCommunication(reason) => ShopError::Unavailable(reason),
        }
    }
}

impl From<OrderError> for ShopError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => ShopError::not_found("order", id),
            OrderError::MemberNotFound(id) => ShopError::not_found("member", id),
            OrderError::Member(e) => e.into(),
            OrderError::Item(e) => e.into(),
            OrderError::EmptyOrder | OrderError::InvalidQuantity { .. } => {
                ShopError::Invalid(e.to_string())
            }
            OrderError::InvalidState { order, status } => ShopError::InvalidOrderState {
                order,
                reason: format!("order is {status}"),
            },
            OrderError::AlreadyDelivered(order) => ShopError::InvalidOrderState {
                order,
                reason: "delivery already completed".to_string(),
            },
            OrderError::Retained(order) => ShopError::InvalidOrderState {
                order,
                reason: "orders are never deleted".to_string(),
            },
            OrderError::ActorCommunication(reason) => ShopError::Unavailable(reason),
        }
    }
}

impl From<CategoryError> for ShopError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(id) => ShopError::not_found("category", id),
            CategoryError::Validation(reason) => ShopError::Invalid(reason),
            CategoryError::ActorCommunication(reason) => ShopError::Unavailable(reason),
        }
    }
}
