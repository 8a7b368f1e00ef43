//! Error types for the Order store.

use crate::item_actor::ItemError;
use crate::member_actor::MemberError;
use crate::model::{ItemId, MemberId, OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An order needs at least one line.
    #[error("Order has no lines")]
    EmptyOrder,

    /// A line asked for zero units.
    #[error("Invalid quantity for {item}: {quantity}")]
    InvalidQuantity { item: ItemId, quantity: u32 },

    /// The member placing the order does not exist.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// The member store failed.
    #[error(transparent)]
    Member(#[from] MemberError),

    /// The item store refused a stock change (missing item, insufficient stock, ...).
    #[error(transparent)]
    Item(#[from] ItemError),

    /// The order's status does not allow the operation.
    #[error("Order {order} is {status}")]
    InvalidState { order: OrderId, status: OrderStatus },

    /// The delivery already completed.
    #[error("Order {0} has already been delivered")]
    AlreadyDelivered(OrderId),

    /// Orders are kept for history and cannot be deleted.
    #[error("Order {0} cannot be deleted")]
    Retained(OrderId),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
