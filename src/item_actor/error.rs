//! Error types for the Item store.

use crate::model::ItemId;
use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        requested: u32,
        available: u32,
    },

    /// Stock changes must move at least one unit.
    #[error("Invalid quantity for {item}: {quantity}")]
    InvalidQuantity { item: ItemId, quantity: u32 },

    /// Adding stock would exceed the counter's range.
    #[error("Stock overflow for {item}: cannot add {quantity}")]
    StockOverflow { item: ItemId, quantity: u32 },

    /// The item data provided is invalid.
    #[error("Item validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
