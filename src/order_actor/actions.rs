//! Custom actions for the Order store.

use crate::model::Order;

/// State transitions of a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Restores every line's stock and marks the order `Cancelled`.
    Cancel,
    /// Marks the delivery `Completed`; the order can no longer be cancelled.
    CompleteDelivery,
}

/// Results from OrderActions - each carries the order as committed.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    Cancel(Order),
    CompleteDelivery(Order),
}
