//! Represents a customer order.
//!
//! # Lifecycle
//! An order is stored `Ordered` once every line's stock has been removed, moves to
//! `Cancelled` at most once, and is never deleted. See the order store's
//! [`Entity`](crate::store::Entity) implementation for the stock choreography.
use crate::model::{Address, ItemId, MemberId};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Ordered,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Ordered => f.write_str("ORDERED"),
            OrderStatus::Cancelled => f.write_str("CANCELLED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Ready,
    Completed,
}

/// Shipping record owned by its order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub address: Address,
    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn ready(address: Address) -> Self {
        Self {
            address,
            status: DeliveryStatus::Ready,
        }
    }
}

/// One (item, price, count) entry of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    /// Unit price at the moment the stock was removed.
    pub order_price: u32,
    pub count: u32,
}

impl OrderLine {
    pub fn total_price(&self) -> u64 {
        u64::from(self.order_price) * u64::from(self.count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub member_id: MemberId,
    pub lines: Vec<OrderLine>,
    pub delivery: Delivery,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Sum of every line's `order_price * count`.
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(OrderLine::total_price).sum()
    }

    /// Checks the order may still be cancelled.
    pub fn ensure_cancellable(&self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Ordered {
            return Err(OrderError::InvalidState {
                order: self.id,
                status: self.status,
            });
        }
        if self.delivery.status == DeliveryStatus::Completed {
            return Err(OrderError::AlreadyDelivered(self.id));
        }
        Ok(())
    }

    /// Quantity to hand back to each item, one entry per line.
    pub fn stock_to_restore(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.lines.iter().map(|line| (line.item_id, line.count))
    }
}

/// Requested (item, count) pair; the price is filled in when stock is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    pub item_id: ItemId,
    pub count: u32,
}

impl LineRequest {
    pub fn new(item_id: ItemId, count: u32) -> Self {
        Self { item_id, count }
    }
}

/// Payload for placing an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub member_id: MemberId,
    pub lines: Vec<LineRequest>,
}

/// Filter for order lookups. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSearch {
    pub member_id: Option<MemberId>,
    /// Resolved to member ids through the member store before querying orders.
    pub member_name: Option<String>,
    pub status: Option<OrderStatus>,
}

impl OrderSearch {
    pub fn by_member(member_id: MemberId) -> Self {
        Self {
            member_id: Some(member_id),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Checks the id and status criteria. `member_name` is handled by the caller.
    pub fn matches(&self, order: &Order) -> bool {
        self.member_id.map_or(true, |id| order.member_id == id)
            && self.status.map_or(true, |status| order.status == status)
    }
}
