//! Custom actions for the Item store.
//!
//! Stock only changes through these actions, so every change passes through
//! [`StockItem::add_stock`](crate::model::StockItem::add_stock) or
//! [`StockItem::remove_stock`](crate::model::StockItem::remove_stock).

/// Stock operations on a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Reads the current stock level.
    CheckStock,
    /// Returns units to stock (order cancelled, rollback).
    AddStock(u32),
    /// Takes units out of stock.
    ///
    /// # Errors
    /// `InsufficientStock` when the quantity exceeds what is left.
    RemoveStock(u32),
}

/// Results from ItemActions - variants match 1:1 with ItemAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemActionResult {
    CheckStock(u32),
    AddStock { remaining: u32 },
    /// `unit_price` is the price at the instant of removal; orders record it per line.
    RemoveStock { unit_price: u32, remaining: u32 },
}
