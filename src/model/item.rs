//! Represents a sellable item in the catalog.
//!
//! Books, albums and movies share one struct; the [`ItemKind`] tag carries the
//! per-kind attributes.
//!
//! # Stock guard
//! `stock_quantity` never goes below zero: [`StockItem::remove_stock`] refuses a removal
//! larger than the current stock and leaves the item untouched.
use crate::item_actor::ItemError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for StockItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Kind-specific attributes of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dtype")]
pub enum ItemKind {
    #[serde(rename = "B")]
    Book { author: String, isbn: String },
    #[serde(rename = "A")]
    Album { artist: String, etc: String },
    #[serde(rename = "M")]
    Movie { director: String, actor: String },
}

impl ItemKind {
    /// Single-letter discriminator: `B`, `A` or `M`.
    pub fn discriminator(&self) -> &'static str {
        match self {
            ItemKind::Book { .. } => "B",
            ItemKind::Album { .. } => "A",
            ItemKind::Movie { .. } => "M",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub id: ItemId,
    pub name: String,
    pub price: u32,
    pub stock_quantity: u32,
    pub kind: ItemKind,
}

impl StockItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: u32,
        stock_quantity: u32,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock_quantity,
            kind,
        }
    }

    /// Puts `quantity` units back on the shelf.
    pub fn add_stock(&mut self, quantity: u32) -> Result<(), ItemError> {
        self.check_quantity(quantity)?;
        self.stock_quantity = self
            .stock_quantity
            .checked_add(quantity)
            .ok_or(ItemError::StockOverflow {
                item: self.id,
                quantity,
            })?;
        Ok(())
    }

    /// Takes `quantity` units off the shelf, or fails without changing anything.
    pub fn remove_stock(&mut self, quantity: u32) -> Result<(), ItemError> {
        self.check_quantity(quantity)?;
        self.stock_quantity =
            self.stock_quantity
                .checked_sub(quantity)
                .ok_or(ItemError::InsufficientStock {
                    item: self.id,
                    requested: quantity,
                    available: self.stock_quantity,
                })?;
        Ok(())
    }

    fn check_quantity(&self, quantity: u32) -> Result<(), ItemError> {
        if quantity == 0 {
            return Err(ItemError::InvalidQuantity {
                item: self.id,
                quantity,
            });
        }
        Ok(())
    }
}

/// Payload for registering an item.
#[derive(Debug, Clone)]
pub struct ItemCreate {
    pub name: String,
    pub price: u32,
    pub stock_quantity: u32,
    pub kind: ItemKind,
}

impl ItemCreate {
    pub fn book(
        name: impl Into<String>,
        price: u32,
        stock_quantity: u32,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            stock_quantity,
            kind: ItemKind::Book {
                author: author.into(),
                isbn: isbn.into(),
            },
        }
    }
}

/// Payload for editing an item; `None` fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub price: Option<u32>,
    pub stock_quantity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(stock: u32) -> StockItem {
        StockItem::new(
            ItemId(1),
            "Rust in Action",
            10_000,
            stock,
            ItemKind::Book {
                author: "McNamara".into(),
                isbn: "9781617294556".into(),
            },
        )
    }

    #[test]
    fn remove_then_add_restores_stock() {
        for (stock, quantity) in [(10, 1), (10, 10), (3, 2)] {
            let mut item = book(stock);
            item.remove_stock(quantity).unwrap();
            assert_eq!(item.stock_quantity, stock - quantity);
            item.add_stock(quantity).unwrap();
            assert_eq!(item.stock_quantity, stock);
        }
    }

    #[test]
    fn removing_more_than_stock_changes_nothing() {
        let mut item = book(10);
        let err = item.remove_stock(11).unwrap_err();
        assert_eq!(
            err,
            ItemError::InsufficientStock {
                item: ItemId(1),
                requested: 11,
                available: 10,
            }
        );
        assert_eq!(item.stock_quantity, 10);
    }

    #[test]
    fn zero_quantities_are_rejected() {
        let mut item = book(5);
        assert!(matches!(
            item.add_stock(0),
            Err(ItemError::InvalidQuantity { quantity: 0, .. })
        ));
        assert!(matches!(
            item.remove_stock(0),
            Err(ItemError::InvalidQuantity { quantity: 0, .. })
        ));
        assert_eq!(item.stock_quantity, 5);
    }

    #[test]
    fn add_stock_refuses_to_wrap() {
        let mut item = book(u32::MAX);
        assert!(matches!(
            item.add_stock(1),
            Err(ItemError::StockOverflow { .. })
        ));
        assert_eq!(item.stock_quantity, u32::MAX);
    }

    #[test]
    fn discriminators_follow_the_kind() {
        assert_eq!(book(1).kind.discriminator(), "B");
        let movie = ItemKind::Movie {
            director: "Bong".into(),
            actor: "Song".into(),
        };
        assert_eq!(movie.discriminator(), "M");
    }
}
