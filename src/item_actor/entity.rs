//! [`Entity`] implementation for [`StockItem`].
//!
//! Stock movements are custom actions; see [`ItemAction`].

use super::actions::{ItemAction, ItemActionResult};
use super::error::ItemError;
use crate::model::{ItemCreate, ItemId, ItemUpdate, StockItem};
use crate::store::Entity;
use async_trait::async_trait;

#[async_trait]
impl Entity for StockItem {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = ItemAction;
    type ActionResult = ItemActionResult;
    type Context = ();
    type Error = ItemError;

    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, ItemError> {
        if params.name.trim().is_empty() {
            return Err(ItemError::Validation("name must not be blank".to_string()));
        }
        Ok(Self::new(
            id,
            params.name,
            params.price,
            params.stock_quantity,
            params.kind,
        ))
    }

    /// # Fields Updated
    /// - `name`
    /// - `price`: affects future orders only; placed orders keep their line price
    /// - `stock_quantity`: overwrites the count (catalog correction)
    async fn on_update(
        &mut self,
        update: ItemUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), ItemError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ItemError::Validation("name must not be blank".to_string()));
            }
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock_quantity) = update.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ItemAction,
        _ctx: &Self::Context,
    ) -> Result<ItemActionResult, ItemError> {
        match action {
            ItemAction::CheckStock => Ok(ItemActionResult::CheckStock(self.stock_quantity)),
            ItemAction::AddStock(quantity) => {
                self.add_stock(quantity)?;
                Ok(ItemActionResult::AddStock {
                    remaining: self.stock_quantity,
                })
            }
            ItemAction::RemoveStock(quantity) => {
                self.remove_stock(quantity)?;
                Ok(ItemActionResult::RemoveStock {
                    unit_price: self.price,
                    remaining: self.stock_quantity,
                })
            }
        }
    }
}
