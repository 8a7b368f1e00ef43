//! # Item Client
//!
//! High-level API for the Item store. Stock movements are exposed as plain methods
//! returning the number the caller cares about.
use crate::item_actor::{ItemAction, ItemActionResult, ItemError};
use crate::model::{ItemCreate, ItemId, ItemUpdate, StockItem};
use crate::store::{EntityClient, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Item store.
#[derive(Clone)]
pub struct ItemClient {
    inner: StoreClient<StockItem>,
}

impl ItemClient {
    pub fn new(inner: StoreClient<StockItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<ItemId, ItemError> {
        debug!("Sending request");
        self.inner.save(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: ItemId,
        update: ItemUpdate,
    ) -> Result<StockItem, ItemError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(|e| Self::map_id_error(id, e))
    }

    /// Current stock level of an item.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, ItemError> {
        debug!("Checking stock for {}", id);
        match self.inner.perform_action(id, ItemAction::CheckStock).await {
            Ok(ItemActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(Self::map_id_error(id, e)),
        }
    }

    /// Returns `quantity` units to stock. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn add_stock(&self, id: ItemId, quantity: u32) -> Result<u32, ItemError> {
        debug!("Adding {} units to {}", quantity, id);
        match self
            .inner
            .perform_action(id, ItemAction::AddStock(quantity))
            .await
        {
            Ok(ItemActionResult::AddStock { remaining }) => Ok(remaining),
            Ok(_) => unreachable!("AddStock action must return AddStock result"),
            Err(e) => Err(Self::map_id_error(id, e)),
        }
    }

    /// Takes `quantity` units out of stock.
    ///
    /// Returns the unit price at the moment of removal, or
    /// [`ItemError::InsufficientStock`] with the stock left untouched.
    #[instrument(skip(self))]
    pub async fn remove_stock(&self, id: ItemId, quantity: u32) -> Result<u32, ItemError> {
        debug!("Removing {} units from {}", quantity, id);
        match self
            .inner
            .perform_action(id, ItemAction::RemoveStock(quantity))
            .await
        {
            Ok(ItemActionResult::RemoveStock {
                unit_price,
                remaining,
            }) => {
                debug!(remaining, "Stock removed");
                Ok(unit_price)
            }
            Ok(_) => unreachable!("RemoveStock action must return RemoveStock result"),
            Err(e) => Err(Self::map_id_error(id, e)),
        }
    }
}

#[async_trait]
impl EntityClient<StockItem> for ItemClient {
    type Error = ItemError;

    fn inner(&self) -> &StoreClient<StockItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.downcast::<ItemError>()
            .unwrap_or_else(|e| ItemError::ActorCommunication(e.to_string()))
    }

    fn not_found(id: ItemId) -> Self::Error {
        ItemError::NotFound(id)
    }
}
