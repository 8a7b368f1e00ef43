//! Catalog service. Items and categories live in separate stores; this layer checks that
//! both sides of a filing exist.

use crate::clients::{CategoryClient, ItemClient};
use crate::error::ShopError;
use crate::model::{
    Category, CategoryCreate, CategoryId, ItemCreate, ItemId, ItemUpdate, StockItem,
};
use crate::store::EntityClient;
use tracing::{info, instrument};

/// Catalog management: items and the categories they are filed under.
#[derive(Clone)]
pub struct ItemService {
    items: ItemClient,
    categories: CategoryClient,
}

impl ItemService {
    pub fn new(items: ItemClient, categories: CategoryClient) -> Self {
        Self { items, categories }
    }

    #[instrument(skip(self))]
    pub async fn save_item(&self, params: ItemCreate) -> Result<ItemId, ShopError> {
        let id = self.items.create_item(params).await?;
        info!(%id, "Item registered");
        Ok(id)
    }

    pub async fn update_item(
        &self,
        id: ItemId,
        update: ItemUpdate,
    ) -> Result<StockItem, ShopError> {
        Ok(self.items.update_item(id, update).await?)
    }

    pub async fn find_items(&self) -> Result<Vec<StockItem>, ShopError> {
        Ok(self.items.find_all().await?)
    }

    pub async fn find_one(&self, id: ItemId) -> Result<StockItem, ShopError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| ShopError::not_found("item", id))
    }

    /// Creates a category, optionally under an existing parent.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        name: &str,
        parent: Option<CategoryId>,
    ) -> Result<CategoryId, ShopError> {
        if let Some(parent) = parent {
            if self.categories.find_by_id(parent).await?.is_none() {
                return Err(ShopError::not_found("category", parent));
            }
        }
        let params = CategoryCreate {
            name: name.to_string(),
            parent,
        };
        Ok(self.categories.create_category(params).await?)
    }

    /// Files an item under a category. Filing it twice is harmless.
    #[instrument(skip(self))]
    pub async fn categorize(&self, item: ItemId, category: CategoryId) -> Result<(), ShopError> {
        self.find_one(item).await?;
        self.categories.add_item(category, item).await?;
        Ok(())
    }

    /// Takes an item out of a category. Returns `false` when it was not filed there.
    #[instrument(skip(self))]
    pub async fn uncategorize(
        &self,
        item: ItemId,
        category: CategoryId,
    ) -> Result<bool, ShopError> {
        Ok(self.categories.remove_item(category, item).await?)
    }

    pub async fn categories_of(&self, item: ItemId) -> Result<Vec<Category>, ShopError> {
        Ok(self.categories.categories_of(item).await?)
    }
}
