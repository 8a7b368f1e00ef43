use crate::category_actor::{CategoryAction, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryId, ItemId};
use crate::store::{EntityClient, Filter, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category store.
#[derive(Clone)]
pub struct CategoryClient {
    inner: StoreClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: StoreClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        params: CategoryCreate,
    ) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.save(params).await.map_err(Self::map_error)
    }

    /// Returns `false` when the item was already in the category.
    #[instrument(skip(self))]
    pub async fn add_item(&self, id: CategoryId, item: ItemId) -> Result<bool, CategoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CategoryAction::AddItem(item))
            .await
            .map_err(|e| Self::map_id_error(id, e))
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CategoryId, item: ItemId) -> Result<bool, CategoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CategoryAction::RemoveItem(item))
            .await
            .map_err(|e| Self::map_id_error(id, e))
    }

    /// Categories containing `item`, in id order.
    #[instrument(skip(self))]
    pub async fn categories_of(&self, item: ItemId) -> Result<Vec<Category>, CategoryError> {
        debug!("Sending request");
        self.inner
            .find(Filter::new(move |category: &Category| {
                category.items.contains(&item)
            }))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &StoreClient<Category> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.downcast::<CategoryError>()
            .unwrap_or_else(|e| CategoryError::ActorCommunication(e.to_string()))
    }

    fn not_found(id: CategoryId) -> Self::Error {
        CategoryError::NotFound(id)
    }
}
