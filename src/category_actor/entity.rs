use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate, ItemId};
use crate::store::Entity;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Membership changes on a category's item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryAction {
    AddItem(ItemId),
    RemoveItem(ItemId),
}

fn validate_name(name: &str) -> Result<(), CategoryError> {
    if name.trim().is_empty() {
        return Err(CategoryError::Validation("name must not be blank".to_string()));
    }
    Ok(())
}

#[async_trait]
impl Entity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    /// Whether the item set changed.
    type ActionResult = bool;
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        validate_name(&params.name)?;
        Ok(Self {
            id,
            name: params.name,
            parent: params.parent,
            items: BTreeSet::new(),
        })
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), CategoryError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &Self::Context,
    ) -> Result<bool, CategoryError> {
        Ok(match action {
            CategoryAction::AddItem(item) => self.items.insert(item),
            CategoryAction::RemoveItem(item) => self.items.remove(&item),
        })
    }
}
