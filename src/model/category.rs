//! Catalog categories: a tree of named nodes, each holding a set of item ids.

use crate::model::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

/// A catalog node. Children point at their parent; items are referenced by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub parent: Option<CategoryId>,
    pub items: BTreeSet<ItemId>,
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub parent: Option<CategoryId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}
