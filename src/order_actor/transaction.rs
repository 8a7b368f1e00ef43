//! Compensating journal for multi-item stock changes.
//!
//! The item store changes one item per request, so an order touching several items
//! cannot lock them all. Instead every successful change is journaled and
//! [`StockTransaction::rollback`] applies the inverse changes in reverse order.

use crate::clients::ItemClient;
use crate::item_actor::ItemError;
use crate::model::ItemId;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StockMove {
    Removed(ItemId, u32),
    Added(ItemId, u32),
}

/// Records stock changes made through an [`ItemClient`] so they can be undone.
///
/// Drop it through [`StockTransaction::commit`] or [`StockTransaction::rollback`].
pub struct StockTransaction<'a> {
    items: &'a ItemClient,
    journal: Vec<StockMove>,
}

impl<'a> StockTransaction<'a> {
    pub fn new(items: &'a ItemClient) -> Self {
        Self {
            items,
            journal: Vec::new(),
        }
    }

    /// Removes stock and returns the unit price at removal.
    pub async fn remove(&mut self, item: ItemId, quantity: u32) -> Result<u32, ItemError> {
        let unit_price = self.items.remove_stock(item, quantity).await?;
        self.journal.push(StockMove::Removed(item, quantity));
        Ok(unit_price)
    }

    /// Adds stock and returns the new level.
    pub async fn add(&mut self, item: ItemId, quantity: u32) -> Result<u32, ItemError> {
        let remaining = self.items.add_stock(item, quantity).await?;
        self.journal.push(StockMove::Added(item, quantity));
        Ok(remaining)
    }

    /// Keeps every change. Returns how many were made.
    pub fn commit(self) -> usize {
        debug!(changes = self.journal.len(), "Stock transaction committed");
        self.journal.len()
    }

    /// Undoes every journaled change, newest first.
    ///
    /// A compensation that fails is logged and skipped; the rest still run.
    pub async fn rollback(self) {
        warn!(changes = self.journal.len(), "Rolling back stock changes");
        for change in self.journal.into_iter().rev() {
            let result = match change {
                StockMove::Removed(item, quantity) => self.items.add_stock(item, quantity).await,
                StockMove::Added(item, quantity) => self.items.remove_stock(item, quantity).await,
            };
            if let Err(e) = result {
                error!(?change, error = %e, "Compensation failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_actor::ItemActionResult;
    use crate::model::StockItem;
    use crate::store::mock::MockClient;

    #[tokio::test]
    async fn rollback_reverses_changes_newest_first() {
        let mut mock = MockClient::<StockItem>::new();
        mock.expect_action(ItemId(1))
            .return_ok(ItemActionResult::RemoveStock {
                unit_price: 100,
                remaining: 0,
            });
        mock.expect_action(ItemId(2))
            .return_ok(ItemActionResult::RemoveStock {
                unit_price: 200,
                remaining: 0,
            });
        mock.expect_action(ItemId(2))
            .return_ok(ItemActionResult::AddStock { remaining: 1 });
        mock.expect_action(ItemId(1))
            .return_ok(ItemActionResult::AddStock { remaining: 1 });

        let items = ItemClient::new(mock.client());
        let mut tx = StockTransaction::new(&items);
        assert_eq!(tx.remove(ItemId(1), 1).await.unwrap(), 100);
        assert_eq!(tx.remove(ItemId(2), 1).await.unwrap(), 200);
        tx.rollback().await;

        mock.verify();
    }

    #[tokio::test]
    async fn failed_changes_are_not_journaled() {
        let mut mock = MockClient::<StockItem>::new();
        mock.expect_action(ItemId(1))
            .return_err(crate::store::StoreError::NotFound("item_1".to_string()));

        let items = ItemClient::new(mock.client());
        let mut tx = StockTransaction::new(&items);
        assert_eq!(
            tx.remove(ItemId(1), 1).await,
            Err(ItemError::NotFound(ItemId(1)))
        );
        assert_eq!(tx.commit(), 0);

        mock.verify();
    }
}
