use crate::clients::{CategoryClient, ItemClient, MemberClient, OrderClient};
use crate::config::ShopConfig;
use crate::service::{ItemService, MemberService, OrderService};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Runs every store actor of the shop and hands out clients and services.
///
/// The order store depends on the member and item stores; its context is wired here.
///
/// ```rust,ignore
/// let system = ShopSystem::new(&ShopConfig::load()?);
/// let orders = system.order_service();
/// let id = orders.order(member_id, item_id, 2).await?;
/// drop(orders);
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub member_client: MemberClient,
    pub item_client: ItemClient,
    pub category_client: CategoryClient,
    pub order_client: OrderClient,
    /// Dependents first, so shutdown joins the order store before the stores it holds.
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns all stores. Must be called inside a tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let capacity = config.mailbox_capacity;

        let (member_actor, member_client) = crate::member_actor::new(capacity);
        let (item_actor, item_client) = crate::item_actor::new(capacity);
        let (category_actor, category_client) = crate::category_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        let member_handle = tokio::spawn(member_actor.run(()));
        let item_handle = tokio::spawn(item_actor.run(()));
        let category_handle = tokio::spawn(category_actor.run(()));
        let order_handle =
            tokio::spawn(order_actor.run((member_client.clone(), item_client.clone())));

        info!(capacity, "Shop system started");
        Self {
            member_client,
            item_client,
            category_client,
            order_client,
            handles: vec![order_handle, category_handle, item_handle, member_handle],
        }
    }

    pub fn member_service(&self) -> MemberService {
        MemberService::new(self.member_client.clone())
    }

    pub fn item_service(&self) -> ItemService {
        ItemService::new(self.item_client.clone(), self.category_client.clone())
    }

    pub fn order_service(&self) -> OrderService {
        OrderService::new(
            self.member_client.clone(),
            self.item_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Closes every store and waits for its task to finish.
    ///
    /// A store only stops once all of its clients are gone, so services and client
    /// clones handed out earlier must be dropped before calling this.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down shop system...");

        drop(self.order_client);
        drop(self.category_client);
        drop(self.item_client);
        drop(self.member_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("Shop system shutdown complete.");
        Ok(())
    }
}
