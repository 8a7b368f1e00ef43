//! # Order Service
//!
//! Entry point for placing, cancelling and searching orders. The stock work itself runs
//! inside the order store; this layer checks that the member and items exist and
//! resolves member names for searches.

use crate::clients::{ItemClient, MemberClient, OrderClient};
use crate::error::ShopError;
use crate::model::{ItemId, LineRequest, MemberId, Order, OrderCreate, OrderId, OrderSearch};
use crate::store::{EntityClient, Filter};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct OrderService {
    members: MemberClient,
    items: ItemClient,
    orders: OrderClient,
}

impl OrderService {
    pub fn new(members: MemberClient, items: ItemClient, orders: OrderClient) -> Self {
        Self {
            members,
            items,
            orders,
        }
    }

    /// Orders `count` units of one item.
    ///
    /// # Errors
    /// - `NotFound` when the member or the item does not exist
    /// - `InsufficientStock` when `count` exceeds the stock; nothing changes
    #[instrument(skip(self))]
    pub async fn order(
        &self,
        member_id: MemberId,
        item_id: ItemId,
        count: u32,
    ) -> Result<OrderId, ShopError> {
        if self.members.find_by_id(member_id).await?.is_none() {
            return Err(ShopError::not_found("member", member_id));
        }
        if self.items.find_by_id(item_id).await?.is_none() {
            return Err(ShopError::not_found("item", item_id));
        }
        self.order_lines(member_id, vec![LineRequest::new(item_id, count)])
            .await
    }

    /// Places a multi-line order. Either every line's stock is taken or none is.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn order_lines(
        &self,
        member_id: MemberId,
        lines: Vec<LineRequest>,
    ) -> Result<OrderId, ShopError> {
        let id = self
            .orders
            .place_order(OrderCreate { member_id, lines })
            .await?;
        info!(%id, "Order placed");
        Ok(id)
    }

    /// Cancels an order, putting its stock back.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, ShopError> {
        let order = self.orders.cancel_order(id).await?;
        info!(%id, "Order cancelled");
        Ok(order)
    }

    pub async fn complete_delivery(&self, id: OrderId) -> Result<Order, ShopError> {
        Ok(self.orders.complete_delivery(id).await?)
    }

    pub async fn find_order(&self, id: OrderId) -> Result<Order, ShopError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| ShopError::not_found("order", id))
    }

    /// Orders matching `search`, in id order.
    #[instrument(skip(self))]
    pub async fn find_orders(&self, search: OrderSearch) -> Result<Vec<Order>, ShopError> {
        let Some(name) = search.member_name.clone() else {
            return Ok(self.orders.find_orders(search).await?);
        };

        let member_ids: Vec<MemberId> = self
            .members
            .find_by_name(&name)
            .await?
            .into_iter()
            .map(|member| member.id)
            .collect();
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let filter = Filter::new(move |order: &Order| {
            search.matches(order) && member_ids.contains(&order.member_id)
        });
        Ok(self.orders.find_matching(filter).await?)
    }
}
