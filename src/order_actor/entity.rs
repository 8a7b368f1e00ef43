//! [`Entity`] implementation for [`Order`].
//!
//! Placing an order is a save: [`Entity::on_create`] looks up the member, copies its
//! address into the delivery and removes stock line by line. If any line fails, the
//! lines already taken are put back and the order is never stored.
//!
//! Cancelling runs the same choreography in reverse through [`OrderAction::Cancel`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use super::transaction::StockTransaction;
use crate::clients::{ItemClient, MemberClient};
use crate::model::{
    Address, Delivery, DeliveryStatus, Order, OrderCreate, OrderId, OrderLine, OrderStatus,
};
use crate::store::{Entity, EntityClient};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::info;

#[async_trait]
impl Entity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = (MemberClient, ItemClient);
    type Error = OrderError;

    /// Checks the shape of the request. Prices and the delivery address are filled in by
    /// [`Entity::on_create`].
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        let lines = params
            .lines
            .into_iter()
            .map(|line| {
                if line.count == 0 {
                    return Err(OrderError::InvalidQuantity {
                        item: line.item_id,
                        quantity: 0,
                    });
                }
                Ok(OrderLine {
                    item_id: line.item_id,
                    order_price: 0,
                    count: line.count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            member_id: params.member_id,
            lines,
            delivery: Delivery::ready(Address::default()),
            status: OrderStatus::Ordered,
            order_date: Utc::now(),
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (members, items) = ctx;

        let member = members
            .find_by_id(self.member_id)
            .await?
            .ok_or(OrderError::MemberNotFound(self.member_id))?;
        self.delivery = Delivery::ready(member.address);

        let mut tx = StockTransaction::new(items);
        for line in &mut self.lines {
            match tx.remove(line.item_id, line.count).await {
                Ok(unit_price) => line.order_price = unit_price,
                Err(e) => {
                    tx.rollback().await;
                    return Err(e.into());
                }
            }
        }
        tx.commit();

        info!(
            order = %self.id,
            total = self.total_price(),
            lines = self.lines.len(),
            "Order placed"
        );
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), OrderError> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), OrderError> {
        Err(OrderError::Retained(self.id))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Cancel => {
                self.ensure_cancellable()?;

                let (_, items) = ctx;
                let mut tx = StockTransaction::new(items);
                for (item, count) in self.stock_to_restore() {
                    if let Err(e) = tx.add(item, count).await {
                        tx.rollback().await;
                        return Err(e.into());
                    }
                }
                tx.commit();

                self.status = OrderStatus::Cancelled;
                info!(order = %self.id, "Order cancelled");
                Ok(OrderActionResult::Cancel(self.clone()))
            }
            OrderAction::CompleteDelivery => {
                if self.status != OrderStatus::Ordered {
                    return Err(OrderError::InvalidState {
                        order: self.id,
                        status: self.status,
                    });
                }
                if self.delivery.status == DeliveryStatus::Completed {
                    return Err(OrderError::AlreadyDelivered(self.id));
                }
                self.delivery.status = DeliveryStatus::Completed;
                info!(order = %self.id, "Delivery completed");
                Ok(OrderActionResult::CompleteDelivery(self.clone()))
            }
        }
    }
}
