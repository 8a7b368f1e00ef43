use crate::model::{Order, OrderCreate, OrderId, OrderSearch};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::store::{EntityClient, Filter, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
///
/// Orchestration (member lookup, stock removal and rollback) happens in the order
/// store's `on_create` hook and `Cancel` action, not here.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(
        skip(self, params),
        fields(member = %params.member_id, lines = params.lines.len())
    )]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        let id = self.inner.save(params).await.map_err(Self::map_error)?;
        info!(%id, "Order stored");
        Ok(id)
    }

    /// Cancels an order and returns it as stored afterwards.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Cancel).await {
            Ok(OrderActionResult::Cancel(order)) => Ok(order),
            Ok(_) => unreachable!("Cancel action must return Cancel result"),
            Err(e) => Err(Self::map_id_error(id, e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete_delivery(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::CompleteDelivery)
            .await
        {
            Ok(OrderActionResult::CompleteDelivery(order)) => Ok(order),
            Ok(_) => unreachable!("CompleteDelivery action must return CompleteDelivery result"),
            Err(e) => Err(Self::map_id_error(id, e)),
        }
    }

    /// Orders matching the member id and status of `search`.
    ///
    /// `search.member_name` is not looked at here; the order store knows nothing about
    /// names. [`OrderService::find_orders`](crate::service::OrderService::find_orders)
    /// resolves it.
    #[instrument(skip(self))]
    pub async fn find_orders(&self, search: OrderSearch) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.find_matching(Filter::new(move |order: &Order| search.matches(order)))
            .await
    }

    pub async fn find_matching(&self, filter: Filter<Order>) -> Result<Vec<Order>, OrderError> {
        self.inner.find(filter).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.downcast::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunication(e.to_string()))
    }

    fn not_found(id: OrderId) -> Self::Error {
        OrderError::NotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, LineRequest, MemberId, OrderStatus};
    use crate::store::mock::{create_mock_client, expect_action, expect_save};

    #[tokio::test]
    async fn place_order_forwards_every_line() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .place_order(OrderCreate {
                    member_id: MemberId(1),
                    lines: vec![LineRequest::new(ItemId(1), 2), LineRequest::new(ItemId(2), 1)],
                })
                .await
        });

        let (params, responder) = expect_save(&mut receiver).await.unwrap();
        assert_eq!(params.member_id, MemberId(1));
        assert_eq!(params.lines.len(), 2);
        responder.send(Ok(OrderId(1))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), OrderId(1));
    }

    #[tokio::test]
    async fn cancel_errors_come_back_typed() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.cancel_order(OrderId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(3));
        assert_eq!(action, OrderAction::Cancel);
        responder
            .send(Err(StoreError::Entity(Box::new(OrderError::InvalidState {
                order: OrderId(3),
                status: OrderStatus::Cancelled,
            }))))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::InvalidState {
                order: OrderId(3),
                status: OrderStatus::Cancelled,
            })
        );
    }
}
