//! Demo: one member, two books, an order that succeeds, one that is refused, and a
//! cancellation that puts the stock back.

use shop_actors::config::ShopConfig;
use shop_actors::lifecycle::{setup_tracing, ShopSystem};
use shop_actors::model::{Address, ItemCreate, LineRequest};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::load()?;
    setup_tracing(&config);

    info!("Starting shop");
    let system = ShopSystem::new(&config);
    let members = system.member_service();
    let items = system.item_service();
    let orders = system.order_service();

    let member_id = members
        .join("kim", Address::new("Seoul", "Eunpyeong", "123-123"))
        .instrument(tracing::info_span!("member_join"))
        .await?;

    let jpa = items
        .save_item(ItemCreate::book("JPA1 BOOK", 10_000, 100, "Kim", "isbn-1"))
        .await?;
    let spring = items
        .save_item(ItemCreate::book("SPRING1 BOOK", 20_000, 200, "Lee", "isbn-2"))
        .await?;
    let books = items.create_category("books", None).await?;
    items.categorize(jpa, books).await?;
    items.categorize(spring, books).await?;

    let span = tracing::info_span!("order_processing");
    let order_id = orders
        .order_lines(
            member_id,
            vec![LineRequest::new(jpa, 1), LineRequest::new(spring, 2)],
        )
        .instrument(span)
        .await?;
    let order = orders.find_order(order_id).await?;
    info!(%order_id, total = order.total_price(), "Order processed successfully");

    match orders.order(member_id, jpa, 1_000).await {
        Ok(id) => info!(%id, "Unexpectedly placed"),
        Err(e) => error!(error = %e, "Order refused"),
    }

    let cancelled = orders
        .cancel_order(order_id)
        .instrument(tracing::info_span!("order_cancel"))
        .await?;
    info!(status = %cancelled.status, "Order cancelled");
    for item in items.find_items().await? {
        info!(id = %item.id, stock = item.stock_quantity, "Stock after cancel");
    }

    drop((members, items, orders));
    system.shutdown().await?;

    info!("Shop completed successfully");
    Ok(())
}
