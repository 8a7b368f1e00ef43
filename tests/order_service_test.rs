use shop_actors::config::ShopConfig;
use shop_actors::error::ShopError;
use shop_actors::lifecycle::ShopSystem;
use shop_actors::model::{
    Address, DeliveryStatus, ItemCreate, ItemId, ItemKind, ItemUpdate, LineRequest, MemberId,
    OrderSearch, OrderStatus,
};
use shop_actors::order_actor::OrderError;
use shop_actors::service::{ItemService, MemberService, OrderService};
use shop_actors::store::EntityClient;

struct Shop {
    system: ShopSystem,
    members: MemberService,
    items: ItemService,
    orders: OrderService,
}

impl Shop {
    fn start() -> Self {
        let system = ShopSystem::new(&ShopConfig::default());
        Self {
            members: system.member_service(),
            items: system.item_service(),
            orders: system.order_service(),
            system,
        }
    }

    async fn member(&self, name: &str) -> MemberId {
        self.members
            .join(name, Address::new("Seoul", "Eunpyeong", "123-123"))
            .await
            .unwrap()
    }

    async fn book(&self, name: &str, price: u32, stock: u32) -> ItemId {
        self.items
            .save_item(ItemCreate::book(name, price, stock, "Kim", "isbn"))
            .await
            .unwrap()
    }

    async fn stock(&self, item: ItemId) -> u32 {
        self.system.item_client.check_stock(item).await.unwrap()
    }
}

#[tokio::test]
async fn ordering_decrements_stock_and_records_price() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;

    let id = shop.orders.order(member, item, 2).await.unwrap();

    let order = shop.orders.find_order(id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Ordered);
    assert_eq!(order.member_id, member);
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].order_price, 10_000);
    assert_eq!(order.total_price(), 10_000 * 2);
    assert_eq!(order.delivery.status, DeliveryStatus::Ready);
    assert_eq!(order.delivery.address.zipcode, "123-123");
    assert_eq!(shop.stock(item).await, 8);
}

#[tokio::test]
async fn cancelling_restores_stock() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;
    let id = shop.orders.order(member, item, 2).await.unwrap();

    let order = shop.orders.cancel_order(id).await.unwrap();

    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(shop.orders.find_order(id).await.unwrap().status, OrderStatus::Cancelled);
    assert_eq!(shop.stock(item).await, 10);
}

#[tokio::test]
async fn ordering_more_than_stock_fails_without_side_effects() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;

    let err = shop.orders.order(member, item, 11).await.unwrap_err();

    assert_eq!(
        err,
        ShopError::InsufficientStock {
            item,
            requested: 11,
            available: 10,
        }
    );
    assert_eq!(shop.stock(item).await, 10);
    assert!(shop
        .orders
        .find_orders(OrderSearch::default())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn the_whole_stock_can_be_ordered() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;

    shop.orders.order(member, item, 10).await.unwrap();
    assert_eq!(shop.stock(item).await, 0);
}

#[tokio::test]
async fn cancelling_twice_fails() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;
    let id = shop.orders.order(member, item, 2).await.unwrap();
    shop.orders.cancel_order(id).await.unwrap();

    let err = shop.orders.cancel_order(id).await.unwrap_err();

    assert!(matches!(err, ShopError::InvalidOrderState { order, .. } if order == id));
    assert_eq!(shop.stock(item).await, 10);
}

#[tokio::test]
async fn multi_line_orders_are_all_or_nothing() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let plenty = shop.book("JPA", 10_000, 10).await;
    let scarce = shop.book("Spring", 20_000, 1).await;

    let lines = vec![LineRequest::new(plenty, 3), LineRequest::new(scarce, 2)];
    let err = shop.orders.order_lines(member, lines).await.unwrap_err();

    assert!(matches!(err, ShopError::InsufficientStock { item, .. } if item == scarce));
    assert_eq!(shop.stock(plenty).await, 10);
    assert_eq!(shop.stock(scarce).await, 1);

    let lines = vec![LineRequest::new(plenty, 3), LineRequest::new(scarce, 1)];
    let id = shop.orders.order_lines(member, lines).await.unwrap();
    assert_eq!(shop.orders.find_order(id).await.unwrap().total_price(), 50_000);
    assert_eq!(shop.stock(plenty).await, 7);
    assert_eq!(shop.stock(scarce).await, 0);
}

#[tokio::test]
async fn duplicate_lines_remove_and_restore_their_sum() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;

    let lines = vec![LineRequest::new(item, 2), LineRequest::new(item, 3)];
    let id = shop.orders.order_lines(member, lines).await.unwrap();
    assert_eq!(shop.stock(item).await, 5);

    shop.orders.cancel_order(id).await.unwrap();
    assert_eq!(shop.stock(item).await, 10);

    // 6 + 5 > 10: the second line fails and the first is put back
    let lines = vec![LineRequest::new(item, 6), LineRequest::new(item, 5)];
    let err = shop.orders.order_lines(member, lines).await.unwrap_err();
    assert_eq!(
        err,
        ShopError::InsufficientStock {
            item,
            requested: 5,
            available: 4,
        }
    );
    assert_eq!(shop.stock(item).await, 10);
}

#[tokio::test]
async fn missing_entities_are_not_found() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;

    assert_eq!(
        shop.orders.order(MemberId(99), item, 1).await.unwrap_err(),
        ShopError::NotFound {
            entity: "member",
            id: "member_99".to_string(),
        }
    );
    assert_eq!(
        shop.orders.order(member, ItemId(99), 1).await.unwrap_err(),
        ShopError::NotFound {
            entity: "item",
            id: "item_99".to_string(),
        }
    );
    assert!(matches!(
        shop.orders.order_lines(member, vec![LineRequest::new(ItemId(99), 1)]).await,
        Err(ShopError::NotFound { entity: "item", .. })
    ));
    assert!(matches!(
        shop.orders.cancel_order(shop_actors::model::OrderId(42)).await,
        Err(ShopError::NotFound { entity: "order", .. })
    ));
    assert_eq!(shop.stock(item).await, 10);
}

#[tokio::test]
async fn malformed_orders_are_invalid() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;

    assert!(matches!(
        shop.orders.order(member, item, 0).await,
        Err(ShopError::Invalid(_))
    ));
    assert!(matches!(
        shop.orders.order_lines(member, vec![]).await,
        Err(ShopError::Invalid(_))
    ));
    assert_eq!(shop.stock(item).await, 10);
}

#[tokio::test]
async fn delivered_orders_cannot_be_cancelled() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;
    let id = shop.orders.order(member, item, 2).await.unwrap();

    let order = shop.orders.complete_delivery(id).await.unwrap();
    assert_eq!(order.delivery.status, DeliveryStatus::Completed);

    let err = shop.orders.cancel_order(id).await.unwrap_err();
    assert!(matches!(err, ShopError::InvalidOrderState { .. }));
    assert_eq!(shop.stock(item).await, 8);
}

#[tokio::test]
async fn orders_are_never_deleted() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;
    let id = shop.orders.order(member, item, 1).await.unwrap();

    let err = shop.system.order_client.delete(id).await.unwrap_err();
    assert_eq!(err, OrderError::Retained(id));
    assert!(shop.orders.find_order(id).await.is_ok());
}

#[tokio::test]
async fn price_changes_do_not_touch_placed_orders() {
    let shop = Shop::start();
    let member = shop.member("kim").await;
    let item = shop.book("JPA", 10_000, 10).await;
    let id = shop.orders.order(member, item, 1).await.unwrap();

    let update = ItemUpdate {
        price: Some(15_000),
        ..ItemUpdate::default()
    };
    shop.items.update_item(item, update).await.unwrap();

    assert_eq!(shop.orders.find_order(id).await.unwrap().total_price(), 10_000);
    let next = shop.orders.order(member, item, 1).await.unwrap();
    assert_eq!(shop.orders.find_order(next).await.unwrap().total_price(), 15_000);
}

#[tokio::test]
async fn orders_can_be_searched_by_member_name_and_status() {
    let shop = Shop::start();
    let kim = shop.member("kim").await;
    let lee = shop.member("lee").await;
    let item = shop.book("JPA", 10_000, 10).await;

    let first = shop.orders.order(kim, item, 1).await.unwrap();
    let second = shop.orders.order(kim, item, 1).await.unwrap();
    shop.orders.order(lee, item, 1).await.unwrap();
    shop.orders.cancel_order(first).await.unwrap();

    let by_name = OrderSearch {
        member_name: Some("kim".to_string()),
        ..OrderSearch::default()
    };
    let ids: Vec<_> = shop
        .orders
        .find_orders(by_name.clone())
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(ids, vec![first, second]);

    let ordered = shop
        .orders
        .find_orders(by_name.with_status(OrderStatus::Ordered))
        .await
        .unwrap();
    assert_eq!(ordered.len(), 1);
    assert_eq!(ordered[0].id, second);

    assert_eq!(
        shop.orders
            .find_orders(OrderSearch::by_member(lee))
            .await
            .unwrap()
            .len(),
        1
    );

    let nobody = OrderSearch {
        member_name: Some("park".to_string()),
        ..OrderSearch::default()
    };
    assert!(shop.orders.find_orders(nobody).await.unwrap().is_empty());
}

#[tokio::test]
async fn member_names_are_unique() {
    let shop = Shop::start();
    let kim = shop.member("kim").await;
    let lee = shop.member("lee").await;

    let err = shop
        .members
        .join("kim", Address::default())
        .await
        .unwrap_err();
    assert_eq!(err, ShopError::DuplicateMember("kim".to_string()));

    assert_eq!(
        shop.members.update(lee, "kim").await.unwrap_err(),
        ShopError::DuplicateMember("kim".to_string())
    );
    // keeping one's own name is fine
    assert_eq!(shop.members.update(kim, "kim").await.unwrap().name, "kim");

    assert!(matches!(
        shop.members.join(" ", Address::default()).await,
        Err(ShopError::Invalid(_))
    ));
    assert_eq!(shop.members.find_members().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_from_separate_services_store_one_name() {
    let system = ShopSystem::new(&ShopConfig::default());

    let mut handles = vec![];
    for _ in 0..8 {
        let members = system.member_service();
        handles.push(tokio::spawn(async move {
            members.join("kim", Address::default()).await
        }));
    }

    let mut joined = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => joined += 1,
            Err(e) => assert_eq!(e, ShopError::DuplicateMember("kim".to_string())),
        }
    }
    assert_eq!(joined, 1);

    let kims = system.member_client.find_by_name("kim").await.unwrap();
    assert_eq!(kims.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_renames_to_one_name_let_only_one_win() {
    let system = ShopSystem::new(&ShopConfig::default());
    let first = system.member_service();
    let second = system.member_service();
    let lee = first.join("lee", Address::default()).await.unwrap();
    let park = second.join("park", Address::default()).await.unwrap();

    let (a, b) = tokio::join!(first.update(lee, "kim"), second.update(park, "kim"));

    assert!(a.is_ok() != b.is_ok(), "exactly one rename wins: {a:?} {b:?}");
    let loser = if a.is_ok() { b } else { a };
    assert_eq!(loser.unwrap_err(), ShopError::DuplicateMember("kim".to_string()));
    assert_eq!(system.member_client.find_by_name("kim").await.unwrap().len(), 1);
}

#[tokio::test]
async fn items_are_filed_under_categories() {
    let shop = Shop::start();
    let item = shop.book("JPA", 10_000, 10).await;
    let album = shop
        .items
        .save_item(ItemCreate {
            name: "Kind of Blue".to_string(),
            price: 9_000,
            stock_quantity: 3,
            kind: ItemKind::Album {
                artist: "Miles Davis".to_string(),
                etc: "1959".to_string(),
            },
        })
        .await
        .unwrap();

    let media = shop.items.create_category("media", None).await.unwrap();
    let books = shop.items.create_category("books", Some(media)).await.unwrap();
    assert!(matches!(
        shop.items
            .create_category("orphan", Some(shop_actors::model::CategoryId(99)))
            .await,
        Err(ShopError::NotFound { entity: "category", .. })
    ));

    shop.items.categorize(item, books).await.unwrap();
    shop.items.categorize(item, media).await.unwrap();
    shop.items.categorize(album, media).await.unwrap();
    shop.items.categorize(item, media).await.unwrap();

    let names: Vec<_> = shop
        .items
        .categories_of(item)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["media", "books"]);
    assert_eq!(shop.items.categories_of(album).await.unwrap().len(), 1);

    assert!(matches!(
        shop.items.categorize(ItemId(99), media).await,
        Err(ShopError::NotFound { entity: "item", .. })
    ));

    assert!(shop.items.uncategorize(item, media).await.unwrap());
    assert!(!shop.items.uncategorize(item, media).await.unwrap());
    let names: Vec<_> = shop
        .items
        .categories_of(item)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["books"]);
    assert!(matches!(
        shop.items
            .uncategorize(item, shop_actors::model::CategoryId(99))
            .await,
        Err(ShopError::NotFound { entity: "category", .. })
    ));
    assert_eq!(shop.items.find_one(album).await.unwrap().kind.discriminator(), "A");
}
