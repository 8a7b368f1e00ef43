//! # Store Mocks
//!
//! Test doubles that stand in for a running [`StoreActor`](crate::store::StoreActor).
//!
//! | | [`MockClient`] | [`create_mock_client`] |
//! |---|---|---|
//! | **Style** | queued expectations, scripted replies | raw receiver, reply by hand |
//! | **Good for** | a store another store depends on | asserting the exact request sent |
//!
//! The order store, for example, is tested against a mocked member store and a mocked item
//! store: the test scripts "member exists", "first removal succeeds", "second removal fails"
//! and checks that the order store rolls back the first removal.
//!
//! ```rust
//! use async_trait::async_trait;
//! use shop_actors::store::mock::MockClient;
//! use shop_actors::store::{Entity, StoreError};
//!
//! #[derive(Clone, Debug)] struct Shelf { id: u32 }
//! #[derive(Debug)] struct ShelfCreate;
//! #[derive(Debug, thiserror::Error)] #[error("shelf")] struct ShelfError;
//!
//! #[async_trait]
//! impl Entity for Shelf {
//!     type Id = u32; type Create = ShelfCreate; type Update = ();
//!     type Action = (); type ActionResult = (); type Context = (); type Error = ShelfError;
//!     fn from_create_params(id: u32, _: ShelfCreate) -> Result<Self, ShelfError> {
//!         Ok(Self { id })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), ShelfError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), ShelfError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Shelf>::new();
//!     mock.expect_find_by_id(1).return_err(StoreError::ActorClosed);
//!
//!     let result = mock.client().find_by_id(1).await;
//!     assert!(matches!(result, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::store::client::StoreClient;
use crate::store::entity::Entity;
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// One scripted reply, consumed in FIFO order.
enum Expectation<T: Entity> {
    Save {
        response: Result<T::Id, StoreError>,
    },
    FindById {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Find {
        response: Result<Vec<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Store double that answers requests from a queue of expectations.
///
/// A request that does not match the head of the queue (wrong kind or wrong id) makes the
/// background task panic, which the caller observes as [`StoreError::ActorDropped`];
/// [`MockClient::verify`] then reports the leftover expectation.
pub struct MockClient<T: Entity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Save { respond_to, .. },
                        Some(Expectation::Save { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::FindById { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "find_by_id called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => panic!("Unexpected {} request", request.kind()),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_save(&mut self) -> Expect<T, T::Id> {
        Expect::new(self.expectations.clone(), |response| Expectation::Save { response })
    }

    pub fn expect_find_by_id(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        Expect::new(self.expectations.clone(), move |response| {
            Expectation::FindById { id, response }
        })
    }

    pub fn expect_find(&mut self) -> Expect<T, Vec<T>> {
        Expect::new(self.expectations.clone(), |response| Expectation::Find { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> Expect<T, T> {
        Expect::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        Expect::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with a reply.
pub struct Expect<T: Entity, R> {
    queue: Queue<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T>>,
}

impl<T: Entity, R> Expect<T, R> {
    fn new(
        queue: Queue<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + 'static,
    ) -> Self {
        Self {
            queue,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.queue.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client whose requests land on the returned receiver.
///
/// Use with [`expect_save`], [`expect_find_by_id`] and [`expect_action`] to assert the
/// request and answer it manually.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Next request, if it is a `Save`.
pub async fn expect_save<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `FindById`.
pub async fn expect_find_by_id<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an `Action`.
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
