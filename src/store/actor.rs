//! # Store Actor
//!
//! `StoreActor<T>` is the server half of a store. It owns the `id -> entity` map and the
//! receiving end of the request channel, and handles one request at a time. No locks
//! guard the map: the task that runs [`StoreActor::run`] is its only owner.

use crate::store::client::StoreClient;
use crate::store::entity::Entity;
use crate::store::error::StoreError;
use crate::store::ids::{IdGenerator, Sequence};
use crate::store::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Generic in-memory store for one entity type.
///
/// Create it with [`StoreActor::new`] (or [`StoreActor::with_ids`]), hand the returned
/// client to whoever needs it, then spawn `actor.run(context)` on the runtime.
///
/// ```rust
/// use async_trait::async_trait;
/// use shop_actors::store::{Entity, StoreActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl Entity for Note {
///     type Id = u32; type Create = NoteCreate; type Update = String;
///     type Action = (); type ActionResult = (); type Context = (); type Error = NoteError;
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.0 })
///     }
///     async fn on_update(&mut self, text: String, _: &()) -> Result<(), NoteError> {
///         self.text = text;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(8);
///     tokio::spawn(actor.run(()));
///     let id = client.save(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(client.find_by_id(id).await.unwrap().unwrap().text, "hello");
/// }
/// ```
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    ids: Box<dyn IdGenerator<T::Id>>,
}

impl<T: Entity> StoreActor<T>
where
    T::Id: From<u32>,
{
    /// Creates a store whose ids come from a [`Sequence`] starting at 1.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        Self::with_ids(buffer_size, Sequence::default())
    }
}

impl<T: Entity> StoreActor<T> {
    /// Creates a store that draws identities from `ids`.
    pub fn with_ids(
        buffer_size: usize,
        ids: impl IdGenerator<T::Id>,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            ids: Box::new(ids),
        };
        (actor, StoreClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    ///
    /// `context` is passed by reference to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "shop_actors::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { params, respond_to } => {
                    debug!(entity_type, ?params, "Save");
                    let Some(id) = self.ids.next_id() else {
                        warn!(entity_type, "Identities exhausted");
                        let _ = respond_to.send(Err(StoreError::IdsExhausted));
                        continue;
                    };

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Save rejected");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                    };
                    if let Some(e) = self.conflict(&item, None) {
                        warn!(entity_type, %id, error = %e, "Save conflicts");
                        let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        continue;
                    }
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Saved");
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::FindById { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter.matches(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = items.len(), "Find");
                    let _ = respond_to.send(Ok(items));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    // hooks mutate a copy so a failed update leaves the stored entity intact
                    let mut draft = current.clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        continue;
                    }
                    if let Some(e) = self.conflict(&draft, Some(&id)) {
                        warn!(entity_type, %id, error = %e, "Update conflicts");
                        let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), draft.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = item.clone();
                    let result = draft.handle_action(action, &context).await;
                    match result {
                        Ok(outcome) => {
                            *item = draft;
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(outcome));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// First constraint violation between `candidate` and the stored entities other
    /// than `own`.
    fn conflict(&self, candidate: &T, own: Option<&T::Id>) -> Option<T::Error> {
        self.store
            .iter()
            .filter(|(id, _)| own != Some(*id))
            .find_map(|(_, existing)| candidate.conflicts_with(existing))
    }
}
