//! # Generic Actor Server
//!
//! The `ResourceActor` owns the entity store and the receiving end of the
//! request channel. It processes messages sequentially in its own Tokio
//! task, so entity state needs no `Mutex`: exclusive ownership within the
//! task is the whole synchronization story. For the kiosk this is exactly
//! the single-threaded-cooperative model the cart needs: one session's
//! order is never mutated by two operations at once, while independent
//! sessions live side by side in the same store under different IDs.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// Messages are processed one at a time in `run()`. Multiple actors (or
/// multiple entities within one actor) are isolated from each other; there
/// is no shared mutable state anywhere in the system.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When full, client
    ///   calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e. until every client has been dropped).
    ///
    /// # Context Injection
    /// `context` is passed into every entity hook. Dependencies created
    /// after the actor was instantiated (like the shared menu catalog)
    /// are wired in here rather than at construction time.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Order" instead of the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // A minimal counter entity to exercise the generic loop.

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump(u32),
        Read,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tally overflow")]
    struct TallyError;

    #[async_trait]
    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyCreate;
        type Action = TallyAction;
        type ActionResult = u32;
        type Context = ();
        type Error = TallyError;

        fn from_create_params(id: u32, params: TallyCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &(),
        ) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump(by) => {
                    self.count = self.count.checked_add(by).ok_or(TallyError)?;
                    Ok(self.count)
                }
                TallyAction::Read => Ok(self.count),
            }
        }
    }

    #[tokio::test]
    async fn create_act_get_delete_roundtrip() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let id = client
            .create(TallyCreate {
                label: "votes".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let count = client.perform_action(id, TallyAction::Bump(3)).await.unwrap();
        assert_eq!(count, 3);

        let tally = client.get(id).await.unwrap().unwrap();
        assert_eq!(tally.label, "votes");
        assert_eq!(tally.count, 3);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn entity_error_is_boxed() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(TallyCreate { label: "x".into() }).await.unwrap();
        client.perform_action(id, TallyAction::Bump(u32::MAX)).await.unwrap();
        let err = client
            .perform_action(id, TallyAction::Bump(1))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run(()));

        let err = client.perform_action(99, TallyAction::Read).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }
}
