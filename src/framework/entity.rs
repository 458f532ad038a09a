//! # ActorEntity Trait
//!
//! The contract a resource type must satisfy to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). The kiosk has one
//! production entity, the session [`Order`](crate::model::Order), but the
//! framework stays generic: the actor loop is written once, and the
//! associated types guarantee at compile time that an order actor can only
//! ever receive order payloads.
//!
//! # Operations
//!
//! An entity supports three lifecycle operations (Create, Get, Delete) plus
//! domain-specific [`Action`](ActorEntity::Action)s. There is no generic
//! "update" operation: every mutation a kiosk session performs on its cart
//! (adding items, editing quantities, moving between stages) carries domain
//! meaning and preconditions, so all of them are actions.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by
/// [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other collaborators. The
/// `Context` type is injected into every hook at `run()` time rather than at
/// construction ("late binding"); the order actor receives the shared menu
/// catalog this way.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g. `AddItems`, `Reset`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor, covering all of its actions. Clients deal
    /// with a single error type and can pattern-match on specific variants
    /// after the framework unwraps the boxed error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
