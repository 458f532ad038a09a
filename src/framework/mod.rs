//! Generic actor framework for resource management.
//!
//! The core building blocks for type-safe actor systems that manage resource
//! entities. The kiosk runs a single production actor (the order actor,
//! holding one [`Order`](crate::model::Order) per session), but the plumbing
//! is written once, generically:
//!
//! - [`ActorEntity`] - trait a resource type implements to be managed
//! - [`ResourceActor`] - generic actor server owning the entity store
//! - [`ResourceClient`] - generic, cloneable client
//! - [`ActorClient`] - trait giving wrapper clients free `get`/`delete`
//! - [`FrameworkError`] - common errors (ActorClosed, NotFound, ...)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test client-side logic without spawning
//! actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use mock::MockClient;
pub use message::{ResourceRequest, Response};
