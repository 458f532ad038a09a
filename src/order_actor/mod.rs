//! Order-specific resource logic: entity implementation, actions, errors.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new order actor and its client.
///
/// The actor must be spawned with the shared menu as context:
/// `tokio::spawn(actor.run(menu))`.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = OrderClient::new(generic_client);
    (actor, client)
}
