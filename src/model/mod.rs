//! Pure domain data: the menu catalog and the cart aggregate.
//!
//! Nothing in here knows about actors or channels; [`Order`] implements the
//! [`ActorEntity`](crate::framework::ActorEntity) trait over in
//! [`crate::order_actor`].

pub mod menu;
pub mod order;

pub use menu::*;
pub use order::*;
