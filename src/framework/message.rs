//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::framework::ResourceClient)
//! and its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Each actor manages one resource type (the [`ActorEntity`]); instead of
/// ad-hoc messages per operation we standardize on a small lifecycle set:
///
/// - **Create**: lifecycle start. A kiosk session opening its order.
/// - **Get**: retrieval. The presentation layer reading the current cart.
/// - **Delete**: lifecycle end. The session being torn down.
/// - **Action**: everything domain-specific, via [`ActorEntity::Action`].
///
/// The associated types keep this fully type-safe: an order actor cannot be
/// sent anything but order payloads.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
