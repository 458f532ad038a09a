//! # Framework Errors
//!
//! Common error types shared by every actor and client in the system.
//! Entity-specific failures (e.g. an order refusing a stage transition) are
//! boxed into [`FrameworkError::EntityError`] by the actor loop and unwrapped
//! again by the typed clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
