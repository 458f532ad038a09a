//! Error types for the order actor.

use crate::model::Stage;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Only precondition violations surface here: advancing the stage with an
/// empty cart, paying with insufficient cash. Defensive cases (stale
/// indices, zero quantities) are absorbed as no-ops by the ledger and never
/// become errors; see [`crate::model::Order`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The cart must be non-empty to advance to payment.
    #[error("Cart is empty")]
    EmptyCart,

    /// The requested stage transition is not permitted from this stage.
    #[error("Invalid stage transition from {from:?}")]
    InvalidStage { from: Stage },

    /// Payment cannot complete without a payment method attached.
    #[error("No payment method selected")]
    NoPaymentMethod,

    /// Cash received does not cover the total.
    #[error("Insufficient cash: short Rp{shortfall}")]
    InsufficientCash { shortfall: u64 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunication(msg)
    }
}
