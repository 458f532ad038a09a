//! Custom actions for the order actor.
//!
//! Every ledger mutation the presentation layer (or the voice pipeline) can
//! perform on a session's cart is an action here, handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`Order`](crate::model::Order).

use crate::extractor::ExtractedItem;
use crate::model::PaymentMethod;

/// Operations on a session's order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Merge extracted `(item, quantity)` pairs into the cart. Canonical
    /// keys are resolved against the menu context; unknown keys are skipped.
    AddItems(Vec<ExtractedItem>),
    /// Add a quantity of one item directly (UI button path). Canonical key,
    /// same resolution as `AddItems`.
    AddItem { key: String, quantity: u32 },
    /// Remove the line at an index. Out of bounds is a no-op.
    RemoveLine(usize),
    /// Set the quantity of the line at an index; zero removes it.
    SetLineQuantity { index: usize, quantity: u32 },
    /// Attach the payment method.
    SetPaymentMethod(PaymentMethod),
    /// Ordering → Payment. Refused on an empty cart.
    BeginPayment,
    /// Payment → Ordering (back navigation).
    BackToOrdering,
    /// Payment → Completed. Cash carries the received amount.
    CompletePayment { amount_received: Option<u64> },
    /// Clear cart and payment method, back to Ordering.
    Reset,
    /// Render the receipt. Does not mutate the order.
    GenerateReceipt { amount_received: Option<u64> },
}

/// Results returned by [`OrderAction`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    /// The action was applied (possibly as a defensive no-op).
    Ack,
    /// The rendered receipt text.
    Receipt(String),
}
