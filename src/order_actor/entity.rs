//! `ActorEntity` implementation for [`Order`].
//!
//! The actor layer stays thin: actions route to the ledger methods on
//! [`Order`], which hold all the invariants. The injected context is the
//! shared menu catalog, used to resolve canonical item keys coming out of
//! the extractor.

use crate::framework::ActorEntity;
use crate::model::{Menu, Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<Menu>;
    type Error = OrderError;

    fn from_create_params(id: OrderId, _params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(id))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        menu: &Arc<Menu>,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddItems(items) => {
                for extracted in items {
                    match menu.resolve(&extracted.key) {
                        Some(item) => self.add_item(item, extracted.quantity),
                        // Extraction and menu tables can drift; a key the
                        // menu no longer carries must not fail the session.
                        None => warn!(key = %extracted.key, "Extracted key not on menu"),
                    }
                }
                Ok(OrderActionResult::Ack)
            }
            OrderAction::AddItem { key, quantity } => {
                match menu.resolve(&key) {
                    Some(item) => self.add_item(item, quantity),
                    None => warn!(%key, "Item key not on menu"),
                }
                Ok(OrderActionResult::Ack)
            }
            OrderAction::RemoveLine(index) => {
                self.remove_item(index);
                Ok(OrderActionResult::Ack)
            }
            OrderAction::SetLineQuantity { index, quantity } => {
                self.set_item_quantity(index, quantity);
                Ok(OrderActionResult::Ack)
            }
            OrderAction::SetPaymentMethod(method) => {
                self.set_payment_method(method);
                Ok(OrderActionResult::Ack)
            }
            OrderAction::BeginPayment => {
                self.begin_payment()?;
                Ok(OrderActionResult::Ack)
            }
            OrderAction::BackToOrdering => {
                self.back_to_ordering()?;
                Ok(OrderActionResult::Ack)
            }
            OrderAction::CompletePayment { amount_received } => {
                self.complete_payment(amount_received)?;
                Ok(OrderActionResult::Ack)
            }
            OrderAction::Reset => {
                self.reset();
                Ok(OrderActionResult::Ack)
            }
            OrderAction::GenerateReceipt { amount_received } => Ok(OrderActionResult::Receipt(
                self.generate_receipt(amount_received),
            )),
        }
    }
}
