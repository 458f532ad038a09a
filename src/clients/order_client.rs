//! Type-safe client for the order actor.

use crate::extractor::ExtractedItem;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, PaymentMethod};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the order actor.
///
/// One instance can serve many sessions: each session owns an [`OrderId`]
/// and all methods take it explicitly. Cloning is cheap.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Opens a fresh, empty order for a new session.
    #[instrument(skip(self))]
    pub async fn open_order(&self) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner
            .create(OrderCreate)
            .await
            .map_err(Self::map_error)
    }

    /// Reads the current cart. `None` if the session's order is gone.
    pub async fn cart(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// Merges extractor output into the cart.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn add_items(
        &self,
        id: OrderId,
        items: Vec<ExtractedItem>,
    ) -> Result<(), OrderError> {
        debug!(?items, "add_items called");
        self.act(id, OrderAction::AddItems(items)).await.map(|_| ())
    }

    /// Adds one item by canonical key (the UI button path).
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        id: OrderId,
        key: impl Into<String> + std::fmt::Debug,
        quantity: u32,
    ) -> Result<(), OrderError> {
        self.act(
            id,
            OrderAction::AddItem {
                key: key.into(),
                quantity,
            },
        )
        .await
        .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, id: OrderId, index: usize) -> Result<(), OrderError> {
        self.act(id, OrderAction::RemoveLine(index)).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn set_line_quantity(
        &self,
        id: OrderId,
        index: usize,
        quantity: u32,
    ) -> Result<(), OrderError> {
        self.act(id, OrderAction::SetLineQuantity { index, quantity })
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn set_payment_method(
        &self,
        id: OrderId,
        method: PaymentMethod,
    ) -> Result<(), OrderError> {
        self.act(id, OrderAction::SetPaymentMethod(method))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn begin_payment(&self, id: OrderId) -> Result<(), OrderError> {
        self.act(id, OrderAction::BeginPayment).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn back_to_ordering(&self, id: OrderId) -> Result<(), OrderError> {
        self.act(id, OrderAction::BackToOrdering).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn complete_payment(
        &self,
        id: OrderId,
        amount_received: Option<u64>,
    ) -> Result<(), OrderError> {
        self.act(id, OrderAction::CompletePayment { amount_received })
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn reset(&self, id: OrderId) -> Result<(), OrderError> {
        self.act(id, OrderAction::Reset).await.map(|_| ())
    }

    /// Renders the session's receipt.
    #[instrument(skip(self))]
    pub async fn receipt(
        &self,
        id: OrderId,
        amount_received: Option<u64>,
    ) -> Result<String, OrderError> {
        match self
            .act(id, OrderAction::GenerateReceipt { amount_received })
            .await?
        {
            OrderActionResult::Receipt(text) => Ok(text),
            other => Err(OrderError::ActorCommunication(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    }

    async fn act(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Unwraps boxed entity errors back into [`OrderError`] so callers can
    /// match on refusals like `InsufficientCash`; everything else becomes a
    /// communication error.
    fn map_error(e: FrameworkError) -> OrderError {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunication(other.to_string()),
            },
            other => OrderError::ActorCommunication(other.to_string()),
        }
    }
}
