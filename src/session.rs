//! Per-session control loop: audio in, cart mutations out.
//!
//! A [`VoiceSession`] owns one order and wires the collaborators together:
//! the transcriber turns audio into text, the extractor turns text into
//! `(item, quantity)` pairs, and the order client merges them into the cart.
//! The last transcription and extraction are retained so a front end can
//! show the customer what the kiosk heard.

use crate::clients::OrderClient;
use crate::extractor::{self, ExtractedItem, KeywordCatalog};
use crate::model::OrderId;
use crate::order_actor::OrderError;
use crate::speech::Transcriber;
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub struct VoiceSession {
    transcriber: Arc<dyn Transcriber>,
    orders: OrderClient,
    catalog: KeywordCatalog,
    order_id: OrderId,
    last_transcription: String,
    last_extraction: Vec<ExtractedItem>,
}

impl VoiceSession {
    /// Opens a fresh order and binds the session to it.
    #[instrument(skip_all)]
    pub async fn start(
        transcriber: Arc<dyn Transcriber>,
        orders: OrderClient,
        catalog: KeywordCatalog,
    ) -> Result<Self, OrderError> {
        let order_id = orders.open_order().await?;
        info!(%order_id, "Session started");
        Ok(Self {
            transcriber,
            orders,
            catalog,
            order_id,
            last_transcription: String::new(),
            last_extraction: Vec::new(),
        })
    }

    /// One turn of the voice loop: transcribe, extract, merge into the cart.
    ///
    /// Returns what was extracted. An unrecognized utterance extracts
    /// nothing and leaves the cart untouched; it is not an error.
    #[instrument(skip_all, fields(order_id = %self.order_id))]
    pub async fn handle_voice(&mut self, audio: &[u8]) -> Result<Vec<ExtractedItem>, OrderError> {
        let transcript = self.transcriber.transcribe(audio).await;
        debug!(%transcript, "Transcribed");
        self.last_transcription = transcript;

        let items = extractor::extract(&self.last_transcription, &self.catalog);
        if items.is_empty() {
            info!("Nothing extracted");
        } else {
            info!(count = items.len(), "Merging extracted items");
            self.orders.add_items(self.order_id, items.clone()).await?;
        }
        self.last_extraction = items.clone();
        Ok(items)
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// What the transcriber last heard, verbatim.
    pub fn last_transcription(&self) -> &str {
        &self.last_transcription
    }

    /// What the extractor last produced, possibly empty.
    pub fn last_extraction(&self) -> &[ExtractedItem] {
        &self.last_extraction
    }

    /// The order client, for driving checkout on this session's order.
    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::MockClient;
    use crate::model::Order;
    use crate::order_actor::OrderActionResult;
    use crate::speech::ScriptedTranscriber;

    #[tokio::test]
    async fn voice_turn_merges_extracted_items() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId::from(1));
        mock.expect_action().return_ok(OrderActionResult::Ack);

        let transcriber = Arc::new(ScriptedTranscriber::new(["saya mau tiga burger"]));
        let mut session = VoiceSession::start(
            transcriber,
            OrderClient::new(mock.client()),
            KeywordCatalog::standard(),
        )
        .await
        .unwrap();

        let items = session.handle_voice(&[]).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key, "burger");
        assert_eq!(items[0].quantity, 3);
        assert_eq!(session.last_transcription(), "saya mau tiga burger");

        mock.verify();
    }

    #[tokio::test]
    async fn unrecognized_utterance_skips_the_cart() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId::from(1));
        // No action expectation: an empty extraction must not touch the cart.

        let transcriber = Arc::new(ScriptedTranscriber::new(["tolong ulangi"]));
        let mut session = VoiceSession::start(
            transcriber,
            OrderClient::new(mock.client()),
            KeywordCatalog::standard(),
        )
        .await
        .unwrap();

        let items = session.handle_voice(&[]).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(session.last_transcription(), "tolong ulangi");
        assert!(session.last_extraction().is_empty());

        mock.verify();
    }
}
