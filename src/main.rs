//! Demo binary: one scripted drive-thru session, end to end.
//!
//! 1. Start the [`KioskSystem`].
//! 2. Open a [`VoiceSession`] with a scripted transcriber.
//! 3. Speak an order, pick a payment method, pay cash.
//! 4. Print the receipt and shut down.
//!
//! Run with `RUST_LOG=info cargo run` to watch the spans.

use std::sync::Arc;

use tracing::{info, Instrument};
use voice_kiosk::extractor::KeywordCatalog;
use voice_kiosk::lifecycle::{setup_tracing, KioskSystem};
use voice_kiosk::model::PaymentMethod;
use voice_kiosk::session::VoiceSession;
use voice_kiosk::speech::ScriptedTranscriber;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting voice kiosk");

    let system = KioskSystem::new();

    // The real deployment plugs a speech model in here; the demo replays a
    // fixed conversation.
    let transcriber = Arc::new(ScriptedTranscriber::new([
        "halo, saya mau tiga burger dan dua cola",
        "tambah satu kentang goreng ya",
    ]));

    let span = tracing::info_span!("voice_turns");
    let session = async {
        let mut session = VoiceSession::start(
            transcriber,
            system.order_client.clone(),
            KeywordCatalog::standard(),
        )
        .await
        .map_err(|e| e.to_string())?;

        for _ in 0..2 {
            let items = session.handle_voice(&[]).await.map_err(|e| e.to_string())?;
            info!(
                transcript = session.last_transcription(),
                ?items,
                "Voice turn handled"
            );
        }
        Ok::<_, String>(session)
    }
    .instrument(span)
    .await?;

    let order_id = session.order_id();
    let orders = session.orders().clone();

    let span = tracing::info_span!("checkout");
    let receipt = async {
        orders
            .begin_payment(order_id)
            .await
            .map_err(|e| e.to_string())?;
        orders
            .set_payment_method(order_id, PaymentMethod::Cash)
            .await
            .map_err(|e| e.to_string())?;
        orders
            .complete_payment(order_id, Some(120_000))
            .await
            .map_err(|e| e.to_string())?;
        orders
            .receipt(order_id, Some(120_000))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    println!("{receipt}");

    // Every cloned client must go before shutdown, or the actor's channel
    // stays open and shutdown waits forever.
    drop(session);
    drop(orders);
    system.shutdown().await?;

    info!("Kiosk session completed");
    Ok(())
}
