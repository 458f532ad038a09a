//! Full end-to-end integration tests: kiosk system, voice sessions, real
//! actors, all wired together.

use std::sync::Arc;

use voice_kiosk::extractor::KeywordCatalog;
use voice_kiosk::lifecycle::KioskSystem;
use voice_kiosk::model::{PaymentMethod, Stage};
use voice_kiosk::session::VoiceSession;
use voice_kiosk::speech::ScriptedTranscriber;

#[tokio::test]
async fn test_full_drive_thru_session() {
    let system = KioskSystem::new();

    let transcriber = Arc::new(ScriptedTranscriber::new([
        "halo, saya mau tiga burger dan dua cola",
        "hmm tolong ulangi",
        "tambah satu kentang goreng ya",
    ]));
    let mut session = VoiceSession::start(
        transcriber,
        system.order_client.clone(),
        KeywordCatalog::standard(),
    )
    .await
    .expect("Failed to start session");

    // Turn 1: two items in one utterance.
    let items = session.handle_voice(&[]).await.expect("Voice turn failed");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].key, "burger");
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[1].key, "cola");
    assert_eq!(items[1].quantity, 2);

    // Turn 2: nothing recognizable, cart unchanged.
    let items = session.handle_voice(&[]).await.unwrap();
    assert!(items.is_empty());

    // Turn 3: one more item.
    let items = session.handle_voice(&[]).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].key, "kentang goreng");

    let orders = session.orders().clone();
    let id = session.order_id();

    let cart = orders.cart(id).await.unwrap().expect("Order not found");
    assert_eq!(cart.lines().len(), 3);
    assert_eq!(cart.total(), 3 * 25_000 + 2 * 10_000 + 15_000);

    // Checkout: cash, overpaid, change on the receipt.
    orders.begin_payment(id).await.unwrap();
    orders
        .set_payment_method(id, PaymentMethod::Cash)
        .await
        .unwrap();
    orders.complete_payment(id, Some(150_000)).await.unwrap();

    let receipt = orders.receipt(id, Some(150_000)).await.unwrap();
    assert!(receipt.contains("=== STRUK PEMBELIAN ===\n"));
    assert!(receipt.contains("🍔 Burger x3 = Rp75,000\n"));
    assert!(receipt.contains("🥤 Cola x2 = Rp20,000\n"));
    assert!(receipt.contains("🍟 Kentang Goreng x1 = Rp15,000\n"));
    assert!(receipt.contains("Total: Rp110,000\n"));
    assert!(receipt.contains("Uang Kembali: Rp40,000\n"));

    drop(session);
    drop(orders);
    system.shutdown().await.expect("Failed to shutdown kiosk");
}

/// Sessions are independent: two customers ordering concurrently never see
/// each other's carts.
#[tokio::test]
async fn test_concurrent_sessions_are_isolated() {
    let system = KioskSystem::new();

    let mut handles = vec![];
    for i in 1..=5u32 {
        let orders = system.order_client.clone();
        let handle = tokio::spawn(async move {
            let transcript = format!("saya mau {i} burger");
            let transcriber = Arc::new(ScriptedTranscriber::new([transcript]));
            let mut session =
                VoiceSession::start(transcriber, orders, KeywordCatalog::standard())
                    .await
                    .unwrap();
            session.handle_voice(&[]).await.unwrap();

            let cart = session
                .orders()
                .cart(session.order_id())
                .await
                .unwrap()
                .unwrap();
            (i, cart)
        });
        handles.push(handle);
    }

    for handle in handles {
        let (i, cart) = handle.await.unwrap();
        assert_eq!(cart.lines().len(), 1, "session {i} sees only its own cart");
        assert_eq!(cart.lines()[0].quantity, i);
        assert_eq!(cart.total(), u64::from(i) * 25_000);
    }

    system.shutdown().await.unwrap();
}

/// A session that walks into payment and back keeps its cart intact.
#[tokio::test]
async fn test_back_navigation_keeps_the_cart() {
    let system = KioskSystem::new();
    let orders = system.order_client.clone();

    let transcriber = Arc::new(ScriptedTranscriber::new(["dua es krim", "satu cola"]));
    let mut session = VoiceSession::start(
        transcriber,
        orders.clone(),
        KeywordCatalog::standard(),
    )
    .await
    .unwrap();
    let id = session.order_id();

    session.handle_voice(&[]).await.unwrap();
    orders.begin_payment(id).await.unwrap();
    orders.back_to_ordering(id).await.unwrap();

    // Customer keeps ordering after backing out of payment.
    session.handle_voice(&[]).await.unwrap();

    let cart = orders.cart(id).await.unwrap().unwrap();
    assert_eq!(cart.stage(), Stage::Ordering);
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.total(), 2 * 12_000 + 10_000);

    drop(session);
    drop(orders);
    system.shutdown().await.unwrap();
}
