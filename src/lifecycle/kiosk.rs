use crate::clients::OrderClient;
use crate::model::Menu;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the voice kiosk.
///
/// `KioskSystem` owns the actor lifecycle:
/// - spawns the order actor with the shared [`Menu`] injected as context
/// - hands out clients for sessions to use
/// - shuts everything down by closing channels and awaiting the tasks
///
/// # Example
///
/// ```ignore
/// let system = KioskSystem::new();
/// let session = VoiceSession::start(
///     transcriber,
///     system.order_client.clone(),
///     KeywordCatalog::standard(),
/// ).await?;
/// // ... drive the session ...
/// system.shutdown().await?;
/// ```
pub struct KioskSystem {
    /// Client for the order actor. Clone freely; one per session is typical.
    pub order_client: OrderClient,

    /// The menu shared with the actor, for front ends that render it.
    pub menu: Arc<Menu>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KioskSystem {
    /// Creates and initializes a new `KioskSystem` with the order actor running.
    ///
    /// The menu is built once and injected as the actor's context; every
    /// session sees the same catalog and prices.
    pub fn new() -> Self {
        let menu = Arc::new(Menu::standard());

        let (order_actor, order_client) = crate::order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(menu.clone()));

        Self {
            order_client,
            menu,
            handles: vec![order_handle],
        }
    }

    /// Gracefully shuts down the kiosk.
    ///
    /// Dropping the client closes its channel; the actor detects the closed
    /// channel and exits its event loop. Any session still holding a cloned
    /// client keeps the actor alive until that clone is dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down kiosk...");

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Kiosk shutdown complete.");
        Ok(())
    }
}

impl Default for KioskSystem {
    fn default() -> Self {
        Self::new()
    }
}
