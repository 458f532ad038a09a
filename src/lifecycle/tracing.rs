//! # Observability & Tracing
//!
//! Structured logging for the kiosk, built on the `tracing` crate.
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); log lines carry structured fields like
//! `entity_type` and `order_id` instead.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show transcripts and full extraction payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the actor plumbing only
//! RUST_LOG=voice_kiosk::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, client methods log full payloads once at the start
//! (`debug!(?items, "add_items called")`); all subsequent logs stay concise,
//! showing only the span hierarchy (e.g. `voice_turn:handle_voice`).

/// Initializes the tracing/logging infrastructure for the application.
///
/// Call once at startup, before any actor is spawned. Verbosity is
/// controlled via the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use structured fields instead
        .compact()
        .init();
}
