//! Runtime orchestration and lifecycle management.
//!
//! - **Actor lifecycle**: starting the order actor with its injected menu
//!   context and shutting it down gracefully
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`KioskSystem`] - spins up the actors and hands out clients
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod kiosk;
pub mod tracing;

pub use kiosk::*;
pub use tracing::*;
