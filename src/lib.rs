//! # Voice Kiosk
//!
//! > **A voice-driven drive-thru ordering kiosk, built on resource-oriented actors.**
//!
//! Customers speak their order; the kiosk turns noisy transcripts into
//! `(menu item, quantity)` pairs and keeps each session's cart inside an
//! actor until the order is paid and a receipt is printed.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why ROA + Actor Model?
//!
//! Each order is a resource with a life of its own: items merge in, lines
//! get edited, the order walks through Ordering → Payment → Completed. We
//! combine:
//! - **Resource-Oriented Architecture (ROA)**: standard operations (create,
//!   get, delete, action) on well-defined resources.
//! - **Actor Model**: isolated state with message-passing concurrency.
//!
//! One generic `ResourceActor<Order>` serves every concurrent kiosk session.
//! Messages are processed sequentially, so cart invariants hold without
//! locks, while sessions for different customers run in parallel.
//!
//! ### Late Binding
//!
//! The actor's dependency (the shared [`Menu`](model::Menu)) is injected at
//! `run()` time, not at construction time. The framework stays generic; the
//! menu stays a plain value.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` plumbing: channels, the message loop,
//! error mapping. Knows nothing about burgers.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Domain ([`model`])
//! Pure data and rules: the [`Menu`](model::Menu), the [`Order`](model::Order)
//! ledger with its stage machine, and receipt rendering. No async, no
//! channels; this is where the tests with exact rupiah amounts live.
//!
//! ### 3. The Ear ([`extractor`] and [`speech`])
//! [`speech::Transcriber`] is the boundary to the speech-to-text service.
//! [`extractor::extract`] is a pure function from transcript to
//! `(item, quantity)` pairs, driven by a bilingual number lexicon and a
//! keyword catalog.
//!
//! ### 4. The Implementation ([`order_actor`])
//! [`Order`](model::Order) wired into the engine: the `ActorEntity` impl,
//! its action set, and its error type.
//!
//! ### 5. The Interface ([`clients`] and [`session`])
//! [`clients::OrderClient`] hides message passing behind typed methods.
//! [`session::VoiceSession`] is the per-customer control loop gluing
//! transcriber, extractor, and client together.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`lifecycle::KioskSystem`] spawns the actors, injects the menu, and
//! shuts everything down gracefully.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 🧪 Testing
//!
//! ```bash
//! cargo test
//! ```
//!
//! See [`framework::mock`] for testing client-side logic without spawning
//! full actors.

pub mod clients;
pub mod extractor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod session;
pub mod speech;
