//! The transcription collaborator boundary.
//!
//! Speech-to-text is an external, fallible service. The kiosk treats it as
//! infallible at the type level: any internal failure is surfaced as an
//! apology string, which flows into the extractor like ordinary text and
//! simply matches no keywords. Timeouts and capture problems belong to the
//! audio layer, not here; there is no cancellation of an in-flight
//! transcription.

use async_trait::async_trait;
use std::sync::Mutex;

/// What a failed transcription says. The extractor finds no keywords in it,
/// so a failure never reaches the cart.
pub const TRANSCRIPTION_APOLOGY: &str =
    "Maaf, tidak dapat mengenali suara. Silakan coba lagi.";

/// Turns an audio sample into a best-effort natural-language string.
///
/// Implementations must not fail: return [`TRANSCRIPTION_APOLOGY`] (or any
/// other user-facing message) instead of an error.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> String;
}

/// A transcriber that replays a fixed script, one line per call.
///
/// Stands in for the real model in the demo binary and in tests; once the
/// script is exhausted it apologizes, like the real service does on failure.
pub struct ScriptedTranscriber {
    lines: Mutex<Vec<String>>,
}

impl ScriptedTranscriber {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        lines.reverse(); // pop() from the back replays in order
        Self {
            lines: Mutex::new(lines),
        }
    }
}

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> String {
        self.lines
            .lock()
            .expect("script lock poisoned")
            .pop()
            .unwrap_or_else(|| TRANSCRIPTION_APOLOGY.to_string())
    }
}
