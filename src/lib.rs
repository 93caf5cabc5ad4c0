//! palaver - conversation intelligence core
//!
//! Two pieces with one theme: turning irregular, untrusted input into clean
//! structured results without ever failing the caller.
//!
//! - [`stt::TranscriptionSession`] buffers a live PCM byte stream into
//!   transcription windows and flushes them through a [`stt::SpeechModel`].
//! - [`extract::split`] separates a generative model's free-form reply into
//!   a prose summary and structured [`extract::Reminder`] entries.
//!
//! The request/transport layer that feeds both lives outside this crate.

// Library code propagates or degrades, never panics
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod pcm;
pub mod stt;
pub mod telemetry;
pub mod transcript;

// Streaming transcription
pub use stt::{MockSpeechModel, ModelOutput, SpeechModel, TranscriptionSession};

// Generative output splitting
pub use extract::{Extraction, Reminder, split};

// Conversation payloads
pub use transcript::{Conversation, Message, Participant};

// Error handling
pub use error::{PalaverError, Result};

// Config
pub use config::{AudioConfig, Config};

/// Build version string with optional git commit hash.
///
/// Returns `"0.2.1+abc1234"` when git hash is available, `"0.2.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
