//! Speech-to-text: the model seam and the streaming session built on it.

pub mod model;
pub mod session;

pub use model::{MockSpeechModel, ModelOutput, SpeechModel};
pub use session::TranscriptionSession;
