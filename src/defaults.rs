//! Default configuration constants for palaver.
//!
//! Shared between the config structs and the streaming session so the two
//! never disagree about what a "window" of audio is.

/// Default audio sample rate in Hz.
///
/// 16kHz is the standard for speech recognition models and is the rate the
/// transport collaborator is contracted to deliver.
pub const SAMPLE_RATE: u32 = 16000;

/// Default transcription window length in seconds.
///
/// Five seconds balances latency against giving the speech model enough
/// context to produce usable text. The window is a soft lower bound: a large
/// incoming chunk can overshoot it and the whole buffer is transcribed anyway.
pub const WINDOW_SECONDS: u32 = 5;

/// Bytes per audio sample.
///
/// The stream carries little-endian signed 16-bit PCM, mono, without any
/// header or framing, so every sample is exactly two bytes.
pub const BYTES_PER_SAMPLE: usize = 2;
