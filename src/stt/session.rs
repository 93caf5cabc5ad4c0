//! Streaming transcription session.
//!
//! Accumulates raw PCM bytes until a full window is buffered, then runs one
//! transcription pass over everything collected so far. Windowing is soft: a
//! flush covers the whole buffer, however far past the threshold it has
//! grown.
//!
//! Every flush clears the buffer whether transcription succeeded or not, and
//! every internal failure degrades to an empty string instead of an error,
//! so a single bad window cannot wedge a long-running audio stream.

use crate::config::AudioConfig;
use crate::pcm;
use crate::stt::model::SpeechModel;
use std::sync::Arc;

/// Per-stream transcription state: one buffer, one shared model.
pub struct TranscriptionSession<M: SpeechModel> {
    model: Arc<M>,
    buffer: Vec<u8>,
    window_bytes: usize,
}

impl<M: SpeechModel> TranscriptionSession<M> {
    /// Creates a session owning its model.
    pub fn new(model: M, audio: &AudioConfig) -> Self {
        Self::from_arc(Arc::new(model), audio)
    }

    /// Creates a session from a shared model.
    ///
    /// Use this when many concurrent streams share one loaded model; each
    /// session still keeps its own buffer.
    pub fn from_arc(model: Arc<M>, audio: &AudioConfig) -> Self {
        Self {
            model,
            buffer: Vec::with_capacity(audio.window_bytes()),
            window_bytes: audio.window_bytes(),
        }
    }

    /// Bytes currently buffered and not yet transcribed.
    pub fn buffered_bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Feed one chunk of 16-bit little-endian PCM into the session.
    ///
    /// Returns `None` while the buffer is still below one window. Once the
    /// buffered total reaches the window size, transcribes the entire buffer
    /// and returns the trimmed text. A flush that produced nothing usable,
    /// whether from silence or from a failed pass, returns `Some("")`.
    pub fn ingest(&mut self, chunk: &[u8]) -> Option<String> {
        self.buffer.extend_from_slice(chunk);

        if self.buffer.len() < self.window_bytes {
            return None;
        }

        Some(self.drain())
    }

    /// Transcribe whatever remains in the buffer, regardless of size.
    ///
    /// Consumes the session so trailing audio can only be flushed once.
    /// Returns an empty string when nothing is buffered or the pass fails.
    pub fn finalize(mut self) -> String {
        self.drain()
    }

    fn drain(&mut self) -> String {
        let bytes = std::mem::take(&mut self.buffer);
        transcribe_window(self.model.as_ref(), &bytes)
    }
}

impl<M: SpeechModel + 'static> TranscriptionSession<M> {
    /// Like [`ingest`](Self::ingest), with the transcription pass moved off
    /// the async runtime onto the blocking thread pool.
    pub async fn ingest_async(&mut self, chunk: &[u8]) -> Option<String> {
        self.buffer.extend_from_slice(chunk);

        if self.buffer.len() < self.window_bytes {
            return None;
        }

        Some(self.drain_async().await)
    }

    /// Like [`finalize`](Self::finalize), off the async runtime.
    pub async fn finalize_async(mut self) -> String {
        self.drain_async().await
    }

    async fn drain_async(&mut self) -> String {
        let bytes = std::mem::take(&mut self.buffer);
        let model = Arc::clone(&self.model);

        // Run blocking inference on tokio's blocking thread pool
        match tokio::task::spawn_blocking(move || transcribe_window(model.as_ref(), &bytes)).await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "transcription task panicked, window dropped");
                String::new()
            }
        }
    }
}

/// One transcription pass over a drained window.
///
/// All failure modes collapse to an empty string; the caller has already
/// given up the bytes and there is nothing sensible to retry.
fn transcribe_window<M: SpeechModel>(model: &M, bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    tracing::debug!(bytes = bytes.len(), "transcribing audio window");

    let samples = match pcm::decode_normalized(bytes) {
        Ok(samples) => samples,
        Err(e) => {
            tracing::warn!(error = %e, "undecodable audio window dropped");
            return String::new();
        }
    };

    match model.transcribe(&samples) {
        Ok(output) => output.text.trim().to_string(),
        Err(e) => {
            tracing::warn!(
                error = %e,
                model = model.model_name(),
                "transcription failed, window dropped"
            );
            String::new()
        }
    }
}
