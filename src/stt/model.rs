use crate::error::{PalaverError, Result};
use std::sync::{Arc, Mutex};

/// Trait for speech-to-text inference backends.
///
/// This trait allows swapping implementations (a real model vs mock).
/// Implementations are expected to be blocking; async callers offload
/// through [`TranscriptionSession::ingest_async`](crate::stt::TranscriptionSession::ingest_async).
pub trait SpeechModel: Send + Sync {
    /// Transcribe normalized audio samples to text.
    ///
    /// # Arguments
    /// * `samples` - Mono audio as f32 in [-1.0, 1.0), 16kHz by default
    ///
    /// # Returns
    /// Model output or error
    fn transcribe(&self, samples: &[f32]) -> Result<ModelOutput>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;
}

/// Implement SpeechModel for Arc<T> to allow sharing across sessions.
impl<T: SpeechModel> SpeechModel for Arc<T> {
    fn transcribe(&self, samples: &[f32]) -> Result<ModelOutput> {
        (**self).transcribe(samples)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Raw output of one transcription pass.
///
/// A struct rather than a bare String so backends can grow fields
/// (segments, detected language) without breaking the trait.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub text: String,
}

impl ModelOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Mock speech model for testing.
///
/// Records the samples of every `transcribe` call so tests can assert
/// how much audio reached the model. Clones share the call log.
#[derive(Debug, Clone)]
pub struct MockSpeechModel {
    model_name: String,
    response: String,
    should_fail: bool,
    calls: Arc<Mutex<Vec<Vec<f32>>>>,
}

impl MockSpeechModel {
    /// Create a new mock model with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            response: "mock transcription".to_string(),
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of transcribe calls observed so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock call log poisoned").len()
    }

    /// Samples passed to each transcribe call, in order
    pub fn captured_samples(&self) -> Vec<Vec<f32>> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

impl SpeechModel for MockSpeechModel {
    fn transcribe(&self, samples: &[f32]) -> Result<ModelOutput> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(samples.to_vec());

        if self.should_fail {
            Err(PalaverError::SpeechModel {
                message: "mock inference failure".to_string(),
            })
        } else {
            Ok(ModelOutput::new(self.response.clone()))
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
