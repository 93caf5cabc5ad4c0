use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{PalaverError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Fallback tracing filter used when RUST_LOG is unset, e.g. "info" or "palaver=debug"
    pub log_filter: String,
    pub audio: AudioConfig,
}

/// Audio stream configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate of the incoming PCM stream in Hz
    pub sample_rate: u32,
    /// Seconds of audio accumulated before a transcription pass runs
    pub window_seconds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            audio: AudioConfig::default(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: defaults::SAMPLE_RATE,
            window_seconds: defaults::WINDOW_SECONDS,
        }
    }
}

impl AudioConfig {
    /// Buffered byte count that triggers a transcription pass.
    ///
    /// Incoming audio is 16-bit mono PCM, so one second occupies
    /// `sample_rate * 2` bytes.
    pub fn window_bytes(&self) -> usize {
        self.sample_rate as usize * defaults::BYTES_PER_SAMPLE * self.window_seconds as usize
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Panics if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(PalaverError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => panic!("Failed to load config from {}: {}", path.display(), e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - PALAVER_SAMPLE_RATE → audio.sample_rate
    /// - PALAVER_WINDOW_SECONDS → audio.window_seconds
    /// - PALAVER_LOG → log_filter
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(rate) = std::env::var("PALAVER_SAMPLE_RATE")
            && !rate.is_empty()
        {
            match rate.parse::<u32>() {
                Ok(parsed) => self.audio.sample_rate = parsed,
                Err(_) => {
                    tracing::warn!(value = %rate, "ignoring unparsable PALAVER_SAMPLE_RATE");
                }
            }
        }

        if let Ok(seconds) = std::env::var("PALAVER_WINDOW_SECONDS")
            && !seconds.is_empty()
        {
            match seconds.parse::<u32>() {
                Ok(parsed) => self.audio.window_seconds = parsed,
                Err(_) => {
                    tracing::warn!(value = %seconds, "ignoring unparsable PALAVER_WINDOW_SECONDS");
                }
            }
        }

        if let Ok(filter) = std::env::var("PALAVER_LOG")
            && !filter.is_empty()
        {
            self.log_filter = filter;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/palaver/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .expect("Could not determine config directory")
            .join("palaver")
            .join("config.toml")
    }
}
