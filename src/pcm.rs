//! PCM decoding helpers.
//!
//! The wire format everywhere in this crate is 16-bit little-endian mono
//! PCM. Speech models take normalized f32 samples, so decoding and
//! normalization live here, shared by the streaming session and tests.

use crate::error::{PalaverError, Result};

/// Decode little-endian 16-bit PCM bytes into samples.
///
/// Returns `MalformedPcm` when `bytes` is not a whole number of samples.
pub fn decode_i16_le(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        return Err(PalaverError::MalformedPcm {
            byte_len: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Convert 16-bit samples to f32 in the range [-1.0, 1.0).
///
/// Input samples range from -32768 to 32767 and are scaled by 1/32768.
pub fn normalize(samples: &[i16]) -> Vec<f32> {
    samples
        .iter()
        .map(|&sample| sample as f32 / 32768.0)
        .collect()
}

/// Decode little-endian PCM bytes straight to normalized f32 samples.
pub fn decode_normalized(bytes: &[u8]) -> Result<Vec<f32>> {
    Ok(normalize(&decode_i16_le(bytes)?))
}
