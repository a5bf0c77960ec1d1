//! Shared test utilities

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Encode i16 samples as little-endian PCM bytes
#[must_use]
pub fn pcm16_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Encode i16 samples as a base64 payload, the way the speech service
/// delivers audio
#[must_use]
pub fn pcm16_payload(samples: &[i16]) -> String {
    BASE64.encode(pcm16_bytes(samples))
}
