//! Raw PCM payload decoding and conversion

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::{Error, Result};

use super::SAMPLE_RATE;

/// Decode a base64-encoded audio payload into raw bytes
///
/// # Errors
///
/// Returns `Error::Decode` on malformed base64 input
pub fn decode_audio_payload(payload: &str) -> Result<Vec<u8>> {
    Ok(BASE64.decode(payload)?)
}

/// A playable in-memory audio buffer: one channel of f32 samples at
/// [`SAMPLE_RATE`]
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Build a buffer from signed 16-bit little-endian PCM bytes
    ///
    /// Yields exactly `floor(len / 2)` samples; a trailing odd byte is
    /// service misbehavior and is truncated, not an error.
    #[must_use]
    pub fn from_pcm16(bytes: &[u8]) -> Self {
        if bytes.len() % 2 != 0 {
            tracing::debug!(len = bytes.len(), "odd PCM payload length, truncating");
        }

        let samples = bytes
            .chunks_exact(2)
            .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
            .collect();

        Self { samples }
    }

    /// Build a buffer directly from f32 samples
    #[must_use]
    pub const fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// The sample data
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback duration in seconds
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / SAMPLE_RATE as f32
    }
}

/// Encode f32 samples as a 16-bit mono WAV file
///
/// # Errors
///
/// Returns `Error::Audio` if WAV encoding fails
pub fn samples_to_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer =
            hound::WavWriter::new(&mut cursor, spec).map_err(|e| Error::Audio(e.to_string()))?;

        for &sample in samples {
            #[allow(clippy::cast_possible_truncation)]
            let sample_i16 = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
            writer
                .write_sample(sample_i16)
                .map_err(|e| Error::Audio(e.to_string()))?;
        }

        writer.finalize().map_err(|e| Error::Audio(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_extremes_exactly() {
        // -32768 and +32767, little-endian
        let buffer = AudioBuffer::from_pcm16(&[0x00, 0x80, 0xFF, 0x7F]);
        assert_eq!(buffer.len(), 2);
        assert!((buffer.samples()[0] - (-1.0)).abs() < f32::EPSILON);
        assert!((buffer.samples()[1] - 0.999_969_5).abs() < 1e-6);
    }

    #[test]
    fn truncates_trailing_odd_byte() {
        let buffer = AudioBuffer::from_pcm16(&[0x00, 0x00, 0x01, 0x00, 0xAB]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_buffer() {
        let buffer = AudioBuffer::from_pcm16(&[]);
        assert!(buffer.is_empty());
        assert!(buffer.duration_secs().abs() < f32::EPSILON);
    }

    #[test]
    fn all_samples_stay_in_unit_range() {
        let bytes: Vec<u8> = (0..=255u8).flat_map(|b| [b, b.wrapping_mul(7)]).collect();
        let buffer = AudioBuffer::from_pcm16(&bytes);
        assert_eq!(buffer.len(), bytes.len() / 2);
        assert!(
            buffer
                .samples()
                .iter()
                .all(|s| (-1.0..=1.0).contains(s))
        );
    }

    #[test]
    fn decode_rejects_malformed_base64() {
        assert!(decode_audio_payload("not base64!!!").is_err());
        assert_eq!(decode_audio_payload("AAD//w==").unwrap(), vec![0, 0, 255, 255]);
    }

    #[test]
    fn wav_roundtrip_preserves_length_and_rate() {
        let samples = vec![0.0f32, 0.5, -0.5, 1.0];
        let wav = samples_to_wav(&samples, SAMPLE_RATE).unwrap();

        let reader = hound::WavReader::new(std::io::Cursor::new(wav)).unwrap();
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.len(), 4);
    }
}
