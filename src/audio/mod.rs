//! Audio pipeline: payload decoding, PCM conversion, analysis, and playback
//!
//! The speech service returns headerless raw PCM (signed 16-bit
//! little-endian, mono, 24 kHz), so decoding is done by hand rather than
//! through a container-aware codec.

mod analyser;
mod pcm;
mod playback;

pub use analyser::{Analyser, BIN_COUNT, FFT_SIZE};
pub use pcm::{AudioBuffer, decode_audio_payload, samples_to_wav};
pub use playback::{AudioSink, PlaybackHandle, PlaybackSession};

/// Sample rate of the speech service output and of playback (Hz)
pub const SAMPLE_RATE: u32 = 24_000;
