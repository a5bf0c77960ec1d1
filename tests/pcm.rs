//! PCM conversion integration tests
//!
//! Exercises the decode-and-convert pipeline without audio hardware.

use muyassar::audio::{AudioBuffer, SAMPLE_RATE, decode_audio_payload, samples_to_wav};

mod common;
use common::{pcm16_bytes, pcm16_payload};

#[test]
fn sample_count_is_half_the_byte_count() {
    for len in [0usize, 1, 2, 7, 100, 2401] {
        let values: Vec<i16> = (0..len).map(|i| i16::try_from(i % 100).unwrap()).collect();
        let bytes = pcm16_bytes(&values);
        let buffer = AudioBuffer::from_pcm16(&bytes);
        assert_eq!(buffer.len(), bytes.len() / 2);
    }
}

#[test]
fn conversion_matches_the_little_endian_reading() {
    let values = [-32768i16, -1, 0, 1, 256, 32767];
    let buffer = AudioBuffer::from_pcm16(&pcm16_bytes(&values));

    for (sample, value) in buffer.samples().iter().zip(values) {
        let expected = f32::from(value) / 32768.0;
        assert!((sample - expected).abs() < 1e-7, "{value}: {sample} != {expected}");
        assert!((-1.0..=1.0).contains(sample));
    }
}

#[test]
fn spec_reference_values() {
    // [0x00, 0x80] is -32768 little-endian; [0xFF, 0x7F] is 32767
    let buffer = AudioBuffer::from_pcm16(&[0x00, 0x80]);
    assert!((buffer.samples()[0] + 1.0).abs() < f32::EPSILON);

    let buffer = AudioBuffer::from_pcm16(&[0xFF, 0x7F]);
    assert!((buffer.samples()[0] - 0.999_969_48).abs() < 1e-6);
}

#[test]
fn payload_roundtrip_through_base64() {
    let values: Vec<i16> = (-50..50).map(|i| i * 300).collect();
    let payload = pcm16_payload(&values);

    let bytes = decode_audio_payload(&payload).unwrap();
    let buffer = AudioBuffer::from_pcm16(&bytes);
    assert_eq!(buffer.len(), values.len());
}

#[test]
fn malformed_payload_is_a_decode_error() {
    let err = decode_audio_payload("@@not-base64@@").unwrap_err();
    assert!(matches!(err, muyassar::Error::Decode(_)));
}

#[test]
fn empty_payload_converts_to_an_empty_buffer() {
    let bytes = decode_audio_payload("").unwrap();
    let buffer = AudioBuffer::from_pcm16(&bytes);
    assert!(buffer.is_empty());
}

#[test]
fn wav_export_preserves_rate_and_length() {
    let buffer = AudioBuffer::from_pcm16(&pcm16_bytes(&[0, 16384, -16384, 32767]));
    let wav = samples_to_wav(buffer.samples(), SAMPLE_RATE).unwrap();

    let mut reader = hound::WavReader::new(std::io::Cursor::new(wav)).unwrap();
    assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0], 0);
}
