//! Audio playback to speakers
//!
//! A [`PlaybackSession`] owns the output device, the analyser tap, and at
//! most one active source at a time. Starting a new source stops the
//! previous one; stopping with no active source is a no-op.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleRate, Stream, StreamConfig};
use tokio::sync::watch;

use crate::{Error, Result};

use super::{Analyser, AudioBuffer, SAMPLE_RATE};

/// Sink seam for the session state machine
///
/// The production implementation is [`PlaybackSession`]; session tests drive
/// the machine with a fake sink so no audio hardware is required. Not
/// `Send`: cpal streams are pinned to the thread that built them.
pub trait AudioSink {
    /// Start playing a buffer, stopping any active source first
    ///
    /// # Errors
    ///
    /// Returns error if the output stream cannot be started
    fn start(&mut self, buffer: &AudioBuffer) -> Result<PlaybackHandle>;

    /// Stop the active source, if any
    fn stop(&mut self);

    /// The analyser tap, when this sink has one
    fn analyser(&self) -> Option<&Arc<Analyser>>;
}

/// Handle to an active (or already finished) playback
///
/// Cloneable; all clones observe the same end-of-buffer notification. If the
/// source is stopped before its natural end, the notification never fires and
/// [`PlaybackHandle::wait_ended`] resolves to `false`.
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    ended: watch::Receiver<bool>,
}

impl PlaybackHandle {
    /// A handle whose playback already ended (used for empty buffers)
    #[must_use]
    pub fn already_ended() -> Self {
        let (_, ended) = watch::channel(true);
        Self { ended }
    }

    /// A fresh handle plus the sender that marks its natural end
    #[must_use]
    pub fn pending() -> (watch::Sender<bool>, Self) {
        let (tx, ended) = watch::channel(false);
        (tx, Self { ended })
    }

    /// Whether the buffer was played to its natural end
    #[must_use]
    pub fn is_finished(&self) -> bool {
        *self.ended.borrow()
    }

    /// Wait for the natural end of the buffer
    ///
    /// Resolves to `true` on natural end, `false` if the source was detached
    /// (stopped) first.
    pub async fn wait_ended(&mut self) -> bool {
        if *self.ended.borrow() {
            return true;
        }
        match self.ended.changed().await {
            Ok(()) => *self.ended.borrow(),
            // Sender dropped without firing: source was stopped
            Err(_) => false,
        }
    }
}

/// Plays audio buffers through the default output device
pub struct PlaybackSession {
    device: Device,
    config: StreamConfig,
    analyser: Arc<Analyser>,
    active: Option<Stream>,
}

impl PlaybackSession {
    /// Open the default output device at the service sample rate
    ///
    /// # Errors
    ///
    /// Returns error if no output device or no suitable config exists
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("no output device available".to_string()))?;

        let supported_config = device
            .supported_output_configs()
            .map_err(|e| Error::Audio(e.to_string()))?
            .find(|c| {
                c.channels() == 1
                    && c.min_sample_rate() <= SampleRate(SAMPLE_RATE)
                    && c.max_sample_rate() >= SampleRate(SAMPLE_RATE)
            })
            .or_else(|| {
                // Fallback: try stereo
                device.supported_output_configs().ok()?.find(|c| {
                    c.channels() == 2
                        && c.min_sample_rate() <= SampleRate(SAMPLE_RATE)
                        && c.max_sample_rate() >= SampleRate(SAMPLE_RATE)
                })
            })
            .ok_or_else(|| Error::Audio("no suitable output config found".to_string()))?;

        let config = supported_config
            .with_sample_rate(SampleRate(SAMPLE_RATE))
            .config();

        tracing::debug!(
            device = device.name().unwrap_or_default(),
            sample_rate = SAMPLE_RATE,
            channels = config.channels,
            "audio playback initialized"
        );

        Ok(Self {
            device,
            config,
            analyser: Arc::new(Analyser::new()),
            active: None,
        })
    }
}

impl AudioSink for PlaybackSession {
    fn start(&mut self, buffer: &AudioBuffer) -> Result<PlaybackHandle> {
        // Exclusive source: never layer two playbacks
        self.stop();

        if buffer.is_empty() {
            tracing::debug!("empty audio buffer, reporting immediate end");
            return Ok(PlaybackHandle::already_ended());
        }

        let samples: Arc<[f32]> = Arc::from(buffer.samples());
        let channels = usize::from(self.config.channels);
        let analyser = Arc::clone(&self.analyser);
        let (ended_tx, handle) = PlaybackHandle::pending();

        let mut pos = 0usize;
        let mut notified = false;

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let start = pos;

                    for frame in data.chunks_mut(channels) {
                        let sample = if pos < samples.len() {
                            let s = samples[pos];
                            pos += 1;
                            s
                        } else {
                            if !notified {
                                notified = true;
                                let _ = ended_tx.send(true);
                            }
                            0.0
                        };

                        for out in frame.iter_mut() {
                            *out = sample;
                        }
                    }

                    analyser.push_samples(&samples[start..pos]);
                },
                |err| {
                    tracing::error!(error = %err, "audio playback error");
                },
                None,
            )
            .map_err(|e| Error::Audio(e.to_string()))?;

        // Verify the stream actually starts instead of fire-and-forget
        stream.play().map_err(|e| Error::Audio(e.to_string()))?;
        self.active = Some(stream);

        tracing::debug!(
            samples = buffer.len(),
            duration_secs = buffer.duration_secs(),
            "playback started"
        );

        Ok(handle)
    }

    fn stop(&mut self) {
        if let Some(stream) = self.active.take() {
            // Dropping the stream detaches the callback; its end notification
            // can no longer fire
            drop(stream);
            self.analyser.clear();
            tracing::debug!("playback stopped");
        }
    }

    fn analyser(&self) -> Option<&Arc<Analyser>> {
        Some(&self.analyser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn already_ended_handle_reports_finished() {
        let mut handle = PlaybackHandle::already_ended();
        assert!(handle.is_finished());
        assert!(handle.wait_ended().await);
    }

    #[tokio::test]
    async fn pending_handle_finishes_when_signaled() {
        let (tx, mut handle) = PlaybackHandle::pending();
        assert!(!handle.is_finished());

        tx.send(true).unwrap();
        assert!(handle.wait_ended().await);
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn detached_handle_never_reports_natural_end() {
        let (tx, mut handle) = PlaybackHandle::pending();
        drop(tx);

        assert!(!handle.wait_ended().await);
        assert!(!handle.is_finished());
    }
}
