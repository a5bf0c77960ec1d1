//! Session state machine tying interpretation requests to speech playback
//!
//! States: `Idle → GeneratingText → Idle` for the text half and
//! `Idle → GeneratingAudio → Playing → Idle` for the speech half, with
//! `Error` reachable from either generating state. A successful
//! interpretation survives a later audio failure; audio state never ends up
//! partially populated.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::Result;
use crate::audio::{AudioBuffer, AudioSink, PlaybackHandle, decode_audio_payload};
use crate::genai::TafsirBackend;
use crate::tafsir::{Language, system_instruction};

/// Session status, mirrored by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing in flight
    #[default]
    Idle,
    /// Waiting on the text service
    GeneratingText,
    /// Waiting on the speech service
    GeneratingAudio,
    /// A buffer is playing
    Playing,
    /// The last request failed; a localized message is available
    Error,
}

/// Monotonic sequence for in-flight request invalidation
///
/// Issuing a new token makes every earlier token stale, so a response that
/// arrives after the user has moved on is discarded instead of overwriting
/// fresher state.
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    /// Issue the next token, invalidating all earlier ones
    #[must_use]
    pub fn issue(&self) -> RequestToken {
        let seq = self.latest.fetch_add(1, Ordering::Relaxed) + 1;
        RequestToken {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// Token tied to one issued request
#[derive(Debug)]
pub struct RequestToken {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestToken {
    /// Whether this token is still the latest issued
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Relaxed) == self.seq
    }
}

/// Interpretation and playback session
pub struct TafsirSession {
    backend: Arc<dyn TafsirBackend>,
    sink: Box<dyn AudioSink>,
    language: Language,
    status: Status,
    interpretation: Option<String>,
    /// Cached playable buffer for the current interpretation
    audio: Option<Arc<AudioBuffer>>,
    handle: Option<PlaybackHandle>,
    error: Option<&'static str>,
    requests: RequestSequence,
}

impl TafsirSession {
    /// Create a session over a backend and an audio sink
    #[must_use]
    pub fn new(backend: Arc<dyn TafsirBackend>, sink: Box<dyn AudioSink>, language: Language) -> Self {
        Self {
            backend,
            sink,
            language,
            status: Status::Idle,
            interpretation: None,
            audio: None,
            handle: None,
            error: None,
            requests: RequestSequence::default(),
        }
    }

    /// Current interface language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Current status, reaping a naturally ended playback first
    pub fn status(&mut self) -> Status {
        if let Some(handle) = &self.handle
            && handle.is_finished()
        {
            self.handle = None;
            if self.status == Status::Playing {
                self.status = Status::Idle;
            }
        }
        self.status
    }

    /// The current interpretation text, if any
    #[must_use]
    pub fn interpretation(&self) -> Option<&str> {
        self.interpretation.as_deref()
    }

    /// The cached audio buffer, if one was synthesized
    #[must_use]
    pub fn cached_audio(&self) -> Option<&Arc<AudioBuffer>> {
        self.audio.as_ref()
    }

    /// Localized message for the last failure, if the session is in `Error`
    #[must_use]
    pub const fn error_message(&self) -> Option<&'static str> {
        self.error
    }

    /// A clone of the active playback handle, if playback is running
    #[must_use]
    pub fn playback_handle(&self) -> Option<PlaybackHandle> {
        self.handle.clone()
    }

    /// The sink's analyser tap, for the visualizer
    #[must_use]
    pub fn analyser(&self) -> Option<&Arc<crate::audio::Analyser>> {
        self.sink.analyser()
    }

    /// Request a new interpretation
    ///
    /// Any active playback is halted and its buffer discarded before the
    /// request proceeds. Returns `Ok(None)` when a newer request superseded
    /// this one while it was in flight.
    ///
    /// # Errors
    ///
    /// Returns `Error::Generation` on failure; the session status becomes
    /// `Error` with a localized message
    pub async fn interpret(&mut self, query: &str) -> Result<Option<&str>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let token = self.requests.issue();

        // Forcibly halt playback and drop stale audio/text state
        self.sink.stop();
        self.handle = None;
        self.audio = None;
        self.interpretation = None;
        self.error = None;
        self.status = Status::GeneratingText;

        let result = self
            .backend
            .generate_text(query, system_instruction(self.language))
            .await;

        if !token.is_current() {
            tracing::debug!("discarding stale interpretation response");
            return Ok(None);
        }

        match result {
            Ok(text) => {
                self.interpretation = Some(text);
                self.status = Status::Idle;
                Ok(self.interpretation.as_deref())
            }
            Err(e) => {
                tracing::warn!(error = %e, "interpretation request failed");
                self.status = Status::Error;
                self.error = Some(self.language.generation_error_message());
                Err(e)
            }
        }
    }

    /// Synthesize (or reuse) audio for the current interpretation and play it
    ///
    /// With a cached buffer present the speech service is not re-invoked.
    /// Returns `Ok(false)` when there is no interpretation to speak or a
    /// newer request superseded this one.
    ///
    /// # Errors
    ///
    /// Returns the underlying error on synthesis/decode/playback failure; the
    /// interpretation text is left intact
    pub async fn listen(&mut self) -> Result<bool> {
        let Some(text) = self.interpretation.clone() else {
            return Ok(false);
        };

        // Idempotent replay: cached buffer skips regeneration
        if let Some(buffer) = self.audio.clone() {
            self.start_playback(&buffer)?;
            return Ok(true);
        }

        let token = self.requests.issue();
        self.error = None;
        self.status = Status::GeneratingAudio;

        let result = self.fetch_audio(&text).await;

        if !token.is_current() {
            tracing::debug!("discarding stale audio response");
            return Ok(false);
        }

        match result {
            Ok(buffer) => {
                let buffer = Arc::new(buffer);
                self.audio = Some(Arc::clone(&buffer));
                self.start_playback(&buffer)?;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "speech request failed");
                // No partial buffer is retained
                self.audio = None;
                self.status = Status::Error;
                self.error = Some(self.language.audio_error_message());
                Err(e)
            }
        }
    }

    /// Stop playback
    ///
    /// A no-op when no source is active. The detached source fires no
    /// further end-of-buffer notification.
    pub fn stop(&mut self) {
        self.sink.stop();
        self.handle = None;
        if self.status == Status::Playing {
            self.status = Status::Idle;
        }
    }

    /// Switch interface language, clearing interpretation text, cached
    /// audio, and any active playback
    pub fn toggle_language(&mut self) -> Language {
        // Invalidate any in-flight request before clearing state
        let _ = self.requests.issue();

        self.sink.stop();
        self.handle = None;
        self.interpretation = None;
        self.audio = None;
        self.error = None;
        self.status = Status::Idle;
        self.language = self.language.toggled();
        self.language
    }

    async fn fetch_audio(&self, text: &str) -> Result<AudioBuffer> {
        let payload = self.backend.synthesize(text).await?;
        let bytes = decode_audio_payload(&payload)?;
        Ok(AudioBuffer::from_pcm16(&bytes))
    }

    fn start_playback(&mut self, buffer: &AudioBuffer) -> Result<()> {
        let handle = match self.sink.start(buffer) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "failed to start playback");
                self.status = Status::Error;
                self.error = Some(self.language.audio_error_message());
                return Err(e);
            }
        };

        // A zero-length buffer ends immediately
        self.status = if handle.is_finished() {
            Status::Idle
        } else {
            Status::Playing
        };
        self.handle = Some(handle);
        Ok(())
    }
}
