//! Muyassar - Voice-enabled Tafsir Al-Muyassar companion
//!
//! This library provides the core functionality for the Muyassar client:
//! - Interpretation requests against the Gemini text-generation API
//! - Speech synthesis, raw-PCM decoding, and local audio playback
//! - A session state machine tying the two together
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  CLI / REPL                          │
//! │   interpret  │  ask  │  listen/stop  │  language    │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │               Tafsir Session                         │
//! │   Prompts  │  Status  │  Cached audio  │  Playback  │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │            Gemini (REST API)                         │
//! │   generateContent  │  TTS (raw PCM)                 │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod genai;
pub mod session;
pub mod tafsir;
pub mod visualizer;

pub use audio::{AudioBuffer, Analyser, PlaybackSession, SAMPLE_RATE};
pub use config::Config;
pub use error::{Error, Result};
pub use genai::{GeminiClient, TafsirBackend};
pub use session::{RequestSequence, RequestToken, Status, TafsirSession};
pub use tafsir::{Language, Surah, build_query, surah_by_number, system_instruction};
