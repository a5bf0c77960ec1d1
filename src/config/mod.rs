//! Configuration management for Muyassar
//!
//! Precedence for every setting is env > config file > default.

pub mod file;

use secrecy::SecretString;

use crate::tafsir::Language;
use crate::{Error, Result};

/// Default text-generation model
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default TTS-capable model
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default prebuilt voice. Charon is a deep male voice, suitable for
/// recitation-adjacent content.
pub const DEFAULT_TTS_VOICE: &str = "Charon";

/// Default Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Muyassar configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub api_key: SecretString,

    /// Gemini API base URL
    pub base_url: String,

    /// Text-generation model identifier
    pub text_model: String,

    /// TTS-capable model identifier
    pub tts_model: String,

    /// Prebuilt voice name for speech synthesis
    pub tts_voice: String,

    /// Default interface language
    pub language: Language,
}

impl Config {
    /// Load configuration from the standard config file and environment
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no API key is available from either source
    pub fn load() -> Result<Self> {
        let fc = file::load_config_file();
        Self::from_overlay(fc)
    }

    /// Build configuration from a loaded file overlay plus the environment
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no API key is available from either source
    pub fn from_overlay(fc: file::MuyassarConfigFile) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or(fc.gemini.api_key)
            .ok_or_else(|| {
                Error::Config(
                    "no Gemini API key: set GEMINI_API_KEY or add [gemini] api_key to the config file"
                        .to_string(),
                )
            })?;

        let base_url = std::env::var("MUYASSAR_BASE_URL")
            .ok()
            .or(fc.gemini.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let text_model = std::env::var("MUYASSAR_TEXT_MODEL")
            .ok()
            .or(fc.gemini.text_model)
            .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string());

        let tts_model = std::env::var("MUYASSAR_TTS_MODEL")
            .ok()
            .or(fc.voice.tts_model)
            .unwrap_or_else(|| DEFAULT_TTS_MODEL.to_string());

        let tts_voice = std::env::var("MUYASSAR_TTS_VOICE")
            .ok()
            .or(fc.voice.tts_voice)
            .unwrap_or_else(|| DEFAULT_TTS_VOICE.to_string());

        let language = std::env::var("MUYASSAR_LANGUAGE")
            .ok()
            .or(fc.language)
            .as_deref()
            .map_or(Language::Arabic, Language::from_code);

        Ok(Self {
            api_key: api_key.into(),
            base_url,
            text_model,
            tts_model,
            tts_voice,
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(toml: &str) -> file::MuyassarConfigFile {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn defaults_apply_when_overlay_is_empty() {
        let fc = overlay("[gemini]\napi_key = \"k\"\n");
        let config = Config::from_overlay(fc).unwrap();

        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.tts_model, DEFAULT_TTS_MODEL);
        assert_eq!(config.tts_voice, DEFAULT_TTS_VOICE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.language, Language::Arabic);
    }

    #[test]
    fn file_values_override_defaults() {
        let fc = overlay(
            "language = \"en\"\n\
             [gemini]\napi_key = \"k\"\ntext_model = \"gemini-x\"\n\
             [voice]\ntts_voice = \"Kore\"\n",
        );
        let config = Config::from_overlay(fc).unwrap();

        assert_eq!(config.text_model, "gemini-x");
        assert_eq!(config.tts_voice, "Kore");
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        // Guard: this test is meaningless if the environment provides a key
        if std::env::var("GEMINI_API_KEY").is_ok() {
            return;
        }
        let err = Config::from_overlay(file::MuyassarConfigFile::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
