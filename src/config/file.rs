//! TOML configuration file loading
//!
//! Supports `~/.config/muyassar/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of defaults.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct MuyassarConfigFile {
    /// Default interface language ("ar" or "en")
    #[serde(default)]
    pub language: Option<String>,

    /// Gemini API configuration
    #[serde(default)]
    pub gemini: GeminiFileConfig,

    /// Voice/audio configuration
    #[serde(default)]
    pub voice: VoiceFileConfig,
}

/// Gemini API configuration
#[derive(Debug, Default, Deserialize)]
pub struct GeminiFileConfig {
    /// API key (env `GEMINI_API_KEY` takes precedence)
    pub api_key: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Text-generation model identifier
    pub text_model: Option<String>,
}

/// Voice processing configuration
#[derive(Debug, Default, Deserialize)]
pub struct VoiceFileConfig {
    /// TTS-capable model identifier
    pub tts_model: Option<String>,

    /// Prebuilt voice name (e.g. "Charon")
    pub tts_voice: Option<String>,
}

/// Load the TOML config file from the standard path
///
/// Returns `MuyassarConfigFile::default()` if the file doesn't exist or can't
/// be parsed.
#[must_use]
pub fn load_config_file() -> MuyassarConfigFile {
    let Some(path) = config_file_path() else {
        return MuyassarConfigFile::default();
    };

    load_config_file_from(&path)
}

/// Load a TOML config file from an explicit path
#[must_use]
pub fn load_config_file_from(path: &std::path::Path) -> MuyassarConfigFile {
    if !path.exists() {
        return MuyassarConfigFile::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                MuyassarConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            MuyassarConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/muyassar/config.toml`
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("muyassar").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let fc = load_config_file_from(std::path::Path::new("/nonexistent/config.toml"));
        assert!(fc.gemini.api_key.is_none());
        assert!(fc.voice.tts_voice.is_none());
    }

    #[test]
    fn partial_file_overlays_only_given_fields() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            "language = \"en\"\n\n[voice]\ntts_voice = \"Kore\"\n"
        )
        .unwrap();

        let fc = load_config_file_from(f.path());
        assert_eq!(fc.language.as_deref(), Some("en"));
        assert_eq!(fc.voice.tts_voice.as_deref(), Some("Kore"));
        assert!(fc.voice.tts_model.is_none());
        assert!(fc.gemini.text_model.is_none());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "this is not toml [[[").unwrap();

        let fc = load_config_file_from(f.path());
        assert!(fc.language.is_none());
    }
}
