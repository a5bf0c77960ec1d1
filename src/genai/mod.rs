//! Gemini REST API client
//!
//! Two calls, both through `models/{model}:generateContent`: plain text
//! generation for interpretations, and speech synthesis returning a
//! base64-encoded raw PCM payload.

pub mod types;

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::Config;
use crate::{Error, Result};
use self::types::{Content, GenerateContentRequest, GenerationConfig, SpeechConfig};

/// Fixed sampling temperature for interpretation requests. Low randomness
/// favors consistent, factual output for religious content.
pub const TEMPERATURE: f32 = 0.3;

/// Response modality requested from the TTS model
const AUDIO_MODALITY: &str = "AUDIO";

/// Backend seam for the session controller
///
/// The production implementation is [`GeminiClient`]; tests drive the session
/// with counting fakes.
#[async_trait]
pub trait TafsirBackend: Send + Sync {
    /// Generate interpretation text for a query
    ///
    /// # Errors
    ///
    /// Returns `Error::Generation` on remote failure or an empty response
    async fn generate_text(&self, query: &str, system_instruction: &str) -> Result<String>;

    /// Synthesize speech for a text, returning the base64-encoded raw PCM
    /// payload as received from the service
    ///
    /// # Errors
    ///
    /// Returns `Error::Tts` on remote failure or a missing payload
    async fn synthesize(&self, text: &str) -> Result<String>;
}

/// Client for the Gemini generative-AI REST API
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: secrecy::SecretString,
    base_url: String,
    text_model: String,
    tts_model: String,
    tts_voice: String,
}

impl GeminiClient {
    /// Create a client from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            tts_model: config.tts_model.clone(),
            tts_voice: config.tts_voice.clone(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }
}

#[async_trait]
impl TafsirBackend for GeminiClient {
    async fn generate_text(&self, query: &str, system_instruction: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(query)],
            system_instruction: Some(Content::text(system_instruction)),
            generation_config: Some(GenerationConfig {
                temperature: Some(TEMPERATURE),
                ..GenerationConfig::default()
            }),
        };

        tracing::debug!(model = %self.text_model, "requesting interpretation");

        let response = self
            .client
            .post(self.endpoint(&self.text_model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Generation(format!("Gemini error {status}: {body}")));
        }

        let body: types::GenerateContentResponse = response.json().await?;
        let text = body
            .first_text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Generation("empty response from text model".to_string()))?;

        Ok(text.to_string())
    }

    async fn synthesize(&self, text: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(text)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec![AUDIO_MODALITY]),
                speech_config: Some(SpeechConfig::prebuilt_voice(&self.tts_voice)),
                ..GenerationConfig::default()
            }),
        };

        tracing::debug!(
            model = %self.tts_model,
            voice = %self.tts_voice,
            chars = text.len(),
            "requesting speech synthesis"
        );

        let response = self
            .client
            .post(self.endpoint(&self.tts_model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Tts(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Tts(format!("Gemini TTS error {status}: {body}")));
        }

        let body: types::GenerateContentResponse = response.json().await?;
        body.first_inline_data()
            .map(str::to_string)
            .ok_or_else(|| Error::Tts("no audio data received".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::MuyassarConfigFile;

    fn test_client() -> GeminiClient {
        let fc: MuyassarConfigFile = toml::from_str(
            "[gemini]\napi_key = \"test-key\"\nbase_url = \"https://example.invalid/\"\n",
        )
        .unwrap();
        GeminiClient::new(&Config::from_overlay(fc).unwrap())
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = test_client();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.invalid/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
