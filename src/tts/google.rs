//! Модуль для интеграции с Google Translate TTS
//!
//! Этот модуль содержит синтезатор речи на основе бесплатного эндпоинта
//! Google Translate (тот же, что используют браузерные клиенты).

use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Language;
use crate::error::{LingvoClipError, Result};
use crate::media::audio;
use crate::tts::SpeechSynthesizer;

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Синтезатор речи через Google Translate
pub struct GoogleTranslateTts {
    client: Client,
}

impl GoogleTranslateTts {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for GoogleTranslateTts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        output_path: &Path,
    ) -> Result<f64> {
        log::debug!("Sending TTS request for language '{}'", language.code());
        let response = self
            .client
            .get(TTS_ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.code()),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => format!("Failed to read error response: {}", e),
            };
            log::error!("TTS request failed (status {}): {}", status, error_text);
            return Err(LingvoClipError::TtsGeneration(format!(
                "TTS service returned status {}",
                status
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(LingvoClipError::TtsGeneration(
                "TTS service returned an empty response".to_string(),
            ));
        }

        tokio::fs::write(output_path, &bytes).await?;
        log::debug!("Saved TTS audio to {}", output_path.display());

        let duration = audio::get_audio_duration(output_path)?;
        Ok(duration)
    }
}
