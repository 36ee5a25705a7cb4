//! Модуль обработки ошибок библиотеки lingvoclip
//!
//! Этот модуль содержит типы ошибок, которые могут возникнуть при работе библиотеки.

use thiserror::Error;

/// Ошибки библиотеки lingvoclip
#[derive(Debug, Error)]
pub enum LingvoClipError {
    /// Ошибка HTTP запроса
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Ошибка ввода-вывода
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ошибка генерации TTS
    #[error("TTS generation error: {0}")]
    TtsGeneration(String),

    /// Ошибка получения изображения
    #[error("Image acquisition error: {0}")]
    ImageAcquisition(String),

    /// Ошибка обработки аудио
    #[error("Audio processing error: {0}")]
    AudioProcessing(String),

    /// Ошибка обработки видео
    #[error("Video processing error: {0}")]
    VideoProcessing(String),

    /// Ошибка конфигурации
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Файл не найден
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Другая ошибка
    #[error("Other error: {0}")]
    Other(String),
}

impl From<&str> for LingvoClipError {
    fn from(s: &str) -> Self {
        LingvoClipError::Other(s.to_string())
    }
}

impl From<String> for LingvoClipError {
    fn from(s: String) -> Self {
        LingvoClipError::Other(s)
    }
}

/// Тип Result для библиотеки lingvoclip
pub type Result<T> = std::result::Result<T, LingvoClipError>;
