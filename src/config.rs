//! Модуль конфигурации пайплайна
//!
//! Этот модуль содержит структуры и перечисления для настройки генерации.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LingvoClipError, Result};
use crate::images::ImageSelection;

/// Язык озвучки
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    /// Английский
    English,
    /// Русский
    Russian,
}

impl Language {
    /// Код языка для TTS сервиса
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// Подпись языка в субтитрах
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Russian => "RU",
        }
    }
}

/// Режим вывода пайплайна
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputMode {
    /// Только аудио
    Audio,
    /// Видео с полноэкранными субтитрами
    CaptionVideo,
    /// Видео с фоновыми изображениями и субтитрами
    ImageVideo,
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::ImageVideo
    }
}

impl OutputMode {
    /// Имя итогового файла по умолчанию для режима
    pub fn default_output_file(&self) -> &'static str {
        match self {
            Self::Audio => "result.mp3",
            Self::CaptionVideo | Self::ImageVideo => "result.mp4",
        }
    }

    /// Создается ли в этом режиме видеодорожка
    pub fn is_video(&self) -> bool {
        !matches!(self, Self::Audio)
    }
}

impl FromStr for OutputMode {
    type Err = LingvoClipError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "audio" => Ok(Self::Audio),
            "captions" | "caption" => Ok(Self::CaptionVideo),
            "images" | "image" => Ok(Self::ImageVideo),
            other => Err(LingvoClipError::Configuration(format!(
                "Unknown output mode: '{}'. Supported: audio, captions, images",
                other
            ))),
        }
    }
}

/// Конфигурация пайплайна
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Путь к файлу с парами фраз
    pub phrases_file: PathBuf,
    /// Путь к итоговому файлу; None — имя по умолчанию для режима
    pub output_file: Option<PathBuf>,
    /// Родительская директория для временных файлов; None — системная
    pub temp_parent_dir: Option<PathBuf>,
    /// Режим вывода
    pub mode: OutputMode,
    /// Исходный язык
    pub source_language: Language,
    /// Язык перевода
    pub target_language: Language,
    /// Длительность паузы между фразами в секундах
    pub silence_duration: f64,
    /// Частота дискретизации аудио
    pub sample_rate: u32,
    /// Частота кадров видео
    pub frame_rate: u32,
    /// Ширина холста видео
    pub canvas_width: u32,
    /// Высота холста видео
    pub canvas_height: u32,
    /// Размер шрифта субтитров
    pub font_size: u32,
    /// Политика выбора изображения из найденных кандидатов
    pub image_selection: ImageSelection,
    /// Максимальное количество кандидатов при поиске изображения
    pub max_image_candidates: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            phrases_file: PathBuf::from("phrases.txt"),
            output_file: None,
            temp_parent_dir: None,
            mode: OutputMode::default(),
            source_language: Language::English,
            target_language: Language::Russian,
            silence_duration: 1.0,
            sample_rate: 44100,
            frame_rate: 24,
            canvas_width: 1280,
            canvas_height: 720,
            font_size: 50,
            image_selection: ImageSelection::default(),
            max_image_candidates: 3,
        }
    }
}

impl PipelineConfig {
    /// Путь к итоговому файлу с учетом режима
    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.mode.default_output_file()))
    }

    /// Проверка корректности конфигурации
    pub fn validate(&self) -> Result<()> {
        if !self.silence_duration.is_finite() || self.silence_duration <= 0.0 {
            return Err(LingvoClipError::Configuration(
                "silence_duration must be a positive number of seconds".to_string(),
            ));
        }
        if self.sample_rate == 0 {
            return Err(LingvoClipError::Configuration(
                "sample_rate must be non-zero".to_string(),
            ));
        }
        // Файлы озвучки именуются по номеру фразы и коду языка;
        // совпадение языков привело бы к перезаписи файла
        if self.source_language == self.target_language {
            return Err(LingvoClipError::Configuration(
                "source_language and target_language must differ".to_string(),
            ));
        }
        if self.mode.is_video() {
            if self.frame_rate == 0 {
                return Err(LingvoClipError::Configuration(
                    "frame_rate must be non-zero".to_string(),
                ));
            }
            if self.canvas_width == 0 || self.canvas_height == 0 {
                return Err(LingvoClipError::Configuration(
                    "canvas size must be non-zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.silence_duration, 1.0);
        assert_eq!(config.canvas_width, 1280);
        assert_eq!(config.canvas_height, 720);
        assert_eq!(config.frame_rate, 24);
    }

    #[test]
    fn test_output_path_follows_mode() {
        let mut config = PipelineConfig {
            mode: OutputMode::Audio,
            ..PipelineConfig::default()
        };
        assert_eq!(config.output_path(), PathBuf::from("result.mp3"));

        config.mode = OutputMode::ImageVideo;
        assert_eq!(config.output_path(), PathBuf::from("result.mp4"));

        config.output_file = Some(PathBuf::from("custom.mp4"));
        assert_eq!(config.output_path(), PathBuf::from("custom.mp4"));
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!(OutputMode::from_str("audio").unwrap(), OutputMode::Audio);
        assert_eq!(
            OutputMode::from_str("captions").unwrap(),
            OutputMode::CaptionVideo
        );
        assert_eq!(OutputMode::from_str("IMAGES").unwrap(), OutputMode::ImageVideo);
        assert!(OutputMode::from_str("slides").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = PipelineConfig {
            silence_duration: 0.0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());

        config.silence_duration = 1.0;
        config.frame_rate = 0;
        assert!(config.validate().is_err());

        // Частота кадров не проверяется в аудиорежиме
        config.mode = OutputMode::Audio;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_same_source_and_target_language() {
        let config = PipelineConfig {
            target_language: Language::English,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Russian.code(), "ru");
        assert_eq!(Language::English.label(), "EN");
        assert_eq!(Language::Russian.label(), "RU");
    }
}
