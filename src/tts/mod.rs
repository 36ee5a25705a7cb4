//! Модуль синтеза речи
//!
//! Этот модуль содержит интерфейс внешнего синтезатора речи и его реализации.

pub mod google;

use std::path::Path;

use async_trait::async_trait;

use crate::config::Language;
use crate::error::Result;

/// Интерфейс внешнего синтезатора речи.
///
/// Реализация записывает аудиофайл по указанному пути и возвращает его
/// длительность в секундах. Одна фраза — один вызов, без повторных попыток;
/// сбой синтеза фатален для всего запуска пайплайна.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: Language, output_path: &Path)
        -> Result<f64>;
}
