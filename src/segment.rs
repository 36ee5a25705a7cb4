//! Модуль сборки сегментов фразы
//!
//! Для каждой пары фраз формируется фиксированная аудиопоследовательность
//! `[озвучка оригинала, пауза, озвучка перевода, пауза, пауза]` — двойная
//! пауза в конце дает дополнительную задержку перед следующей фразой.
//! В видеорежимах к фразе добавляется визуальный сегмент той же длительности.

use std::path::PathBuf;

use crate::config::{Language, OutputMode, PipelineConfig};
use crate::error::Result;
use crate::images::ImageProvider;
use crate::phrases::PhrasePair;
use crate::tts::SpeechSynthesizer;
use crate::utils::temp::TempArtifacts;

/// Аудиосегмент: озвучка или тишина
#[derive(Debug, Clone, PartialEq)]
pub enum AudioSegment {
    /// Синтезированная речь
    Speech { path: PathBuf, duration: f64 },
    /// Синтетическая тишина фиксированной длительности
    Silence { duration: f64 },
}

impl AudioSegment {
    pub fn duration(&self) -> f64 {
        match self {
            Self::Speech { duration, .. } => *duration,
            Self::Silence { duration } => *duration,
        }
    }
}

/// Фон визуального сегмента
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Скачанное изображение
    Image(PathBuf),
    /// Однотонный фон (запасной вариант)
    Color,
}

/// Расположение субтитров в кадре
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionLayout {
    /// Внизу кадра поверх фона
    Bottom,
    /// По центру кадра
    Center,
}

/// Визуальный сегмент фразы
#[derive(Debug, Clone, PartialEq)]
pub struct VisualSegment {
    pub background: Background,
    pub caption: String,
    pub layout: CaptionLayout,
    pub duration: f64,
}

/// Сегменты одной фразы
#[derive(Debug, Clone)]
pub struct PhraseClip {
    pub index: usize,
    pub audio: Vec<AudioSegment>,
    pub visual: Option<VisualSegment>,
}

impl PhraseClip {
    /// Суммарная длительность аудиосегментов фразы
    pub fn audio_duration(&self) -> f64 {
        self.audio.iter().map(AudioSegment::duration).sum()
    }
}

/// Сборщик сегментов фразы
pub struct SegmentSynthesizer<'a> {
    config: &'a PipelineConfig,
    tts: &'a dyn SpeechSynthesizer,
    images: &'a dyn ImageProvider,
}

impl<'a> SegmentSynthesizer<'a> {
    pub fn new(
        config: &'a PipelineConfig,
        tts: &'a dyn SpeechSynthesizer,
        images: &'a dyn ImageProvider,
    ) -> Self {
        Self {
            config,
            tts,
            images,
        }
    }

    /// Собрать сегменты одной фразы.
    ///
    /// Файлы озвучки и изображений создаются во временной директории и
    /// регистрируются в реестре. Сбой синтеза речи фатален и прерывает
    /// запуск; сбой получения изображения приводит к однотонному фону.
    pub async fn synthesize(
        &self,
        index: usize,
        pair: &PhrasePair,
        temp: &mut TempArtifacts,
    ) -> Result<PhraseClip> {
        let source = self
            .speech_segment(index, &pair.source_text, self.config.source_language, temp)
            .await?;
        let target = self
            .speech_segment(index, &pair.target_text, self.config.target_language, temp)
            .await?;
        let silence = AudioSegment::Silence {
            duration: self.config.silence_duration,
        };

        let audio = vec![source, silence.clone(), target, silence.clone(), silence];
        let mut clip = PhraseClip {
            index,
            audio,
            visual: None,
        };

        if self.config.mode.is_video() {
            clip.visual = Some(self.visual_segment(index, pair, clip.audio_duration(), temp).await);
        }

        Ok(clip)
    }

    async fn speech_segment(
        &self,
        index: usize,
        text: &str,
        language: Language,
        temp: &mut TempArtifacts,
    ) -> Result<AudioSegment> {
        // Имя файла уникально по номеру фразы и языку
        let path = temp.create_path(&format!("speech_{}_{}.mp3", index, language.code()));
        log::info!("Synthesizing {} speech for phrase {}", language.code(), index);
        let duration = self.tts.synthesize(text, language, &path).await?;
        Ok(AudioSegment::Speech { path, duration })
    }

    async fn visual_segment(
        &self,
        index: usize,
        pair: &PhrasePair,
        duration: f64,
        temp: &mut TempArtifacts,
    ) -> VisualSegment {
        let caption = format!(
            "{}: {}\n{}: {}",
            self.config.source_language.label(),
            pair.source_text,
            self.config.target_language.label(),
            pair.target_text
        );

        let (background, layout) = match self.config.mode {
            OutputMode::ImageVideo => (
                self.acquire_background(index, &pair.source_text, temp).await,
                CaptionLayout::Bottom,
            ),
            _ => (Background::Color, CaptionLayout::Center),
        };

        VisualSegment {
            background,
            caption,
            layout,
            duration,
        }
    }

    /// Получение фонового изображения; любой сбой дает однотонный фон
    async fn acquire_background(
        &self,
        index: usize,
        query: &str,
        temp: &mut TempArtifacts,
    ) -> Background {
        match self.images.acquire(query, temp.dir()).await {
            Ok(candidates) => {
                for path in &candidates {
                    temp.register(path.clone());
                }
                match self.config.image_selection.pick(&candidates) {
                    Some(path) => Background::Image(path.clone()),
                    None => {
                        log::warn!("No image found for phrase {}, using color background", index);
                        Background::Color
                    }
                }
            }
            Err(e) => {
                log::warn!(
                    "Image acquisition failed for phrase {}: {}, using color background",
                    index,
                    e
                );
                Background::Color
            }
        }
    }
}
