//! Библиотека lingvoclip
//!
//! Эта библиотека генерирует аудио- и видеофайлы для изучения языка из
//! текстового файла с парами фраз `<оригинал> ||| <перевод>`. Каждая фраза
//! озвучивается на двух языках через внешний TTS сервис, дополняется
//! паузами и, в видеорежимах, субтитрами на фоне изображения или
//! однотонного холста; сегменты склеиваются в порядке следования фраз
//! в один итоговый файл.

pub mod config;
pub mod error;
pub mod images;
pub mod media;
pub mod phrases;
pub mod segment;
pub mod timeline;
pub mod tts;
pub mod utils;

use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::error::{LingvoClipError, Result};
use crate::images::wikimedia::WikimediaImageProvider;
use crate::images::ImageProvider;
use crate::segment::SegmentSynthesizer;
use crate::timeline::Timeline;
use crate::tts::google::GoogleTranslateTts;
use crate::tts::SpeechSynthesizer;
use crate::utils::temp::TempArtifacts;

/// Исход запуска пайплайна
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Итоговый файл записан
    Completed(PathBuf),
    /// Файл с фразами пуст или отсутствует; вывод не создавался
    NothingToDo,
}

/// Основная структура пайплайна
pub struct Pipeline {
    config: PipelineConfig,
    tts: Box<dyn SpeechSynthesizer>,
    images: Box<dyn ImageProvider>,
}

impl Pipeline {
    /// Создать пайплайн с коллабораторами по умолчанию
    pub fn new(config: PipelineConfig) -> Self {
        let images = WikimediaImageProvider::new(config.max_image_candidates);
        Self {
            config,
            tts: Box::new(GoogleTranslateTts::new()),
            images: Box::new(images),
        }
    }

    /// Создать пайплайн с внешними коллабораторами
    pub fn with_collaborators(
        config: PipelineConfig,
        tts: Box<dyn SpeechSynthesizer>,
        images: Box<dyn ImageProvider>,
    ) -> Self {
        Self {
            config,
            tts,
            images,
        }
    }

    /// Запустить пайплайн: загрузка фраз, синтез сегментов, сборка
    /// таймлайна и запись итогового файла.
    pub async fn run(&self) -> Result<PipelineOutcome> {
        self.config.validate()?;

        if !utils::ffmpeg::check_ffmpeg_installed() {
            return Err(LingvoClipError::Configuration(
                "ffmpeg and ffprobe must be available in PATH".to_string(),
            ));
        }

        log::info!("Loading phrases from {}", self.config.phrases_file.display());
        let phrases = phrases::load_phrases(&self.config.phrases_file)?;
        if phrases.is_empty() {
            log::warn!("File with phrases is empty or not found");
            return Ok(PipelineOutcome::NothingToDo);
        }

        let mut temp = TempArtifacts::new(self.config.temp_parent_dir.as_deref())?;
        let synthesizer =
            SegmentSynthesizer::new(&self.config, self.tts.as_ref(), self.images.as_ref());

        // Фразы обрабатываются строго последовательно, в порядке файла
        let mut clips = Vec::with_capacity(phrases.len());
        for (index, pair) in phrases.pairs.iter().enumerate() {
            let clip = synthesizer.synthesize(index, pair, &mut temp).await?;
            clips.push(clip);
        }

        let timeline = Timeline::assemble(clips);
        log::info!(
            "Assembled timeline: {} phrases, {:.1}s total",
            timeline.len(),
            timeline.total_duration()
        );

        // Временные файлы удаляются независимо от исхода записи
        let write_result = media::write_output(&timeline, &self.config, &mut temp);
        temp.cleanup();
        let output_path = write_result?;

        // Пользовательское подтверждение печатает вызывающая сторона
        log::debug!("Result file is saved as '{}'", output_path.display());
        Ok(PipelineOutcome::Completed(output_path))
    }
}

/// Запуск пайплайна с коллабораторами по умолчанию
pub async fn generate(config: PipelineConfig) -> Result<PipelineOutcome> {
    Pipeline::new(config).run().await
}
