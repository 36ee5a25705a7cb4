//! Модуль записи итогового медиафайла
//!
//! Этот модуль сериализует собранный таймлайн в аудио- или видеофайл.

pub mod audio;
pub mod video;

use std::path::{Path, PathBuf};

use crate::config::{OutputMode, PipelineConfig};
use crate::error::{LingvoClipError, Result};
use crate::segment::{AudioSegment, PhraseClip};
use crate::timeline::Timeline;
use crate::utils::temp::TempArtifacts;

/// Запись таймлайна в итоговый файл.
///
/// Промежуточные файлы создаются во временной директории и регистрируются
/// в реестре; их удалением занимается вызывающая сторона.
pub fn write_output(
    timeline: &Timeline,
    config: &PipelineConfig,
    temp: &mut TempArtifacts,
) -> Result<PathBuf> {
    let output_path = config.output_path();
    log::info!("Writing {:?} output to {}", config.mode, output_path.display());

    match config.mode {
        OutputMode::Audio => write_audio(timeline, config, temp, &output_path)?,
        OutputMode::CaptionVideo | OutputMode::ImageVideo => {
            write_video(timeline, config, temp, &output_path)?
        }
    }

    Ok(output_path)
}

/// Подготовка WAV-частей аудиодорожки одной фразы.
///
/// Озвучка приводится к общему формату, тишина переиспользует один
/// заранее отрендеренный файл.
fn clip_audio_parts(
    clip: &PhraseClip,
    silence_file: &Path,
    config: &PipelineConfig,
    temp: &mut TempArtifacts,
) -> Result<Vec<PathBuf>> {
    let mut parts = Vec::with_capacity(clip.audio.len());
    for (position, segment) in clip.audio.iter().enumerate() {
        match segment {
            AudioSegment::Speech { path, .. } => {
                let wav = temp.create_path(&format!("part_{}_{}.wav", clip.index, position));
                audio::normalize_to_wav(path, config.sample_rate, &wav)?;
                parts.push(wav);
            }
            AudioSegment::Silence { .. } => parts.push(silence_file.to_path_buf()),
        }
    }
    Ok(parts)
}

fn write_audio(
    timeline: &Timeline,
    config: &PipelineConfig,
    temp: &mut TempArtifacts,
    output_path: &Path,
) -> Result<()> {
    let silence_file = temp.create_path("silence.wav");
    audio::generate_silence(config.silence_duration, config.sample_rate, &silence_file)?;

    let mut parts = Vec::new();
    for clip in timeline.clips() {
        parts.extend(clip_audio_parts(clip, &silence_file, config, temp)?);
    }

    let list = temp.create_path("concat_audio.txt");
    let combined = temp.create_path("combined.wav");
    audio::concat_audio_files(&parts, &list, &combined)?;
    audio::encode_mp3(&combined, output_path)
}

fn write_video(
    timeline: &Timeline,
    config: &PipelineConfig,
    temp: &mut TempArtifacts,
    output_path: &Path,
) -> Result<()> {
    let silence_file = temp.create_path("silence.wav");
    audio::generate_silence(config.silence_duration, config.sample_rate, &silence_file)?;

    let mut clip_files = Vec::with_capacity(timeline.len());
    for clip in timeline.clips() {
        let parts = clip_audio_parts(clip, &silence_file, config, temp)?;
        let list = temp.create_path(&format!("concat_audio_{}.txt", clip.index));
        let clip_audio = temp.create_path(&format!("clip_audio_{}.wav", clip.index));
        audio::concat_audio_files(&parts, &list, &clip_audio)?;

        let visual = clip.visual.as_ref().ok_or_else(|| {
            LingvoClipError::VideoProcessing(format!(
                "phrase {} has no visual segment",
                clip.index
            ))
        })?;

        let clip_file = temp.create_path(&format!("clip_{}.mp4", clip.index));
        video::render_phrase_clip(visual, &clip_audio, config, &clip_file)?;
        clip_files.push(clip_file);
    }

    let list = temp.create_path("concat_video.txt");
    video::concat_video_files(&clip_files, &list, output_path)
}
