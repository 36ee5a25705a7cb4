//! Модуль для работы с аудио
//!
//! Этот модуль содержит операции над аудиофайлами: генерацию тишины,
//! приведение к общему формату, склейку и кодирование итогового файла.
//! Все операции выполняются через FFmpeg.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LingvoClipError, Result};
use crate::utils::ffmpeg::{run_ffmpeg_command, run_ffprobe_command};

/// Генерация тишины заданной длительности
pub fn generate_silence(duration: f64, sample_rate: u32, output_file: &Path) -> Result<()> {
    let args = vec![
        "-f".to_string(),
        "lavfi".to_string(),
        "-i".to_string(),
        format!("anullsrc=r={}:cl=mono", sample_rate),
        "-t".to_string(),
        format!("{:.3}", duration),
        output_file.to_string_lossy().into_owned(),
    ];

    run_ffmpeg_command(&args)
}

/// Приведение аудио к моно WAV с фиксированной частотой дискретизации.
///
/// Склейка без перекодирования требует одинакового формата всех частей.
pub fn normalize_to_wav(input_file: &Path, sample_rate: u32, output_file: &Path) -> Result<()> {
    let args = vec![
        "-i".to_string(),
        input_file.to_string_lossy().into_owned(),
        "-ar".to_string(),
        sample_rate.to_string(),
        "-ac".to_string(),
        "1".to_string(),
        output_file.to_string_lossy().into_owned(),
    ];

    run_ffmpeg_command(&args)
}

/// Запись списка файлов для concat-демуксера FFmpeg
pub(crate) fn write_concat_list(input_files: &[PathBuf], list_path: &Path) -> Result<()> {
    let mut list = std::fs::File::create(list_path)?;
    for file in input_files {
        writeln!(list, "file '{}'", file.display())?;
    }
    Ok(())
}

/// Склейка аудиофайлов одного формата без перекодирования
pub fn concat_audio_files(
    input_files: &[PathBuf],
    list_path: &Path,
    output_file: &Path,
) -> Result<()> {
    write_concat_list(input_files, list_path)?;

    let args = vec![
        "-f".to_string(),
        "concat".to_string(),
        "-safe".to_string(),
        "0".to_string(),
        "-i".to_string(),
        list_path.to_string_lossy().into_owned(),
        "-c".to_string(),
        "copy".to_string(),
        output_file.to_string_lossy().into_owned(),
    ];

    run_ffmpeg_command(&args)
}

/// Кодирование итогового аудиофайла в MP3
pub fn encode_mp3(input_file: &Path, output_file: &Path) -> Result<()> {
    let args = vec![
        "-i".to_string(),
        input_file.to_string_lossy().into_owned(),
        "-codec:a".to_string(),
        "libmp3lame".to_string(),
        "-q:a".to_string(),
        "2".to_string(),
        output_file.to_string_lossy().into_owned(),
    ];

    run_ffmpeg_command(&args)
}

/// Получение длительности аудиофайла в секундах
pub fn get_audio_duration(file_path: &Path) -> Result<f64> {
    let output = run_ffprobe_command(&[
        "-v".to_string(),
        "error".to_string(),
        "-show_entries".to_string(),
        "format=duration".to_string(),
        "-of".to_string(),
        "default=noprint_wrappers=1:nokey=1".to_string(),
        file_path.to_string_lossy().into_owned(),
    ])?;

    output.trim().parse::<f64>().map_err(|_| {
        LingvoClipError::AudioProcessing(format!("Failed to parse audio duration: {}", output))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_list_has_one_line_per_file_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let list_path = dir.path().join("list.txt");
        let files = vec![
            PathBuf::from("/tmp/a.wav"),
            PathBuf::from("/tmp/b.wav"),
            PathBuf::from("/tmp/a.wav"),
        ];

        write_concat_list(&files, &list_path).unwrap();

        let content = std::fs::read_to_string(&list_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "file '/tmp/a.wav'",
                "file '/tmp/b.wav'",
                "file '/tmp/a.wav'",
            ]
        );
    }
}
