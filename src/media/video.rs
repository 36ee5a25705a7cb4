//! Модуль для работы с видео
//!
//! Этот модуль содержит рендеринг фразовых видеоклипов с субтитрами
//! и их склейку в итоговый файл. Все операции выполняются через FFmpeg.

use std::path::{Path, PathBuf};

use crate::config::PipelineConfig;
use crate::media::audio::write_concat_list;
use crate::segment::{Background, CaptionLayout, VisualSegment};
use crate::utils::ffmpeg::run_ffmpeg_command;
use crate::error::Result;

/// Экранирование текста для фильтра drawtext.
///
/// Значение подставляется внутрь одинарных кавычек, а внутри кавычек
/// токенизатор ffmpeg копирует текст дословно и не обрабатывает
/// обратные слеши. Поэтому апостроф экранируется только разрывом
/// кавычек: закрыть, вставить `\'` вне кавычек, открыть снова.
pub(crate) fn escape_drawtext(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("'\\''"),
            ':' => escaped.push_str("\\:"),
            '%' => escaped.push_str("\\%"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Строка фильтра наложения субтитров на кадр
pub(crate) fn caption_filter(caption: &str, layout: &CaptionLayout, font_size: u32) -> String {
    let y = match layout {
        // Подпись внизу кадра с отступом
        CaptionLayout::Bottom => "h-text_h-40",
        // Подпись по центру кадра
        CaptionLayout::Center => "(h-text_h)/2",
    };
    format!(
        "drawtext=text='{}':fontcolor=white:fontsize={}:box=1:boxcolor=black@0.6:boxborderw=20:x=(w-text_w)/2:y={}",
        escape_drawtext(caption),
        font_size,
        y
    )
}

/// Фильтр размещения изображения на общем холсте.
///
/// Изображение вписывается с сохранением пропорций и дополняется полями,
/// поэтому кадры разных размеров не отклоняются.
fn canvas_filter(width: u32, height: u32) -> String {
    format!(
        "scale={w}:{h}:force_original_aspect_ratio=decrease,pad={w}:{h}:(ow-iw)/2:(oh-ih)/2",
        w = width,
        h = height
    )
}

/// Рендеринг клипа одной фразы: фон, субтитры и звуковая дорожка
pub fn render_phrase_clip(
    visual: &VisualSegment,
    audio_file: &Path,
    config: &PipelineConfig,
    output_file: &Path,
) -> Result<()> {
    let caption = caption_filter(&visual.caption, &visual.layout, config.font_size);
    let mut args: Vec<String> = Vec::new();

    let filter = match &visual.background {
        Background::Image(image_file) => {
            args.push("-loop".to_string());
            args.push("1".to_string());
            args.push("-i".to_string());
            args.push(image_file.to_string_lossy().into_owned());
            format!(
                "{},{}",
                canvas_filter(config.canvas_width, config.canvas_height),
                caption
            )
        }
        Background::Color => {
            args.push("-f".to_string());
            args.push("lavfi".to_string());
            args.push("-i".to_string());
            args.push(format!(
                "color=c=black:s={}x{}:r={}",
                config.canvas_width, config.canvas_height, config.frame_rate
            ));
            caption
        }
    };

    args.push("-i".to_string());
    args.push(audio_file.to_string_lossy().into_owned());
    args.push("-t".to_string());
    args.push(format!("{:.3}", visual.duration));
    args.push("-r".to_string());
    args.push(config.frame_rate.to_string());
    args.push("-vf".to_string());
    args.push(filter);
    args.push("-c:v".to_string());
    args.push("libx264".to_string());
    args.push("-pix_fmt".to_string());
    args.push("yuv420p".to_string());
    args.push("-c:a".to_string());
    args.push("aac".to_string());
    args.push(output_file.to_string_lossy().into_owned());

    run_ffmpeg_command(&args)
}

/// Склейка фразовых клипов в итоговое видео.
///
/// Все клипы отрендерены на одном холсте с одинаковыми кодеками,
/// поэтому склейка выполняется без перекодирования.
pub fn concat_video_files(
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_drawtext_special_characters() {
        assert_eq!(escape_drawtext("EN: Hello"), "EN\\: Hello");
        assert_eq!(escape_drawtext("100%"), "100\\%");
        assert_eq!(escape_drawtext("a,b;c"), "a\\,b\\;c");
        assert_eq!(escape_drawtext("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_drawtext_apostrophe_breaks_out_of_quotes() {
        // Внутри одинарных кавычек ffmpeg не обрабатывает `\'`:
        // апостроф передается разрывом кавычек
        assert_eq!(escape_drawtext("it's"), "it'\\''s");
        let filter = caption_filter("It's fine", &CaptionLayout::Bottom, 50);
        // Опции фильтра после текста не должны попасть в значение text
        assert!(filter.contains("text='It'\\''s fine':fontcolor=white"));
    }

    #[test]
    fn test_escape_drawtext_keeps_newline_and_cyrillic() {
        assert_eq!(escape_drawtext("EN\nRU"), "EN\nRU");
        assert_eq!(escape_drawtext("Привет"), "Привет");
    }

    #[test]
    fn test_caption_filter_layout_positions() {
        let bottom = caption_filter("hi", &CaptionLayout::Bottom, 50);
        assert!(bottom.contains("y=h-text_h-40"));
        assert!(bottom.contains("fontsize=50"));

        let center = caption_filter("hi", &CaptionLayout::Center, 50);
        assert!(center.contains("y=(h-text_h)/2"));
    }

    #[test]
    fn test_canvas_filter_scales_and_pads() {
        let filter = canvas_filter(1280, 720);
        assert!(filter.contains("scale=1280:720"));
        assert!(filter.contains("pad=1280:720"));
        assert!(filter.contains("force_original_aspect_ratio=decrease"));
    }
}
