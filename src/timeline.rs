//! Модуль сборки таймлайна
//!
//! Итоговый таймлайн — упорядоченная последовательность фразовых клипов.
//! Склейка сохраняет порядок и ничего не обрезает, поэтому общая
//! длительность строго аддитивна.

use crate::segment::PhraseClip;

/// Итоговый таймлайн
#[derive(Debug, Default)]
pub struct Timeline {
    clips: Vec<PhraseClip>,
}

impl Timeline {
    /// Собрать таймлайн из фразовых клипов в порядке следования фраз
    pub fn assemble(clips: Vec<PhraseClip>) -> Self {
        Self { clips }
    }

    pub fn clips(&self) -> &[PhraseClip] {
        &self.clips
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Общая длительность: сумма длительностей всех клипов
    pub fn total_duration(&self) -> f64 {
        self.clips.iter().map(PhraseClip::audio_duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::AudioSegment;
    use std::path::PathBuf;

    fn clip(index: usize, speech_durations: (f64, f64), silence: f64) -> PhraseClip {
        PhraseClip {
            index,
            audio: vec![
                AudioSegment::Speech {
                    path: PathBuf::from(format!("speech_{}_en.mp3", index)),
                    duration: speech_durations.0,
                },
                AudioSegment::Silence { duration: silence },
                AudioSegment::Speech {
                    path: PathBuf::from(format!("speech_{}_ru.mp3", index)),
                    duration: speech_durations.1,
                },
                AudioSegment::Silence { duration: silence },
                AudioSegment::Silence { duration: silence },
            ],
            visual: None,
        }
    }

    #[test]
    fn test_total_duration_is_additive() {
        // Две фразы с озвучкой (1.2s, 1.5s) и (0.8s, 1.0s), пауза 1s:
        // (1.2 + 1.5 + 3) + (0.8 + 1.0 + 3) = 10.5
        let timeline =
            Timeline::assemble(vec![clip(0, (1.2, 1.5), 1.0), clip(1, (0.8, 1.0), 1.0)]);
        assert_eq!(timeline.len(), 2);
        assert!((timeline.total_duration() - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::assemble(Vec::new());
        assert!(timeline.is_empty());
        assert_eq!(timeline.total_duration(), 0.0);
    }

    #[test]
    fn test_assemble_preserves_order() {
        let timeline =
            Timeline::assemble(vec![clip(0, (1.0, 1.0), 1.0), clip(1, (2.0, 2.0), 1.0)]);
        let indices: Vec<usize> = timeline.clips().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
