//! Модуль получения фоновых изображений
//!
//! Этот модуль содержит интерфейс внешнего поставщика изображений и
//! политику выбора одного изображения из найденных кандидатов.

pub mod wikimedia;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Интерфейс внешнего поставщика изображений.
///
/// Реализация скачивает до нескольких кандидатов в указанную директорию.
/// Сбой поставщика не прерывает пайплайн: вызывающая сторона переходит
/// на однотонный фон.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn acquire(&self, query: &str, dest_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Политика выбора одного изображения из кандидатов
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageSelection {
    /// Первый найденный кандидат
    First,
    /// Кандидат с фиксированным индексом
    Index(usize),
    /// Псевдослучайный выбор с фиксированным зерном
    Seeded(u64),
}

impl Default for ImageSelection {
    fn default() -> Self {
        Self::First
    }
}

impl ImageSelection {
    /// Выбрать кандидата согласно политике; None, если выбрать нечего
    pub fn pick<'a>(&self, candidates: &'a [PathBuf]) -> Option<&'a PathBuf> {
        if candidates.is_empty() {
            return None;
        }
        match self {
            Self::First => candidates.first(),
            Self::Index(index) => candidates.get(*index),
            Self::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(*seed);
                candidates.get(rng.gen_range(0..candidates.len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(count: usize) -> Vec<PathBuf> {
        (0..count).map(|i| PathBuf::from(format!("img_{}.jpg", i))).collect()
    }

    #[test]
    fn test_pick_from_empty_is_none() {
        assert!(ImageSelection::First.pick(&[]).is_none());
        assert!(ImageSelection::Seeded(7).pick(&[]).is_none());
    }

    #[test]
    fn test_first_picks_first() {
        let list = candidates(3);
        assert_eq!(ImageSelection::First.pick(&list), Some(&list[0]));
    }

    #[test]
    fn test_index_out_of_range_is_none() {
        let list = candidates(2);
        assert_eq!(ImageSelection::Index(1).pick(&list), Some(&list[1]));
        assert!(ImageSelection::Index(5).pick(&list).is_none());
    }

    #[test]
    fn test_seeded_pick_is_deterministic() {
        let list = candidates(5);
        let first = ImageSelection::Seeded(42).pick(&list).cloned();
        let second = ImageSelection::Seeded(42).pick(&list).cloned();
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
