//! Модуль загрузки фраз
//!
//! Этот модуль читает текстовый файл с парами фраз вида
//! `<оригинал> ||| <перевод>`, по одной паре на строку.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

/// Разделитель между оригиналом и переводом в строке файла
pub const PHRASE_SEPARATOR: &str = "|||";

/// Пара фраз: оригинал и перевод
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePair {
    /// Фраза на исходном языке
    pub source_text: String,
    /// Перевод фразы
    pub target_text: String,
}

/// Результат загрузки файла с фразами
#[derive(Debug, Default)]
pub struct PhraseSet {
    /// Пары фраз в порядке следования в файле
    pub pairs: Vec<PhrasePair>,
    /// Количество пропущенных некорректных строк
    pub skipped_lines: usize,
}

impl PhraseSet {
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Загрузка пар фраз из файла.
///
/// Пустые строки и строки, начинающиеся с `#`, пропускаются. Строка без
/// разделителя `|||` (или с пустой половиной) считается некорректной:
/// она логируется и пропускается, загрузка продолжается. Отсутствующий
/// файл дает пустой набор, а не ошибку.
pub fn load_phrases(path: &Path) -> Result<PhraseSet> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Phrases file not found: {}", path.display());
            return Ok(PhraseSet::default());
        }
        Err(e) => return Err(e.into()),
    };

    let mut set = PhraseSet::default();

    for (line_no, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once(PHRASE_SEPARATOR) {
            Some((source, target)) => {
                let source = source.trim();
                let target = target.trim();
                if source.is_empty() || target.is_empty() {
                    log::warn!(
                        "Invalid line {}: empty phrase around separator: {}",
                        line_no + 1,
                        line
                    );
                    set.skipped_lines += 1;
                    continue;
                }
                set.pairs.push(PhrasePair {
                    source_text: source.to_string(),
                    target_text: target.to_string(),
                });
            }
            None => {
                log::warn!(
                    "Invalid line {}: missing '{}' separator: {}",
                    line_no + 1,
                    PHRASE_SEPARATOR,
                    line
                );
                set.skipped_lines += 1;
            }
        }
    }

    log::info!(
        "Loaded {} phrase pairs from {} ({} invalid lines skipped)",
        set.pairs.len(),
        path.display(),
        set.skipped_lines
    );

    Ok(set)
}
