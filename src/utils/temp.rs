//! Модуль для работы с временными файлами
//!
//! Этот модуль содержит реестр временных артефактов одного запуска пайплайна.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

/// Реестр временных артефактов.
///
/// Все промежуточные файлы (озвучка, изображения, списки склейки)
/// регистрируются при создании и удаляются по завершении запуска
/// независимо от его исхода. Удаление выполняется по мере возможности:
/// сбой удаления логируется и не считается ошибкой.
pub struct TempArtifacts {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl TempArtifacts {
    /// Создать реестр с рабочей директорией внутри `parent`
    /// (или системной временной директории).
    pub fn new(parent: Option<&Path>) -> Result<Self> {
        let dir = match parent {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                tempfile::Builder::new().prefix("lingvoclip_").tempdir_in(parent)?
            }
            None => tempfile::Builder::new().prefix("lingvoclip_").tempdir()?,
        };
        log::debug!("Created temp directory {}", dir.path().display());

        Ok(Self {
            dir,
            files: Vec::new(),
        })
    }

    /// Путь к рабочей директории
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Зарегистрировать уже созданный файл для удаления при завершении
    pub fn register(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    /// Построить путь к новому файлу в рабочей директории и
    /// зарегистрировать его
    pub fn create_path(&mut self, file_name: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        self.files.push(path.clone());
        path
    }

    /// Удалить зарегистрированные файлы; ошибки удаления игнорируются
    pub fn cleanup(&mut self) {
        for file in self.files.drain(..) {
            if file.exists() {
                if let Err(e) = fs::remove_file(&file) {
                    log::warn!("Failed to remove temp file {}: {}", file.display(), e);
                }
            }
        }
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        // Файлы и сама директория удаляются и при аварийном выходе
        self.cleanup();
    }
}
