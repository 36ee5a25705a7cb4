//! Модуль для поиска изображений в Wikimedia Commons
//!
//! Этот модуль содержит поставщика изображений на основе публичного API
//! Wikimedia Commons (без ключа). По текстовому запросу скачивается
//! несколько растровых кандидатов.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use crate::error::{LingvoClipError, Result};
use crate::images::ImageProvider;

const API_ENDPOINT: &str = "https://commons.wikimedia.org/w/api.php";
const USER_AGENT: &str = concat!("lingvoclip/", env!("CARGO_PKG_VERSION"));

/// Поставщик изображений из Wikimedia Commons
pub struct WikimediaImageProvider {
    client: Client,
    max_candidates: usize,
}

impl WikimediaImageProvider {
    pub fn new(max_candidates: usize) -> Self {
        Self {
            client: Client::new(),
            max_candidates: max_candidates.max(1),
        }
    }

    /// Скачивание одного кандидата во временную директорию
    async fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LingvoClipError::ImageAcquisition(format!(
                "image download returned status {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(LingvoClipError::ImageAcquisition(
                "image download returned an empty body".to_string(),
            ));
        }

        // Имя файла уникально для всего запуска, чтобы кандидаты разных
        // фраз не затирали друг друга
        let extension = extension_from_url(url);
        let path = dest_dir.join(format!("image_{}.{}", Uuid::new_v4().simple(), extension));
        tokio::fs::write(&path, &bytes).await?;
        Ok(path)
    }
}

#[async_trait]
impl ImageProvider for WikimediaImageProvider {
    async fn acquire(&self, query: &str, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        log::debug!("Searching Wikimedia Commons for '{}'", query);
        let search = format!("filetype:bitmap {}", query);
        let limit = self.max_candidates.to_string();
        let response = self
            .client
            .get(API_ENDPOINT)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("generator", "search"),
                ("gsrnamespace", "6"),
                ("gsrsearch", search.as_str()),
                ("gsrlimit", limit.as_str()),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
                ("iiurlwidth", "1280"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LingvoClipError::ImageAcquisition(format!(
                "image search returned status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let mut urls = Vec::new();
        if let Some(pages) = body.pointer("/query/pages").and_then(|p| p.as_object()) {
            for page in pages.values() {
                let info = page
                    .pointer("/imageinfo/0/thumburl")
                    .or_else(|| page.pointer("/imageinfo/0/url"))
                    .and_then(|u| u.as_str());
                if let Some(url) = info {
                    urls.push(url.to_string());
                }
            }
        }

        let mut files = Vec::new();
        for url in urls.iter().take(self.max_candidates) {
            match self.download(url, dest_dir).await {
                Ok(path) => files.push(path),
                Err(e) => log::warn!("Failed to download image candidate {}: {}", url, e),
            }
        }

        log::debug!("Acquired {} image candidates for '{}'", files.len(), query);
        Ok(files)
    }
}

/// Расширение файла из URL; при сомнении — jpg
fn extension_from_url(url: &str) -> &str {
    let candidate = url.rsplit('.').next().unwrap_or("");
    match candidate.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp" => candidate,
        _ => "jpg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_url() {
        assert_eq!(extension_from_url("https://example.org/a/b/photo.png"), "png");
        assert_eq!(extension_from_url("https://example.org/a/photo.JPG"), "JPG");
        assert_eq!(extension_from_url("https://example.org/a/photo"), "jpg");
        assert_eq!(
            extension_from_url("https://example.org/thumb.php?f=x&w=1280"),
            "jpg"
        );
    }
}
