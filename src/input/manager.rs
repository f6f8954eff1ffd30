//! Input manager for handling different file types

use crate::error::{Result, ResumeMatchError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    extract_pdf_bytes, markdown_to_text, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Default upload limit: 10 MB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_file_size: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let size = tokio::fs::metadata(path).await?.len();
        if size > self.max_file_size {
            return Err(ResumeMatchError::InvalidInput(format!(
                "File {} is {} bytes, larger than the {} byte limit",
                path.display(),
                size,
                self.max_file_size
            )));
        }

        let file_type = self.detect_file_type(path)?;
        debug!("Detected {} input: {}", file_type.as_str(), path.display());

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Image => {
                return Err(ResumeMatchError::UnsupportedInputKind(format!(
                    "Image input requires an external text recognition service: {}",
                    path.display()
                )));
            }
            FileType::Unknown => {
                return Err(ResumeMatchError::UnsupportedInputKind(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        ensure_text(&text, &path.display().to_string())?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Extract text from an in-memory document such as piped input or an upload body.
    ///
    /// The document kind comes from its MIME type. In-memory documents are not cached.
    pub fn extract_bytes(&self, bytes: &[u8], mime_type: &str, source: &str) -> Result<String> {
        let size = bytes.len() as u64;
        if size > self.max_file_size {
            return Err(ResumeMatchError::InvalidInput(format!(
                "{} is {} bytes, larger than the {} byte limit",
                source, size, self.max_file_size
            )));
        }

        let file_type = FileType::from_mime(mime_type);
        debug!("Detected {} input from {} ({})", file_type.as_str(), source, mime_type);

        let text = match file_type {
            FileType::Pdf => extract_pdf_bytes(bytes)?,
            FileType::Text => decode_utf8(bytes, source)?,
            FileType::Markdown => markdown_to_text(&decode_utf8(bytes, source)?),
            FileType::Image => {
                return Err(ResumeMatchError::UnsupportedInputKind(format!(
                    "Image input requires an external text recognition service: {}",
                    source
                )));
            }
            FileType::Unknown => {
                return Err(ResumeMatchError::UnsupportedInputKind(format!(
                    "Unsupported MIME type {} for: {}",
                    mime_type, source
                )));
            }
        };

        ensure_text(&text, source)?;
        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeMatchError::UnsupportedInputKind(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn decode_utf8(bytes: &[u8], source: &str) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|_| ResumeMatchError::InvalidInput(format!("{} is not valid UTF-8 text", source)))
}

fn ensure_text(text: &str, source: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ResumeMatchError::InvalidInput(format!(
            "No text could be extracted from: {}",
            source
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bytes_by_mime() {
        let manager = InputManager::new();

        let text = manager
            .extract_bytes(b"Rust engineer", "text/plain; charset=utf-8", "stdin")
            .unwrap();
        assert_eq!(text, "Rust engineer");

        let text = manager
            .extract_bytes(b"# Jane\n\n- **Rust**\n", "text/markdown", "stdin")
            .unwrap();
        assert_eq!(text, "Jane\nRust");
    }

    #[test]
    fn test_extract_bytes_rejections() {
        let manager = InputManager::new().with_max_file_size(8);

        let err = manager.extract_bytes(b"\x89PNG", "image/png", "stdin").unwrap_err();
        assert!(matches!(err, ResumeMatchError::UnsupportedInputKind(_)));
        let err = manager.extract_bytes(b"PK", "application/zip", "stdin").unwrap_err();
        assert!(matches!(err, ResumeMatchError::UnsupportedInputKind(_)));
        let err = manager.extract_bytes(b"far too large", "text/plain", "stdin").unwrap_err();
        assert!(matches!(err, ResumeMatchError::InvalidInput(_)));
        let err = manager.extract_bytes(b" \n ", "text/plain", "stdin").unwrap_err();
        assert!(matches!(err, ResumeMatchError::InvalidInput(_)));
        let err = manager.extract_bytes(&[0xff, 0xfe], "text/plain", "stdin").unwrap_err();
        assert!(matches!(err, ResumeMatchError::InvalidInput(_)));
    }

    #[test]
    fn test_extract_pdf_bytes_reports_pdf_errors() {
        let err = InputManager::new()
            .extract_bytes(b"not a pdf", "application/pdf", "upload")
            .unwrap_err();
        assert!(matches!(err, ResumeMatchError::PdfExtraction(_)));
    }
}
