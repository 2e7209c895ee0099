use crate::parsing::normalize::unify_line_breaks;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Magic bytes every PDF file starts with.
pub const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported source file {path}: {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },
    #[error("Could not extract text from {path}: {message}")]
    PdfExtract { path: PathBuf, message: String },
}

/// Kind of source file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    /// Text already extracted from a PDF.
    Text,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(SourceKind::Pdf),
            "txt" => Some(SourceKind::Text),
            _ => None,
        }
    }
}

/// Read a source file and return its text with line breaks unified
pub fn load_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let kind = SourceKind::from_path(path).ok_or_else(|| IoError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason: "only .pdf and .txt files are accepted".to_string(),
    })?;

    let text = match kind {
        SourceKind::Pdf => extract_pdf_text(path, &fs::read(path)?)?,
        SourceKind::Text => fs::read_to_string(path)?,
    };
    debug!("loaded {} chars from {}", text.chars().count(), path.display());

    Ok(unify_line_breaks(&text))
}

/// Extract the text of every page of a PDF held in memory.
pub fn extract_pdf_text(path: &Path, bytes: &[u8]) -> Result<String, IoError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(IoError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: "file does not start with %PDF-".to_string(),
        });
    }

    pdf_extract::extract_text_from_mem(bytes).map_err(|e| IoError::PdfExtract {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
