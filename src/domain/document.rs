use std::path::Path;

use serde::Serialize;

/// File formats the extractor knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Text,
    Unknown,
}

impl DocumentFormat {
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "doc" => Self::Doc,
            "txt" => Self::Text,
            _ => Self::Unknown,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_suffix)
            .unwrap_or(Self::Unknown)
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Doc => "application/msword",
            Self::Text => "text/plain",
            Self::Unknown => "application/octet-stream",
        }
    }
}

/// A file as received from the caller, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
    pub declared_content_type: Option<String>,
}

impl UploadedDocument {
    pub fn new(
        bytes: Vec<u8>,
        filename: Option<String>,
        declared_content_type: Option<String>,
    ) -> Self {
        Self {
            bytes,
            filename,
            declared_content_type,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Original suffix including the dot, or an empty string.
    pub fn suffix(&self) -> String {
        self.filename
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub filename: String,
    pub pages: u32,
    pub file_size: u64,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Last path component of a caller-supplied filename.
pub fn display_filename(raw: &str) -> String {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(raw)
        .to_string()
}
