use std::io;
use std::path::Path;

/// Blocking text conversion for one file format.
///
/// Implementations are invoked from the blocking thread pool and may perform
/// CPU-heavy parsing.
pub trait DocumentConverter: Send + Sync {
    fn name(&self) -> &'static str;

    fn convert(&self, path: &Path) -> Result<Conversion, ConversionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub text: String,
    /// `None` when the format has no fixed pagination.
    pub pages: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse document: {0}")]
    Parse(String),
    #[error("invalid text encoding: {0}")]
    Encoding(String),
    #[error("conversion timed out after {0}ms")]
    TimedOut(u64),
    #[error("conversion task aborted: {0}")]
    Aborted(String),
}
