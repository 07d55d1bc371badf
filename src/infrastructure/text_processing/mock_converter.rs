use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::ports::{Conversion, ConversionError, DocumentConverter};

/// Converter with a canned outcome that remembers the paths it was given.
pub struct MockConverter {
    outcome: Result<Conversion, String>,
    seen_paths: Mutex<Vec<PathBuf>>,
}

impl MockConverter {
    pub fn returning(text: impl Into<String>, pages: Option<u32>) -> Self {
        Self {
            outcome: Ok(Conversion {
                text: text.into(),
                pages,
            }),
            seen_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            seen_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen_paths
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl DocumentConverter for MockConverter {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn convert(&self, path: &Path) -> Result<Conversion, ConversionError> {
        if let Ok(mut paths) = self.seen_paths.lock() {
            paths.push(path.to_path_buf());
        }

        self.outcome.clone().map_err(ConversionError::Parse)
    }
}
