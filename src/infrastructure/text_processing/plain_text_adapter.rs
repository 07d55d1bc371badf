use std::path::Path;

use crate::application::ports::{Conversion, ConversionError, DocumentConverter};

use super::text_sanitizer::sanitize_extracted_text;

pub struct PlainTextAdapter;

impl DocumentConverter for PlainTextAdapter {
    fn name(&self) -> &'static str {
        "plain_text"
    }

    fn convert(&self, path: &Path) -> Result<Conversion, ConversionError> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| ConversionError::Encoding(e.to_string()))?;

        Ok(Conversion {
            text: sanitize_extracted_text(&text),
            pages: None,
        })
    }
}
