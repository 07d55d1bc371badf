use std::path::Path;

use pdf_oxide::PdfDocument;

use crate::application::ports::{Conversion, ConversionError, DocumentConverter};

use super::text_sanitizer::sanitize_extracted_text;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for PdfAdapter {
    fn name(&self) -> &'static str {
        "pdf_oxide"
    }

    fn convert(&self, path: &Path) -> Result<Conversion, ConversionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ConversionError::Parse(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ConversionError::Parse(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let text = match doc.extract_text(page_index) {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(page = page_index + 1, error = %e, "Skipping unreadable page");
                    continue;
                }
            };

            let sanitized = sanitize_extracted_text(&text);
            if !sanitized.is_empty() {
                pages.push(sanitized);
            }
        }

        Ok(Conversion {
            text: pages.join("\n\n"),
            pages: Some(page_count as u32),
        })
    }
}
