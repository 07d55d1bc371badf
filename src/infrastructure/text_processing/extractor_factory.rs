use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DocumentConverter;
use crate::application::services::TextExtractor;
use crate::domain::DocumentFormat;
use crate::presentation::config::ExtractionSettings;

use super::plain_text_adapter::PlainTextAdapter;

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Registers one converter per enabled format. Formats that are disabled or
    /// not compiled in stay unregistered and surface as unavailable at request
    /// time.
    pub fn create(settings: &ExtractionSettings) -> TextExtractor {
        let mut converters: Vec<(DocumentFormat, Arc<dyn DocumentConverter>)> = Vec::new();

        if settings.pdf {
            match pdf_converter() {
                Some(converter) => converters.push((DocumentFormat::Pdf, converter)),
                None => tracing::warn!("PDF extraction enabled but not compiled in"),
            }
        }

        if settings.docx {
            match docx_converter() {
                Some(converter) => converters.push((DocumentFormat::Docx, converter)),
                None => tracing::warn!("DOCX extraction enabled but not compiled in"),
            }
        }

        if settings.text {
            converters.push((DocumentFormat::Text, Arc::new(PlainTextAdapter)));
        }

        for (format, converter) in &converters {
            tracing::info!(
                content_type = format.as_mime(),
                converter = converter.name(),
                "Document converter registered"
            );
        }

        TextExtractor::new(converters, Duration::from_secs(settings.timeout_seconds))
    }
}

#[cfg(feature = "pdf")]
fn pdf_converter() -> Option<Arc<dyn DocumentConverter>> {
    Some(Arc::new(super::pdf_adapter::PdfAdapter::new()))
}

#[cfg(not(feature = "pdf"))]
fn pdf_converter() -> Option<Arc<dyn DocumentConverter>> {
    None
}

#[cfg(feature = "docx")]
fn docx_converter() -> Option<Arc<dyn DocumentConverter>> {
    Some(Arc::new(super::docx_adapter::DocxAdapter::new()))
}

#[cfg(not(feature = "docx"))]
fn docx_converter() -> Option<Arc<dyn DocumentConverter>> {
    None
}
