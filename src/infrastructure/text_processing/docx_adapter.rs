use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild, read_docx};

use crate::application::ports::{Conversion, ConversionError, DocumentConverter};

use super::text_sanitizer::sanitize_extracted_text;

/// Office Open XML word documents. Pagination is a rendering concern, so no
/// page count is reported.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for DocxAdapter {
    fn name(&self) -> &'static str {
        "docx-rs"
    }

    fn convert(&self, path: &Path) -> Result<Conversion, ConversionError> {
        let bytes = std::fs::read(path)?;
        let docx = read_docx(&bytes)
            .map_err(|e| ConversionError::Parse(format!("failed to parse DOCX: {e}")))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(
                    paragraph
                        .children
                        .iter()
                        .filter_map(|pc| match pc {
                            ParagraphChild::Run(run) => Some(run_text(&run.children)),
                            _ => None,
                        })
                        .collect::<String>(),
                ),
                _ => None,
            })
            .map(|text| sanitize_extracted_text(&text))
            .filter(|text| !text.is_empty())
            .collect();

        Ok(Conversion {
            text: paragraphs.join("\n\n"),
            pages: None,
        })
    }
}

fn run_text(children: &[RunChild]) -> String {
    children
        .iter()
        .filter_map(|rc| match rc {
            RunChild::Text(t) => Some(t.text.as_str()),
            RunChild::Tab(_) => Some("\t"),
            _ => None,
        })
        .collect()
}
