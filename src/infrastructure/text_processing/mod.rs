#[cfg(feature = "docx")]
mod docx_adapter;
mod extractor_factory;
mod mock_converter;
#[cfg(feature = "pdf")]
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

#[cfg(feature = "docx")]
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::ExtractorFactory;
pub use mock_converter::MockConverter;
#[cfg(feature = "pdf")]
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
