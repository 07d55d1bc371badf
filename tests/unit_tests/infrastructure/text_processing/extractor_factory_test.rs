use contract_analyzer::domain::DocumentFormat;
use contract_analyzer::infrastructure::text_processing::ExtractorFactory;
use contract_analyzer::presentation::config::ExtractionSettings;

#[test]
fn given_all_formats_disabled_when_creating_then_nothing_is_supported() {
    let settings = ExtractionSettings {
        pdf: false,
        docx: false,
        text: false,
        timeout_seconds: 10,
    };

    let extractor = ExtractorFactory::create(&settings);

    assert!(!extractor.supports(DocumentFormat::Pdf));
    assert!(!extractor.supports(DocumentFormat::Docx));
    assert!(!extractor.supports(DocumentFormat::Text));
}

#[test]
fn given_only_text_enabled_when_creating_then_supports_text_only() {
    let settings = ExtractionSettings {
        pdf: false,
        docx: false,
        ..ExtractionSettings::default()
    };

    let extractor = ExtractorFactory::create(&settings);

    assert!(extractor.supports(DocumentFormat::Text));
    assert!(!extractor.supports(DocumentFormat::Pdf));
}

#[test]
fn given_default_settings_when_creating_then_legacy_doc_is_never_supported() {
    let extractor = ExtractorFactory::create(&ExtractionSettings::default());

    assert!(!extractor.supports(DocumentFormat::Doc));
    assert_eq!(
        extractor.supports(DocumentFormat::Pdf),
        cfg!(feature = "pdf")
    );
    assert_eq!(
        extractor.supports(DocumentFormat::Docx),
        cfg!(feature = "docx")
    );
}
