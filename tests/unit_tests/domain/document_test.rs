use contract_analyzer::domain::{DocumentFormat, UploadedDocument, display_filename};

#[test]
fn given_known_suffixes_when_resolving_format_then_matches_case_insensitively() {
    assert_eq!(DocumentFormat::from_suffix(".pdf"), DocumentFormat::Pdf);
    assert_eq!(DocumentFormat::from_suffix(".PDF"), DocumentFormat::Pdf);
    assert_eq!(DocumentFormat::from_suffix("docx"), DocumentFormat::Docx);
    assert_eq!(DocumentFormat::from_suffix(".doc"), DocumentFormat::Doc);
    assert_eq!(DocumentFormat::from_suffix(".txt"), DocumentFormat::Text);
}

#[test]
fn given_unknown_or_missing_suffix_when_resolving_format_then_returns_unknown() {
    assert_eq!(DocumentFormat::from_suffix(".xlsx"), DocumentFormat::Unknown);
    assert_eq!(DocumentFormat::from_filename("contract"), DocumentFormat::Unknown);
    assert_eq!(DocumentFormat::from_filename(""), DocumentFormat::Unknown);
}

#[test]
fn given_filename_with_path_when_resolving_format_then_uses_last_extension() {
    assert_eq!(
        DocumentFormat::from_filename("uploads/nda.final.docx"),
        DocumentFormat::Docx
    );
}

#[test]
fn given_each_format_when_mapping_to_mime_then_returns_registered_type() {
    assert_eq!(DocumentFormat::Pdf.as_mime(), "application/pdf");
    assert_eq!(
        DocumentFormat::Docx.as_mime(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(DocumentFormat::Doc.as_mime(), "application/msword");
    assert_eq!(DocumentFormat::Text.as_mime(), "text/plain");
    assert_eq!(
        DocumentFormat::Unknown.as_mime(),
        "application/octet-stream"
    );
}

#[test]
fn given_upload_with_filename_when_reading_suffix_then_keeps_original_case_and_dot() {
    let upload = UploadedDocument::new(b"abc".to_vec(), Some("Lease.PDF".to_string()), None);

    assert_eq!(upload.suffix(), ".PDF");
    assert_eq!(upload.size_bytes(), 3);
}

#[test]
fn given_upload_without_filename_when_reading_suffix_then_returns_empty() {
    let upload = UploadedDocument::new(Vec::new(), None, None);

    assert_eq!(upload.suffix(), "");
}

#[test]
fn given_filename_with_directories_when_displaying_then_returns_last_component() {
    assert_eq!(display_filename("a/b/contract.pdf"), "contract.pdf");
    assert_eq!(display_filename("contract.pdf"), "contract.pdf");
}
