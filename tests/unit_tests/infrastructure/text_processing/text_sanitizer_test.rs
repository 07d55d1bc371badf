use contract_analyzer::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_text_with_fi_ligature_when_sanitizing_then_decomposes_to_fi() {
    assert_eq!(sanitize_extracted_text("ﬁnal ﬁling"), "final filing");
}

#[test]
fn given_text_with_fullwidth_digits_when_sanitizing_then_normalizes_to_ascii() {
    assert_eq!(sanitize_extracted_text("Term: １２ months"), "Term: 12 months");
}

#[test]
fn given_text_with_excessive_newlines_when_sanitizing_then_collapses_to_paragraph_breaks() {
    let input = "WHEREAS the parties agree\n\n\n\n\nNOW THEREFORE";
    assert_eq!(
        sanitize_extracted_text(input),
        "WHEREAS the parties agree\n\nNOW THEREFORE"
    );
}

#[test]
fn given_text_with_redundant_spaces_when_sanitizing_then_collapses_to_single_space() {
    assert_eq!(
        sanitize_extracted_text("Section   1.   Definitions"),
        "Section 1. Definitions"
    );
}

#[test]
fn given_empty_or_blank_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
    assert_eq!(sanitize_extracted_text("   \n\n  \t "), "");
}

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_merges_word() {
    assert_eq!(
        sanitize_extracted_text("The Licensee shall indem-\nnify the Licensor"),
        "The Licensee shall indemnify the Licensor"
    );
}

#[test]
fn given_intentional_hyphen_when_sanitizing_then_preserves_it() {
    assert_eq!(
        sanitize_extracted_text("a well-known third-party"),
        "a well-known third-party"
    );
}

#[test]
fn given_list_marker_hyphens_when_sanitizing_then_preserves_list_lines() {
    let input = "Obligations:\n- pay rent\n- maintain premises";
    assert_eq!(sanitize_extracted_text(input), input);
}

#[test]
fn given_control_characters_when_sanitizing_then_strips_them() {
    assert_eq!(
        sanitize_extracted_text("Page\u{0C}one\u{0}\r\nnext"),
        "Pageone\nnext"
    );
}
