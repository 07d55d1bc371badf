use contract_analyzer::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_text_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_for_log("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_for_log("  {\"a\": 1}  "), "{\"a\": 1}");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_and_reports_length() {
    let text = "x".repeat(450);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"x".repeat(200)));
    assert!(sanitized.ends_with("... (450 chars total)"));
}

#[test]
fn given_multibyte_text_when_truncating_then_cuts_on_char_boundary() {
    let text = "ü".repeat(300);

    let sanitized = sanitize_for_log(&text);

    assert!(sanitized.starts_with(&"ü".repeat(200)));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let sanitized = sanitize_for_log("Authorization: Bearer sk-abc123 rejected");

    assert_eq!(sanitized, "Authorization: Bearer [REDACTED] rejected");
}

#[test]
fn given_repeated_credentials_when_sanitizing_then_redacts_every_occurrence() {
    let sanitized = sanitize_for_log("api_key=one&x=1&api_key=two token=three");

    assert_eq!(
        sanitized,
        "api_key=[REDACTED]&x=1&api_key=[REDACTED] token=[REDACTED]"
    );
}
