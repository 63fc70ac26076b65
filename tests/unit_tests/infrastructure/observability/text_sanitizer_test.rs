use bhasha::infrastructure::observability::{MAX_VISIBLE_CHARS, sanitize_text};

#[test]
fn given_blank_text_when_sanitizing_then_marks_it_empty() {
    assert_eq!(sanitize_text("   ", MAX_VISIBLE_CHARS), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_text("  hello world ", MAX_VISIBLE_CHARS), "hello world");
}

#[test]
fn given_long_multibyte_text_when_sanitizing_then_truncates_on_char_boundary() {
    let text = "ನ".repeat(150);
    let sanitized = sanitize_text(&text, MAX_VISIBLE_CHARS);
    assert!(sanitized.starts_with(&"ನ".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_values_are_redacted() {
    let sanitized = sanitize_text(
        "use Bearer abc123 and api_key=xyz plus password=hunter2",
        MAX_VISIBLE_CHARS,
    );
    assert!(!sanitized.contains("abc123"));
    assert!(!sanitized.contains("xyz"));
    assert!(!sanitized.contains("hunter2"));
    assert!(sanitized.contains("api_key=[REDACTED]"));
}

#[test]
fn given_repeated_secret_when_sanitizing_then_every_occurrence_is_redacted() {
    let sanitized = sanitize_text("token=one token=two", MAX_VISIBLE_CHARS);
    assert_eq!(sanitized, "token=[REDACTED] token=[REDACTED]");
}
