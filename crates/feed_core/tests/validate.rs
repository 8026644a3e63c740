use feed_core::{is_valid_draft, is_valid_url, validate_draft, Category, DraftError, NewFact};

#[test]
fn url_requires_http_scheme() {
    assert!(is_valid_url("https://example.com"));
    assert!(is_valid_url("http://example.com/path?q=1"));
    assert!(!is_valid_url("ftp://x"));
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url(""));
    assert!(!is_valid_url("mailto:someone@example.com"));
    assert!(!is_valid_url("/relative/path"));
}

#[test]
fn draft_acceptance_table() {
    assert!(is_valid_draft("hi", "https://x.com", "science"));
    assert!(!is_valid_draft("", "https://x.com", "science"));
    assert!(!is_valid_draft(&"a".repeat(201), "https://x.com", "science"));
    assert!(!is_valid_draft("hi", "https://x.com", ""));
    assert!(!is_valid_draft("hi", "ftp://x.com", "science"));
    assert!(!is_valid_draft("hi", "https://x.com", "all"));
}

#[test]
fn text_limit_is_inclusive_and_counts_characters() {
    assert!(is_valid_draft(&"a".repeat(200), "https://x.com", "news"));
    // 200 multi-byte characters are still within the limit.
    assert!(is_valid_draft(&"é".repeat(200), "https://x.com", "news"));
    assert_eq!(
        validate_draft(&"é".repeat(201), "https://x.com", "news"),
        Err(DraftError::TextTooLong { len: 201 })
    );
}

#[test]
fn validate_draft_reports_first_problem() {
    assert_eq!(
        validate_draft("", "nope", ""),
        Err(DraftError::EmptyText)
    );
    assert_eq!(
        validate_draft("hi", "nope", ""),
        Err(DraftError::InvalidSource)
    );
    assert_eq!(
        validate_draft("hi", "https://x.com", ""),
        Err(DraftError::MissingCategory)
    );
    assert_eq!(
        validate_draft("hi", "https://x.com", "gossip"),
        Err(DraftError::UnknownCategory("gossip".to_string()))
    );
}

#[test]
fn valid_draft_becomes_typed_fact() {
    assert_eq!(
        validate_draft("T", "https://s.com", "history"),
        Ok(NewFact {
            text: "T".to_string(),
            source: "https://s.com".to_string(),
            category: Category::History,
        })
    );
}
