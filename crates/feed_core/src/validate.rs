use thiserror::Error;
use url::Url;

use crate::{Category, NewFact};

/// Upper bound on fact text, counted in characters.
pub const MAX_TEXT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("text is empty")]
    EmptyText,
    #[error("text is {len} characters, the limit is {}", MAX_TEXT_CHARS)]
    TextTooLong { len: usize },
    #[error("source must be an http or https url")]
    InvalidSource,
    #[error("choose a category")]
    MissingCategory,
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
}

/// True iff `candidate` parses as an absolute url with an http(s) scheme.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Checks a draft and converts it into a typed [`NewFact`].
pub fn validate_draft(text: &str, source: &str, category: &str) -> Result<NewFact, DraftError> {
    if text.is_empty() {
        return Err(DraftError::EmptyText);
    }
    let len = text.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(DraftError::TextTooLong { len });
    }
    if !is_valid_url(source) {
        return Err(DraftError::InvalidSource);
    }
    if category.is_empty() {
        return Err(DraftError::MissingCategory);
    }
    let category: Category = category
        .parse()
        .map_err(|_| DraftError::UnknownCategory(category.to_string()))?;

    Ok(NewFact {
        text: text.to_string(),
        source: source.to_string(),
        category,
    })
}

pub fn is_valid_draft(text: &str, source: &str, category: &str) -> bool {
    validate_draft(text, source, category).is_ok()
}
