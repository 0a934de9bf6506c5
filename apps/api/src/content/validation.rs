use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::content::store::ContentStore;
use crate::dates::parse_date;

// local@domain.tld, no whitespace, at least one dot in the domain.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("field '{field}' is not a YYYY-MM-DD date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("field '{0}' must not be empty")]
    Empty(&'static str),
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks the invariants the date engine and the frontend rely on.
/// Returns every violation, not just the first.
pub fn validate_store(store: &ContentStore) -> Vec<ContentError> {
    let mut errors = Vec::new();
    let profile = &store.profile;

    for (field, value) in [
        ("birth_date", &profile.birth_date),
        ("experience_start_date", &profile.experience_start_date),
    ] {
        if parse_date(value).is_err() {
            errors.push(ContentError::InvalidDate {
                field,
                value: value.clone(),
            });
        }
    }

    if profile.name_en.trim().is_empty() {
        errors.push(ContentError::Empty("profile.name_en"));
    }

    if !is_valid_email(&store.contact.email) {
        errors.push(ContentError::InvalidEmail(store.contact.email.clone()));
    }

    if store.social_links.iter().any(|l| l.url.trim().is_empty()) {
        errors.push(ContentError::Empty("social_links.url"));
    }

    errors
}
