//! Contact form field rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Messages;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("valid email pattern")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\x{FEFF}\-\+\(\)]+$").expect("valid phone pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    Other,
}

impl FieldKind {
    pub fn from_type_attr(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            _ => FieldKind::Other,
        }
    }
}

/// What validation needs to know about a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl InvalidReason {
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            InvalidReason::Required => &messages.required,
            InvalidReason::InvalidEmail => &messages.invalid_email,
            InvalidReason::InvalidPhone => &messages.invalid_phone,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldValidationState {
    #[default]
    Untouched,
    Valid,
    Invalid(InvalidReason),
}

impl FieldValidationState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValidationState::Invalid(_))
    }
}

impl From<Result<(), InvalidReason>> for FieldValidationState {
    fn from(result: Result<(), InvalidReason>) -> Self {
        match result {
            Ok(()) => FieldValidationState::Valid,
            Err(reason) => FieldValidationState::Invalid(reason),
        }
    }
}

/// Applies the rules in priority order and reports the first failure.
// whitespace as browser string trimming sees it, byte-order mark included
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn validate(field: &FieldSnapshot) -> Result<(), InvalidReason> {
    let value = field.value.trim_matches(is_trimmed);
    if value.is_empty() {
        return if field.required {
            Err(InvalidReason::Required)
        } else {
            Ok(())
        };
    }
    match field.kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(InvalidReason::InvalidEmail),
        FieldKind::Tel if !PHONE_RE.is_match(value) => Err(InvalidReason::InvalidPhone),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Accept,
    Reject { first_invalid: usize },
}

/// Decides a submit from per-field states given in document order.
pub fn decide_submit(states: &[FieldValidationState]) -> SubmitDecision {
    match states.iter().position(FieldValidationState::is_invalid) {
        Some(first_invalid) => SubmitDecision::Reject { first_invalid },
        None => SubmitDecision::Accept,
    }
}
