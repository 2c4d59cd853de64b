//! Required-field checks run before a form issues its request.
//!
//! These mirror the browser's `required` attributes so that a payload built in
//! Rust is never sent with a missing field. They are not a structured validator:
//! the API remains the authority on what it accepts.

use thiserror::Error;

/// Longest accepted email address, per RFC 5321.
pub const MAX_EMAIL_LEN: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Empty { field: &'static str },
    #[error("{field} is invalid: expected {expected}")]
    InvalidFormat {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{field} is too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::InvalidFormat { field, .. } | Self::TooLong { field, .. } => {
                field
            }
        }
    }
}

/// Trimmed value of a required field.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] when nothing but whitespace was entered.
pub fn require(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// `None` for a blank optional field, the trimmed value otherwise.
pub fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Splits a comma-separated tag field, dropping blank entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Checks the basic `local@domain.tld` shape of an email address.
///
/// # Errors
///
/// Returns an error if the address is blank, longer than [`MAX_EMAIL_LEN`], or
/// not of the form `local@domain` with a dotted domain.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    const FIELD: &str = "Email";
    const EXPECTED: &str = "an address like user@example.com";

    let email = require(FIELD, input)?;
    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: FIELD,
            max: MAX_EMAIL_LEN,
            actual: email.len(),
        });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidFormat {
            field: FIELD,
            expected: EXPECTED,
        });
    };

    let domain_ok = domain.contains('.')
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || local.len() > 64 || !domain_ok || email.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: FIELD,
            expected: EXPECTED,
        });
    }

    Ok(email)
}
