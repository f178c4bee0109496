//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{DomainResult, Error};
use crate::config::MAX_EMAIL_LENGTH;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(.+)@(.+)$").expect("email pattern is valid"));

/// A validated, normalized email address.
///
/// Construction goes through [`Email::create`]; a partially valid email
/// never exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    /// Validate and normalize a raw email string.
    ///
    /// Checks run in order: required, length bound, `@` pattern. The
    /// first failing check wins.
    pub fn create(input: &str) -> DomainResult<Self> {
        if input.trim().is_empty() {
            return Err(Error::value_is_required());
        }

        let email = input.trim();

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(Error::invalid_length(Some("email")));
        }

        if !EMAIL_PATTERN.is_match(email) {
            return Err(Error::value_is_invalid());
        }

        Ok(Self {
            value: email.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_the_value() {
        let email = Email::create("  alice@gmail.com  ").unwrap();
        assert_eq!(email.value(), "alice@gmail.com");
    }

    #[test]
    fn rejects_blank_input() {
        let error = Email::create("   ").unwrap_err();
        assert_eq!(error.code(), "value.is.required");
    }

    #[test]
    fn rejects_overlong_input() {
        let input = format!("{}@example.com", "a".repeat(150));
        let error = Email::create(&input).unwrap_err();
        assert_eq!(error.code(), "invalid.string.length");
    }

    #[test]
    fn rejects_missing_at_sign() {
        let error = Email::create("alice.gmail.com").unwrap_err();
        assert_eq!(error.code(), "value.is.invalid");
    }

    #[test]
    fn equality_goes_by_normalized_value() {
        assert_eq!(
            Email::create(" alice@gmail.com").unwrap(),
            Email::create("alice@gmail.com ").unwrap()
        );
    }
}
