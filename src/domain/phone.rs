//! Phone number value object.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{DomainResult, Error};

static US_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("US phone pattern is valid"));
static INTERNATIONAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{7,15}$").expect("international phone pattern is valid"));

/// A validated phone number, one validation rule per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumber {
    /// Ten digits, no country code.
    Us { number: String },
    /// `+` followed by 7 to 15 digits.
    International { number: String },
}

impl PhoneNumber {
    pub fn create_us(input: &str) -> DomainResult<Self> {
        let number = Self::checked(input, &US_PATTERN)?;
        Ok(Self::Us { number })
    }

    pub fn create_international(input: &str) -> DomainResult<Self> {
        let number = Self::checked(input, &INTERNATIONAL_PATTERN)?;
        Ok(Self::International { number })
    }

    fn checked(input: &str, pattern: &Regex) -> DomainResult<String> {
        if input.trim().is_empty() {
            return Err(Error::value_is_required());
        }

        let number = input.trim();

        if !pattern.is_match(number) {
            return Err(Error::value_is_invalid());
        }

        Ok(number.to_string())
    }

    pub fn number(&self) -> &str {
        match self {
            Self::Us { number } | Self::International { number } => number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_number_needs_ten_digits() {
        assert!(PhoneNumber::create_us("7035551234").is_ok());
        assert_eq!(
            PhoneNumber::create_us("703555").unwrap_err().code(),
            "value.is.invalid"
        );
    }

    #[test]
    fn international_number_needs_plus_prefix() {
        assert!(PhoneNumber::create_international("+4915112345678").is_ok());
        assert_eq!(
            PhoneNumber::create_international("4915112345678")
                .unwrap_err()
                .code(),
            "value.is.invalid"
        );
    }

    #[test]
    fn blank_input_is_required() {
        assert_eq!(
            PhoneNumber::create_us(" ").unwrap_err().code(),
            "value.is.required"
        );
    }
}
