//! Student name value object.

use super::error::{DomainResult, Error};
use crate::config::MAX_NAME_LENGTH;

/// A validated, trimmed student name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName {
    value: String,
}

impl StudentName {
    pub fn create(input: &str) -> DomainResult<Self> {
        if input.trim().is_empty() {
            return Err(Error::value_is_required());
        }

        let name = input.trim();

        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::invalid_length(Some("name")));
        }

        Ok(Self {
            value: name.to_string(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for StudentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_the_value() {
        let name = StudentName::create(" Alice Alison ").unwrap();
        assert_eq!(name.value(), "Alice Alison");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(
            StudentName::create("").unwrap_err().code(),
            "value.is.required"
        );
    }

    #[test]
    fn rejects_overlong_input() {
        let error = StudentName::create(&"x".repeat(201)).unwrap_err();
        assert_eq!(error.code(), "invalid.string.length");
    }
}
