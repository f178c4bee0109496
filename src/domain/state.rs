//! State value object.

use super::error::{DomainResult, Error};
use crate::config::STATE_CODE_LENGTH;

/// A two-letter state code validated against a reference list.
///
/// The list of allowed codes is supplied by the caller rather than
/// hardcoded here; the reference data lives in its own store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    code: String,
}

impl State {
    pub fn create(input: &str, allowed_states: &[String]) -> DomainResult<Self> {
        if input.trim().is_empty() {
            return Err(Error::value_is_required());
        }

        let code = input.trim().to_uppercase();

        if code.len() != STATE_CODE_LENGTH {
            return Err(Error::invalid_length(Some("state")));
        }

        if !allowed_states.iter().any(|allowed| *allowed == code) {
            return Err(Error::invalid_state(input.trim()));
        }

        Ok(Self { code })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
