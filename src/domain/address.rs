//! Address entity.

use super::error::{DomainResult, Error};
use super::state::State;
use crate::config::{MAX_CITY_LENGTH, MAX_STREET_LENGTH, MAX_ZIP_CODE_LENGTH};

/// A validated postal address.
///
/// Composes three independent length checks with a [`State`] creation;
/// the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    city: String,
    state: State,
    zip_code: String,
}

impl Address {
    pub fn create(
        street: &str,
        city: &str,
        state: &str,
        zip_code: &str,
        allowed_states: &[String],
    ) -> DomainResult<Self> {
        let street = required_with_max_length(street, "street", MAX_STREET_LENGTH)?;
        let city = required_with_max_length(city, "city", MAX_CITY_LENGTH)?;
        let state = State::create(state, allowed_states)?;
        let zip_code = required_with_max_length(zip_code, "zip code", MAX_ZIP_CODE_LENGTH)?;

        Ok(Self {
            street,
            city,
            state,
            zip_code,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

fn required_with_max_length(input: &str, name: &str, max: usize) -> DomainResult<String> {
    if input.trim().is_empty() {
        return Err(Error::value_is_required());
    }

    let value = input.trim();

    if value.len() > max {
        return Err(Error::invalid_length(Some(name)));
    }

    Ok(value.to_string())
}
