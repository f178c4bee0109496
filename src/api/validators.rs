//! Request validation rules backed by the domain factories.
//!
//! Each rule calls the corresponding domain factory and, on failure,
//! carries the serialized domain error through the validation
//! framework's message channel. The extractor deserializes it back, so
//! request validation and business rules share one error vocabulary.

use validator::ValidationError;

use super::handlers::student_handler::{AddressDto, PhoneDto};
use crate::config::{MAX_ADDRESSES, MIN_ADDRESSES};
use crate::domain::{self, DomainResult, Email, Grade, PhoneNumber, StudentName};

pub fn email(value: &str) -> Result<(), ValidationError> {
    domain_rule("email", Email::create(value).map(|_| ()))
}

pub fn student_name(value: &str) -> Result<(), ValidationError> {
    domain_rule("name", StudentName::create(value).map(|_| ()))
}

pub fn grade(value: &str) -> Result<(), ValidationError> {
    domain_rule("grade", Grade::create(value).map(|_| ()))
}

pub fn phone(value: &PhoneDto) -> Result<(), ValidationError> {
    let result = match value {
        PhoneDto::Us { number } => PhoneNumber::create_us(number),
        PhoneDto::International { number } => PhoneNumber::create_international(number),
    };
    domain_rule("phone", result.map(|_| ()))
}

/// Bare presence check for fields whose full validation needs reference
/// data and runs in the domain.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", domain::Error::value_is_required()));
    }
    Ok(())
}

pub fn address_count(value: &[AddressDto]) -> Result<(), ValidationError> {
    if value.len() < MIN_ADDRESSES {
        return Err(failure(
            "addresses",
            domain::Error::collection_is_too_small(),
        ));
    }
    if value.len() > MAX_ADDRESSES {
        return Err(failure(
            "addresses",
            domain::Error::collection_is_too_large(),
        ));
    }
    Ok(())
}

fn domain_rule(code: &'static str, result: DomainResult<()>) -> Result<(), ValidationError> {
    result.map_err(|error| failure(code, error))
}

fn failure(code: &'static str, error: domain::Error) -> ValidationError {
    let mut failure = ValidationError::new(code);
    failure.message = Some(error.serialize().into());
    failure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_carry_the_serialized_domain_error() {
        let failure = email("not-an-email").unwrap_err();
        let message = failure.message.unwrap();

        let restored = domain::Error::deserialize(&message).unwrap();
        assert_eq!(restored.code(), "value.is.invalid");
    }

    #[test]
    fn address_count_bounds() {
        assert!(address_count(&[]).is_err());
        assert!(address_count(&vec![sample(); 4]).is_err());
        assert!(address_count(&[sample()]).is_ok());
    }

    fn sample() -> AddressDto {
        AddressDto {
            street: "1234 Main St".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zip_code: "22201".to_string(),
        }
    }
}
