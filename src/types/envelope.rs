//! Standard response envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain;

/// Uniform wrapper around every API response.
///
/// Success carries `result`; failure carries the error triple. All
/// fields are always serialized so clients see one stable shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize = ()> {
    pub result: Option<T>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub invalid_field: Option<String>,
    pub time_generated: DateTime<Utc>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            result: Some(result),
            error_code: None,
            error_message: None,
            invalid_field: None,
            time_generated: Utc::now(),
        }
    }
}

impl Envelope {
    /// A success with no payload.
    pub fn empty() -> Self {
        Self {
            result: None,
            error_code: None,
            error_message: None,
            invalid_field: None,
            time_generated: Utc::now(),
        }
    }

    pub fn error(error: &domain::Error, invalid_field: Option<String>) -> Self {
        Self {
            result: None,
            error_code: Some(error.code().to_string()),
            error_message: Some(error.message().to_string()),
            invalid_field,
            time_generated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_keeps_error_fields_null() {
        let envelope = Envelope::ok(42);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["result"], 42);
        assert!(json["errorCode"].is_null());
        assert!(json["invalidField"].is_null());
        assert!(json["timeGenerated"].is_string());
    }

    #[test]
    fn error_carries_the_triple() {
        let envelope = Envelope::error(
            &domain::Error::email_is_taken("alice@gmail.com"),
            Some("email".to_string()),
        );
        let json = serde_json::to_value(&envelope).unwrap();

        assert!(json["result"].is_null());
        assert_eq!(json["errorCode"], "student.email.is.taken");
        assert_eq!(json["invalidField"], "email");
    }
}
