//! Domain error taxonomy.
//!
//! Every business-rule violation maps to one of a closed set of error
//! codes. Domain operations return `Result<T, Error>` instead of
//! panicking, so callers decide how a failure surfaces.

use crate::config::{ERROR_SEPARATOR, MAX_ENROLLMENTS};

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;

/// A coded domain error.
///
/// Immutable value; the message is deterministic for a given code and
/// inputs, so equality covers both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the error as a single string that [`Error::deserialize`]
    /// can reverse. Used to carry domain failures through the request
    /// validation framework without a second error vocabulary.
    pub fn serialize(&self) -> String {
        format!("{}{}{}", self.code, ERROR_SEPARATOR, self.message)
    }

    /// Reverse [`Error::serialize`]. Returns `None` when the input does
    /// not contain the separator.
    pub fn deserialize(input: &str) -> Option<Self> {
        input
            .split_once(ERROR_SEPARATOR)
            .map(|(code, message)| Self::new(code, message))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// Constructors form the closed taxonomy; nothing else creates an Error.
impl Error {
    pub fn value_is_required() -> Self {
        Self::new("value.is.required", "Value is required")
    }

    pub fn value_is_invalid() -> Self {
        Self::new("value.is.invalid", "Value is invalid")
    }

    pub fn invalid_length(name: Option<&str>) -> Self {
        let label = match name {
            Some(name) => format!(" {name} "),
            None => " ".to_string(),
        };
        Self::new("invalid.string.length", format!("Invalid{label}length"))
    }

    pub fn collection_is_too_small() -> Self {
        Self::new("collection.is.too.small", "Collection is too small")
    }

    pub fn collection_is_too_large() -> Self {
        Self::new("collection.is.too.large", "Collection is too large")
    }

    pub fn not_found(id: Option<i64>) -> Self {
        let for_id = match id {
            Some(id) => format!(" for Id '{id}'"),
            None => String::new(),
        };
        Self::new("record.not.found", format!("Record not found{for_id}"))
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new("internal.server.error", message)
    }

    pub fn email_is_taken(email: &str) -> Self {
        Self::new(
            "student.email.is.taken",
            format!("Student email '{email}' is taken"),
        )
    }

    pub fn invalid_state(name: &str) -> Self {
        Self::new("invalid.state", format!("Invalid state: '{name}'"))
    }

    pub fn course_is_invalid(name: &str) -> Self {
        Self::new("course.is.invalid", format!("Course '{name}' is invalid"))
    }

    pub fn too_many_enrollments() -> Self {
        Self::new(
            "student.too.many.enrollments",
            format!("Cannot have more than {MAX_ENROLLMENTS} enrollments"),
        )
    }

    pub fn already_enrolled(course_name: &str) -> Self {
        Self::new(
            "student.already.enrolled",
            format!("Student already enrolled into course '{course_name}'"),
        )
    }
}
