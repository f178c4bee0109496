//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod student_service;

pub use student_service::{
    AddressFields, EnrollmentFields, PhoneFields, StudentManager, StudentService,
};
