//! Infrastructure layer - External systems integration
//!
//! The only external system here is the in-memory dataset standing in
//! for a datastore.

pub mod repositories;

pub use repositories::{CourseStore, InMemoryStudents, StateStore, StudentRepository};
