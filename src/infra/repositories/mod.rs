//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Here persistence is an in-memory dataset seeded at startup.

mod course_store;
mod state_store;
mod student_repository;

pub use course_store::CourseStore;
pub use state_store::StateStore;
pub use student_repository::{InMemoryStudents, StudentRepository};

#[cfg(test)]
pub use student_repository::MockStudentRepository;
