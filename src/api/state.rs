//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::{Config, Environment};
use crate::errors::AppResult;
use crate::infra::{CourseStore, InMemoryStudents, StateStore};
use crate::services::{StudentManager, StudentService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// Student service
    pub student_service: Arc<dyn StudentService>,
    /// Deployment environment, read by the panic responder
    pub environment: Environment,
}

impl AppState {
    /// Build the state with the seeded in-memory dataset.
    ///
    /// This is the recommended initialization: reference data and the
    /// demonstration students are loaded once, then shared by every
    /// request.
    pub fn from_seed(config: &Config) -> AppResult<Self> {
        let states = Arc::new(StateStore::seeded());
        let courses = Arc::new(CourseStore::seeded());
        let students = Arc::new(InMemoryStudents::seeded(courses.all(), states.all())?);

        let student_service = Arc::new(StudentManager::new(students, courses, states));

        Ok(Self {
            student_service,
            environment: config.environment,
        })
    }

    /// Create application state with a manually injected service.
    pub fn new(student_service: Arc<dyn StudentService>, environment: Environment) -> Self {
        Self {
            student_service,
            environment,
        }
    }
}
