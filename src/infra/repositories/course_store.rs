//! Course reference data.

use crate::domain::{Course, Id};

/// Immutable course catalog, seeded once at startup.
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn seeded() -> Self {
        Self {
            courses: vec![
                Course::new(Id::new(1), "Calculus", 5),
                Course::new(Id::new(2), "History", 4),
                Course::new(Id::new(3), "Literature", 4),
            ],
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.name() == name)
    }

    pub fn all(&self) -> &[Course] {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let store = CourseStore::seeded();
        assert_eq!(store.get_by_name("Calculus").unwrap().credits(), 5);
        assert!(store.get_by_name("Alchemy").is_none());
    }
}
