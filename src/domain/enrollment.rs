//! Enrollment value object and batch resolution.

use super::course::Course;
use super::error::{DomainResult, Error};
use super::grade::Grade;

/// A course held by a student with the grade received.
///
/// Equality goes by course: a student cannot hold two enrollments in
/// the same course, whatever the grades.
#[derive(Debug, Clone)]
pub struct Enrollment {
    course: Course,
    grade: Grade,
}

impl Enrollment {
    pub fn new(course: Course, grade: Grade) -> Self {
        Self { course, grade }
    }

    /// Resolve a batch of `(course name, grade)` pairs against the
    /// course list. Fail-fast: the first unresolved course or invalid
    /// grade rejects the whole batch, and nothing is committed.
    pub fn create_batch(
        pairs: &[(String, String)],
        all_courses: &[Course],
    ) -> DomainResult<Vec<Enrollment>> {
        let mut enrollments = Vec::with_capacity(pairs.len());

        for (course_name, grade_text) in pairs {
            let grade = Grade::create(grade_text)?;
            let course = all_courses
                .iter()
                .find(|course| course.name() == course_name.trim())
                .ok_or_else(|| Error::course_is_invalid(course_name.trim()))?;

            enrollments.push(Enrollment::new(course.clone(), grade));
        }

        Ok(enrollments)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.course == other.course
    }
}

impl Eq for Enrollment {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Id;

    fn courses() -> Vec<Course> {
        vec![
            Course::new(Id::new(1), "Calculus", 5),
            Course::new(Id::new(2), "History", 4),
        ]
    }

    #[test]
    fn resolves_all_pairs() {
        let pairs = vec![
            ("Calculus".to_string(), "A".to_string()),
            (" History ".to_string(), "b".to_string()),
        ];

        let enrollments = Enrollment::create_batch(&pairs, &courses()).unwrap();

        assert_eq!(enrollments.len(), 2);
        assert_eq!(enrollments[0].course().name(), "Calculus");
        assert_eq!(enrollments[1].grade(), Grade::B);
    }

    #[test]
    fn unknown_course_rejects_the_whole_batch() {
        let pairs = vec![
            ("Calculus".to_string(), "A".to_string()),
            ("Alchemy".to_string(), "B".to_string()),
        ];

        let error = Enrollment::create_batch(&pairs, &courses()).unwrap_err();
        assert_eq!(error.code(), "course.is.invalid");
        assert_eq!(error.message(), "Course 'Alchemy' is invalid");
    }

    #[test]
    fn invalid_grade_rejects_the_whole_batch() {
        let pairs = vec![("Calculus".to_string(), "Z".to_string())];

        let error = Enrollment::create_batch(&pairs, &courses()).unwrap_err();
        assert_eq!(error.code(), "value.is.invalid");
    }

    #[test]
    fn equality_goes_by_course() {
        let calculus = Course::new(Id::new(1), "Calculus", 5);
        let a = Enrollment::new(calculus.clone(), Grade::A);
        let b = Enrollment::new(calculus, Grade::F);

        assert_eq!(a, b);
    }
}
