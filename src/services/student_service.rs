//! Student service - registration, retrieval, personal-info edits and
//! enrollment.
//!
//! Orchestrates the repositories and the domain model; every business
//! rule lives in the domain, the service wires inputs and reference
//! data together and persists the outcome. A rejected operation never
//! reaches `save`, so failures leave the dataset untouched.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    self, Address, Email, Enrollment, Id, PhoneNumber, Student, StudentName,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{CourseStore, StateStore, StudentRepository};

/// Raw address fields as accepted from the outside.
#[derive(Debug, Clone)]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Raw phone input, one variant per accepted format.
#[derive(Debug, Clone)]
pub enum PhoneFields {
    Us { number: String },
    International { number: String },
}

/// Raw `(course, grade)` pair as accepted from the outside.
#[derive(Debug, Clone)]
pub struct EnrollmentFields {
    pub course: String,
    pub grade: String,
}

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Register a new student and return the assigned id.
    async fn register(
        &self,
        name: String,
        email: String,
        phone: Option<PhoneFields>,
        addresses: Vec<AddressFields>,
    ) -> AppResult<Id<Student>>;

    /// Get a student by id.
    async fn get_student(&self, id: Id<Student>) -> AppResult<Student>;

    /// Replace a student's name and addresses.
    async fn edit_personal_info(
        &self,
        id: Id<Student>,
        name: String,
        addresses: Vec<AddressFields>,
    ) -> AppResult<()>;

    /// Enroll a student into a batch of courses.
    async fn enroll(&self, id: Id<Student>, enrollments: Vec<EnrollmentFields>) -> AppResult<()>;
}

/// Concrete implementation of StudentService.
pub struct StudentManager {
    students: Arc<dyn StudentRepository>,
    courses: Arc<CourseStore>,
    states: Arc<StateStore>,
}

impl StudentManager {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        courses: Arc<CourseStore>,
        states: Arc<StateStore>,
    ) -> Self {
        Self {
            students,
            courses,
            states,
        }
    }

    fn build_addresses(&self, addresses: &[AddressFields]) -> AppResult<Vec<Address>> {
        addresses
            .iter()
            .map(|address| {
                Address::create(
                    &address.street,
                    &address.city,
                    &address.state,
                    &address.zip_code,
                    self.states.all(),
                )
            })
            .collect::<domain::DomainResult<Vec<_>>>()
            .map_err(|error| AppError::from(error).with_field("addresses"))
    }

    fn build_phone(phone: Option<PhoneFields>) -> AppResult<Option<PhoneNumber>> {
        let number = match phone {
            None => return Ok(None),
            Some(PhoneFields::Us { number }) => PhoneNumber::create_us(&number),
            Some(PhoneFields::International { number }) => {
                PhoneNumber::create_international(&number)
            }
        };

        number
            .map(Some)
            .map_err(|error| AppError::from(error).with_field("phone"))
    }

    async fn get_existing(&self, id: Id<Student>) -> AppResult<Student> {
        self.students
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(Some(id.value())))
    }
}

#[async_trait]
impl StudentService for StudentManager {
    async fn register(
        &self,
        name: String,
        email: String,
        phone: Option<PhoneFields>,
        addresses: Vec<AddressFields>,
    ) -> AppResult<Id<Student>> {
        let email = Email::create(&email)
            .map_err(|error| AppError::from(error).with_field("email"))?;
        let name = StudentName::create(&name)
            .map_err(|error| AppError::from(error).with_field("name"))?;

        // Email must be unique across the dataset.
        if self.students.get_by_email(&email).await?.is_some() {
            return Err(
                AppError::from(domain::Error::email_is_taken(email.value()))
                    .with_field("email"),
            );
        }

        let phone = Self::build_phone(phone)?;
        let addresses = self.build_addresses(&addresses)?;

        let student = Student::new(email, name, phone, addresses)?;
        let id = self.students.save(student).await?;

        tracing::info!(student_id = %id, "student registered");
        Ok(id)
    }

    async fn get_student(&self, id: Id<Student>) -> AppResult<Student> {
        self.get_existing(id).await
    }

    async fn edit_personal_info(
        &self,
        id: Id<Student>,
        name: String,
        addresses: Vec<AddressFields>,
    ) -> AppResult<()> {
        let mut student = self.get_existing(id).await?;

        let name = StudentName::create(&name)
            .map_err(|error| AppError::from(error).with_field("name"))?;
        let addresses = self.build_addresses(&addresses)?;

        student.edit_personal_info(name, addresses)?;
        self.students.save(student).await?;
        Ok(())
    }

    async fn enroll(&self, id: Id<Student>, enrollments: Vec<EnrollmentFields>) -> AppResult<()> {
        let mut student = self.get_existing(id).await?;

        let pairs: Vec<(String, String)> = enrollments
            .into_iter()
            .map(|enrollment| (enrollment.course, enrollment.grade))
            .collect();

        let enrollments = Enrollment::create_batch(&pairs, self.courses.all())?;
        student.enroll(enrollments)?;

        self.students.save(student).await?;

        tracing::info!(student_id = %id, "enrollments added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockStudentRepository;

    fn manager(repo: MockStudentRepository) -> StudentManager {
        StudentManager::new(
            Arc::new(repo),
            Arc::new(CourseStore::seeded()),
            Arc::new(StateStore::seeded()),
        )
    }

    fn sample_address() -> AddressFields {
        AddressFields {
            street: "1234 Main St".to_string(),
            city: "Arlington".to_string(),
            state: "VA".to_string(),
            zip_code: "22201".to_string(),
        }
    }

    fn sample_student(email: &str) -> Student {
        let states = StateStore::seeded();
        Student::new(
            Email::create(email).unwrap(),
            StudentName::create("Alice Alison").unwrap(),
            None,
            vec![Address::create("1234 Main St", "Arlington", "VA", "22201", states.all())
                .unwrap()],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn register_saves_a_valid_student() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_save().returning(|_| Ok(Id::new(3)));

        let result = manager(repo)
            .register(
                "Carol Carlson".to_string(),
                "carol@gmail.com".to_string(),
                None,
                vec![sample_address()],
            )
            .await;

        assert_eq!(result.unwrap(), Id::new(3));
    }

    #[tokio::test]
    async fn register_rejects_a_taken_email() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Ok(Some(sample_student("alice@gmail.com"))));
        repo.expect_save().never();

        let error = manager(repo)
            .register(
                "Alice Alison".to_string(),
                "alice@gmail.com".to_string(),
                None,
                vec![sample_address()],
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            AppError::Domain { ref error, .. } if error.code() == "student.email.is.taken"
        ));
    }

    #[tokio::test]
    async fn register_rejects_a_bad_email_before_touching_the_store() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_email().never();
        repo.expect_save().never();

        let error = manager(repo)
            .register(
                "Carol Carlson".to_string(),
                "not-an-email".to_string(),
                None,
                vec![sample_address()],
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            AppError::Domain { invalid_field: Some(ref f), .. } if f == "email"
        ));
    }

    #[tokio::test]
    async fn register_validates_the_phone_variant() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_save().never();

        let error = manager(repo)
            .register(
                "Carol Carlson".to_string(),
                "carol@gmail.com".to_string(),
                Some(PhoneFields::Us {
                    number: "123".to_string(),
                }),
                vec![sample_address()],
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            AppError::Domain { invalid_field: Some(ref f), .. } if f == "phone"
        ));
    }

    #[tokio::test]
    async fn get_student_maps_missing_rows_to_not_found() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let error = manager(repo).get_student(Id::new(42)).await.unwrap_err();

        assert!(matches!(error, AppError::NotFound(Some(42))));
    }

    #[tokio::test]
    async fn enroll_rejects_an_unknown_course_without_saving() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(Some(sample_student("alice@gmail.com"))));
        repo.expect_save().never();

        let error = manager(repo)
            .enroll(
                Id::new(1),
                vec![EnrollmentFields {
                    course: "Alchemy".to_string(),
                    grade: "A".to_string(),
                }],
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            AppError::Domain { ref error, .. } if error.code() == "course.is.invalid"
        ));
    }

    #[tokio::test]
    async fn edit_rejects_an_invalid_state_without_saving() {
        let mut repo = MockStudentRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(Some(sample_student("alice@gmail.com"))));
        repo.expect_save().never();

        let mut address = sample_address();
        address.state = "TX".to_string();

        let error = manager(repo)
            .edit_personal_info(Id::new(1), "Alice Smith".to_string(), vec![address])
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            AppError::Domain { ref error, .. } if error.code() == "invalid.state"
        ));
    }
}
