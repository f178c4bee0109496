//! Student repository: trait plus the in-memory implementation.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Address, Course, Email, Enrollment, Grade, Id, Student, StudentName};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by identifier.
    async fn get_by_id(&self, id: Id<Student>) -> AppResult<Option<Student>>;

    /// Find a student by normalized email address.
    async fn get_by_email(&self, email: &Email) -> AppResult<Option<Student>>;

    /// Persist a student, assigning an identifier on first save.
    /// Returns the student's id.
    async fn save(&self, student: Student) -> AppResult<Id<Student>>;
}

/// In-memory student store.
///
/// A mutex guards the table: the dataset is shared across request
/// handlers and the collection itself is not thread-safe.
pub struct InMemoryStudents {
    inner: Mutex<StudentTable>,
}

#[derive(Default)]
struct StudentTable {
    rows: Vec<Student>,
    last_id: i64,
}

impl StudentTable {
    fn upsert(&mut self, mut student: Student) -> Id<Student> {
        let id = match student.id() {
            Some(id) => id,
            None => {
                self.last_id += 1;
                let id = Id::new(self.last_id);
                student.set_id(id);
                id
            }
        };

        self.rows.retain(|row| row.id() != Some(id));
        self.rows.push(student);
        id
    }
}

impl InMemoryStudents {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StudentTable::default()),
        }
    }

    /// A store pre-populated with the demonstration dataset: Alice
    /// (Calculus, A) and Bob (History, B).
    pub fn seeded(courses: &[Course], allowed_states: &[String]) -> AppResult<Self> {
        let course = |name: &str| {
            courses
                .iter()
                .find(|course| course.name() == name)
                .cloned()
                .ok_or_else(|| AppError::internal(format!("seed course '{name}' missing")))
        };

        let mut alice = Student::new(
            Email::create("alice@gmail.com")?,
            StudentName::create("Alice Alison")?,
            None,
            vec![Address::create(
                "1234 Main St",
                "Arlington",
                "VA",
                "22201",
                allowed_states,
            )?],
        )?;
        alice.enroll(vec![Enrollment::new(course("Calculus")?, Grade::A)])?;

        let mut bob = Student::new(
            Email::create("bob@gmail.com")?,
            StudentName::create("Bob Bobson")?,
            None,
            vec![Address::create(
                "2345 Second St",
                "Barlington",
                "VA",
                "22202",
                allowed_states,
            )?],
        )?;
        bob.enroll(vec![Enrollment::new(course("History")?, Grade::B)])?;

        let mut table = StudentTable::default();
        table.upsert(alice);
        table.upsert(bob);

        Ok(Self {
            inner: Mutex::new(table),
        })
    }

    fn table(&self) -> AppResult<MutexGuard<'_, StudentTable>> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("student store lock poisoned"))
    }
}

impl Default for InMemoryStudents {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudents {
    async fn get_by_id(&self, id: Id<Student>) -> AppResult<Option<Student>> {
        let table = self.table()?;
        Ok(table.rows.iter().find(|row| row.id() == Some(id)).cloned())
    }

    async fn get_by_email(&self, email: &Email) -> AppResult<Option<Student>> {
        let table = self.table()?;
        Ok(table.rows.iter().find(|row| row.email() == email).cloned())
    }

    async fn save(&self, student: Student) -> AppResult<Id<Student>> {
        let mut table = self.table()?;
        Ok(table.upsert(student))
    }
}
