//! Student aggregate.

use super::address::Address;
use super::email::Email;
use super::enrollment::Enrollment;
use super::error::{DomainResult, Error};
use super::id::Id;
use super::name::StudentName;
use super::phone::PhoneNumber;
use crate::config::{MAX_ADDRESSES, MAX_ENROLLMENTS, MIN_ADDRESSES};

/// The registration aggregate.
///
/// Invariants held at every point:
/// - email is set at construction and never changes;
/// - between one and three addresses are on file;
/// - at most two enrollments, never two in the same course.
///
/// Mutation either applies fully or rejects without touching state.
#[derive(Debug, Clone)]
pub struct Student {
    id: Option<Id<Student>>,
    email: Email,
    name: StudentName,
    phone: Option<PhoneNumber>,
    addresses: Vec<Address>,
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Build a new, not-yet-persisted student. The identifier is
    /// assigned by the repository on first save.
    pub fn new(
        email: Email,
        name: StudentName,
        phone: Option<PhoneNumber>,
        addresses: Vec<Address>,
    ) -> DomainResult<Self> {
        check_address_count(&addresses)?;

        Ok(Self {
            id: None,
            email,
            name,
            phone,
            addresses,
            enrollments: Vec::new(),
        })
    }

    /// Replace the mutable personal fields as one unit.
    pub fn edit_personal_info(
        &mut self,
        name: StudentName,
        addresses: Vec<Address>,
    ) -> DomainResult<()> {
        check_address_count(&addresses)?;

        self.name = name;
        self.addresses = addresses;
        Ok(())
    }

    /// Append a batch of enrollments, or reject the batch entirely.
    ///
    /// Rejects when the total would exceed the cap, or when any
    /// proposed enrollment duplicates a held one (or an earlier one in
    /// the same batch) by course.
    pub fn enroll(&mut self, enrollments: Vec<Enrollment>) -> DomainResult<()> {
        if self.enrollments.len() + enrollments.len() > MAX_ENROLLMENTS {
            return Err(Error::too_many_enrollments());
        }

        let mut combined: Vec<&Enrollment> = self.enrollments.iter().collect();
        for enrollment in &enrollments {
            if combined.iter().any(|held| *held == enrollment) {
                return Err(Error::already_enrolled(enrollment.course().name()));
            }
            combined.push(enrollment);
        }

        self.enrollments.extend(enrollments);
        Ok(())
    }

    pub fn id(&self) -> Option<Id<Student>> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: Id<Student>) {
        self.id = Some(id);
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }
}

fn check_address_count(addresses: &[Address]) -> DomainResult<()> {
    if addresses.len() < MIN_ADDRESSES {
        return Err(Error::collection_is_too_small());
    }
    if addresses.len() > MAX_ADDRESSES {
        return Err(Error::collection_is_too_large());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Grade};

    fn allowed() -> Vec<String> {
        vec!["VA".to_string(), "DC".to_string()]
    }

    fn address() -> Address {
        Address::create("1234 Main St", "Arlington", "VA", "22201", &allowed()).unwrap()
    }

    fn student() -> Student {
        Student::new(
            Email::create("alice@gmail.com").unwrap(),
            StudentName::create("Alice Alison").unwrap(),
            None,
            vec![address()],
        )
        .unwrap()
    }

    fn enrollment(id: i64, name: &str, grade: Grade) -> Enrollment {
        Enrollment::new(Course::new(Id::new(id), name, 4), grade)
    }

    #[test]
    fn new_student_has_no_id_and_no_enrollments() {
        let student = student();
        assert!(student.id().is_none());
        assert!(student.enrollments().is_empty());
    }

    #[test]
    fn rejects_empty_address_list() {
        let error = Student::new(
            Email::create("alice@gmail.com").unwrap(),
            StudentName::create("Alice Alison").unwrap(),
            None,
            vec![],
        )
        .unwrap_err();

        assert_eq!(error.code(), "collection.is.too.small");
    }

    #[test]
    fn rejects_four_addresses() {
        let error = Student::new(
            Email::create("alice@gmail.com").unwrap(),
            StudentName::create("Alice Alison").unwrap(),
            None,
            vec![address(), address(), address(), address()],
        )
        .unwrap_err();

        assert_eq!(error.code(), "collection.is.too.large");
    }

    #[test]
    fn enrolls_up_to_the_cap() {
        let mut student = student();
        student
            .enroll(vec![
                enrollment(1, "Calculus", Grade::A),
                enrollment(2, "History", Grade::B),
            ])
            .unwrap();

        assert_eq!(student.enrollments().len(), 2);
    }

    #[test]
    fn rejects_a_third_enrollment_and_keeps_state() {
        let mut student = student();
        student
            .enroll(vec![
                enrollment(1, "Calculus", Grade::A),
                enrollment(2, "History", Grade::B),
            ])
            .unwrap();

        let error = student
            .enroll(vec![enrollment(3, "Literature", Grade::C)])
            .unwrap_err();

        assert_eq!(error.code(), "student.too.many.enrollments");
        assert_eq!(student.enrollments().len(), 2);
    }

    #[test]
    fn rejects_duplicate_course_and_reports_it() {
        let mut student = student();
        student.enroll(vec![enrollment(1, "Calculus", Grade::A)]).unwrap();

        let error = student
            .enroll(vec![enrollment(1, "Calculus", Grade::F)])
            .unwrap_err();

        assert_eq!(error.code(), "student.already.enrolled");
        assert_eq!(
            error.message(),
            "Student already enrolled into course 'Calculus'"
        );
        assert_eq!(student.enrollments().len(), 1);
    }

    #[test]
    fn rejects_duplicates_within_one_batch() {
        let mut student = student();

        let error = student
            .enroll(vec![
                enrollment(1, "Calculus", Grade::A),
                enrollment(1, "Calculus", Grade::B),
            ])
            .unwrap_err();

        assert_eq!(error.code(), "student.already.enrolled");
        assert!(student.enrollments().is_empty());
    }

    #[test]
    fn edit_replaces_name_and_addresses() {
        let mut student = student();
        let new_address =
            Address::create("900 G St NW", "Washington", "DC", "20001", &allowed()).unwrap();

        student
            .edit_personal_info(
                StudentName::create("Alice Smith").unwrap(),
                vec![new_address.clone()],
            )
            .unwrap();

        assert_eq!(student.name().value(), "Alice Smith");
        assert_eq!(student.addresses(), &[new_address]);
    }

    #[test]
    fn edit_rejects_bad_address_count_without_touching_state() {
        let mut student = student();

        let error = student
            .edit_personal_info(StudentName::create("Alice Smith").unwrap(), vec![])
            .unwrap_err();

        assert_eq!(error.code(), "collection.is.too.small");
        assert_eq!(student.name().value(), "Alice Alison");
    }
}
