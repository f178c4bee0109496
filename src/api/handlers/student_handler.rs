//! Student handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Address, Enrollment, Id, PhoneNumber, Student};
use crate::errors::AppResult;
use crate::services::{AddressFields, EnrollmentFields, PhoneFields};
use crate::types::Envelope;

/// Student registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Full name
    #[validate(custom(function = crate::api::validators::student_name))]
    #[schema(example = "Alice Alison")]
    pub name: String,
    /// Email address, unique across students
    #[validate(custom(function = crate::api::validators::email))]
    #[schema(example = "alice@gmail.com")]
    pub email: String,
    /// Optional contact phone
    #[validate(custom(function = crate::api::validators::phone))]
    pub phone: Option<PhoneDto>,
    /// Between one and three addresses
    #[validate(custom(function = crate::api::validators::address_count), nested)]
    pub addresses: Vec<AddressDto>,
}

/// Personal info update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditPersonalInfoRequest {
    #[validate(custom(function = crate::api::validators::student_name))]
    #[schema(example = "Alice Smith")]
    pub name: String,
    #[validate(custom(function = crate::api::validators::address_count), nested)]
    pub addresses: Vec<AddressDto>,
}

/// Enrollment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollRequest {
    #[validate(nested)]
    pub enrollments: Vec<CourseEnrollmentDto>,
}

/// Postal address
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[validate(custom(function = crate::api::validators::required))]
    #[schema(example = "1234 Main St")]
    pub street: String,
    #[validate(custom(function = crate::api::validators::required))]
    #[schema(example = "Arlington")]
    pub city: String,
    #[validate(custom(function = crate::api::validators::required))]
    #[schema(example = "VA")]
    pub state: String,
    #[validate(custom(function = crate::api::validators::required))]
    #[schema(example = "22201")]
    pub zip_code: String,
}

/// Phone number, discriminated by format
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PhoneDto {
    /// Ten digits, e.g. "7035551234"
    Us { number: String },
    /// `+` and country code, e.g. "+4915112345678"
    International { number: String },
}

/// A course held with a grade
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CourseEnrollmentDto {
    #[validate(custom(function = crate::api::validators::required))]
    #[schema(example = "Calculus")]
    pub course: String,
    #[validate(custom(function = crate::api::validators::grade))]
    #[schema(example = "A")]
    pub grade: String,
}

/// Registration response
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Assigned student id
    #[schema(value_type = i64, example = 3)]
    pub id: Id<Student>,
}

/// Full student view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneDto>,
    pub addresses: Vec<AddressDto>,
    pub enrollments: Vec<CourseEnrollmentDto>,
}

impl From<&PhoneNumber> for PhoneDto {
    fn from(phone: &PhoneNumber) -> Self {
        match phone {
            PhoneNumber::Us { number } => PhoneDto::Us {
                number: number.clone(),
            },
            PhoneNumber::International { number } => PhoneDto::International {
                number: number.clone(),
            },
        }
    }
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            city: address.city().to_string(),
            state: address.state().code().to_string(),
            zip_code: address.zip_code().to_string(),
        }
    }
}

impl From<&Enrollment> for CourseEnrollmentDto {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            course: enrollment.course().name().to_string(),
            grade: enrollment.grade().to_string(),
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            name: student.name().value().to_string(),
            email: student.email().value().to_string(),
            phone: student.phone().map(PhoneDto::from),
            addresses: student.addresses().iter().map(AddressDto::from).collect(),
            enrollments: student
                .enrollments()
                .iter()
                .map(CourseEnrollmentDto::from)
                .collect(),
        }
    }
}

impl From<PhoneDto> for PhoneFields {
    fn from(phone: PhoneDto) -> Self {
        match phone {
            PhoneDto::Us { number } => PhoneFields::Us { number },
            PhoneDto::International { number } => PhoneFields::International { number },
        }
    }
}

impl From<AddressDto> for AddressFields {
    fn from(address: AddressDto) -> Self {
        Self {
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
        }
    }
}

impl From<CourseEnrollmentDto> for EnrollmentFields {
    fn from(enrollment: CourseEnrollmentDto) -> Self {
        Self {
            course: enrollment.course,
            grade: enrollment.grade,
        }
    }
}

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/:id", get(get_student).put(edit_personal_info))
        .route("/:id/enrollments", post(enroll))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Student registered", body = RegisterResponse),
        (status = 400, description = "Validation failure or email already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<Envelope<RegisterResponse>>> {
    let id = state
        .student_service
        .register(
            payload.name,
            payload.email,
            payload.phone.map(PhoneFields::from),
            payload.addresses.into_iter().map(AddressFields::from).collect(),
        )
        .await?;

    Ok(Json(Envelope::ok(RegisterResponse { id })))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Envelope<StudentResponse>>> {
    let student = state.student_service.get_student(Id::new(id)).await?;

    Ok(Json(Envelope::ok(StudentResponse::from(student))))
}

/// Replace a student's name and addresses
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = EditPersonalInfoRequest,
    responses(
        (status = 200, description = "Personal info updated"),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn edit_personal_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<EditPersonalInfoRequest>,
) -> AppResult<Json<Envelope>> {
    state
        .student_service
        .edit_personal_info(
            Id::new(id),
            payload.name,
            payload.addresses.into_iter().map(AddressFields::from).collect(),
        )
        .await?;

    Ok(Json(Envelope::empty()))
}

/// Enroll a student into courses
#[utoipa::path(
    post,
    path = "/api/students/{id}/enrollments",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Enrollments added"),
        (status = 400, description = "Unknown course, bad grade, duplicate or too many enrollments"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<EnrollRequest>,
) -> AppResult<Json<Envelope>> {
    state
        .student_service
        .enroll(
            Id::new(id),
            payload
                .enrollments
                .into_iter()
                .map(EnrollmentFields::from)
                .collect(),
        )
        .await?;

    Ok(Json(Envelope::empty()))
}
