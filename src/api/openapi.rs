//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::student_handler;

/// OpenAPI documentation for the Student Registry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Registry",
        version = "0.1.0",
        description = "Student registration API with a validated domain model",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        student_handler::register,
        student_handler::get_student,
        student_handler::edit_personal_info,
        student_handler::enroll,
    ),
    components(
        schemas(
            student_handler::RegisterRequest,
            student_handler::RegisterResponse,
            student_handler::EditPersonalInfoRequest,
            student_handler::EnrollRequest,
            student_handler::StudentResponse,
            student_handler::AddressDto,
            student_handler::PhoneDto,
            student_handler::CourseEnrollmentDto,
        )
    ),
    tags(
        (name = "Students", description = "Student registration and enrollment")
    )
)]
pub struct ApiDoc;
