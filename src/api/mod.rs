//! API layer - HTTP handlers and plumbing
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers and DTOs
//! - Custom extractors
//! - Validation rules
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validators;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
