//! HTTP request handlers.

pub mod student_handler;

pub use student_handler::student_routes;
