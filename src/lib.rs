//! Student Registry - A student registration API
//!
//! A single-process web API around a rich domain model: value objects
//! validate themselves, entities enforce their invariants, and every
//! domain operation returns a structured result instead of throwing.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (the in-memory dataset)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (response envelope)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Print the OpenAPI document
//! cargo run -- docs
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Email, Grade, Id, Student, StudentName};
pub use errors::{AppError, AppResult};
