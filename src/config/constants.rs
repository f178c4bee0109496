//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Domain limits
// =============================================================================

/// Maximum email length
pub const MAX_EMAIL_LENGTH: usize = 150;

/// Maximum student name length
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum street length
pub const MAX_STREET_LENGTH: usize = 100;

/// Maximum city length
pub const MAX_CITY_LENGTH: usize = 40;

/// Maximum zip code length
pub const MAX_ZIP_CODE_LENGTH: usize = 5;

/// State codes are two-letter abbreviations
pub const STATE_CODE_LENGTH: usize = 2;

/// A student must keep at least one address on file
pub const MIN_ADDRESSES: usize = 1;

/// A student can keep at most three addresses on file
pub const MAX_ADDRESSES: usize = 3;

/// A student can hold at most two enrollments at a time
pub const MAX_ENROLLMENTS: usize = 2;

// =============================================================================
// Error serialization
// =============================================================================

/// Separator used when round-tripping a domain error through a plain string
pub const ERROR_SEPARATOR: &str = "||";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
