//! Mock authentication.
//!
//! Logging in always succeeds (bar one reserved e-mail) and hands out the same
//! static token. Protected routes only check that a bearer token is present.
//! None of this is a security boundary.

mod log_in;
mod middleware;

pub use log_in::{log_in, register};
pub use middleware::{USER_EMAIL_HEADER, auth_guard};

/// The token handed out to every user that logs in or registers.
pub const SAMPLE_TOKEN: &str = "sample-jwt-token";
