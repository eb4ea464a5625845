//! Session token issuance and validation.
//!
//! This crate mints and verifies HMAC-SHA256 signed JWTs carrying a
//! user's identity, role, email and display name. The signing key is
//! derived once at startup and is immutable for the life of the process.

mod claims;
mod config;
mod token;

pub use claims::{Claims, Role};
pub use config::JwtConfig;
pub use token::{TokenService, MIN_SECRET_LEN};
