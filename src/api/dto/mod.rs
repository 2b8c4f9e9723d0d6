//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Request fields are `Option<String>` with
//! `#[validate(required, ...)]` so a missing field is rejected as a uniform
//! 400 rather than a deserialization failure.

pub mod courses;
pub mod students;
