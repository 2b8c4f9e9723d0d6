//! # Course Registry
//!
//! A small student and course registry service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation of concerns:
//!
//! - **Domain Layer** ([`domain`]) - Core entities (students, courses)
//! - **Storage Layer** ([`storage`]) - The in-memory registry store owning all
//!   mutation logic and consistency rules
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Student CRUD with a unique-email constraint
//! - Course CRUD with per-course enrollment rosters
//! - Cascading unenroll when a student is deleted
//! - Monotonic id assignment (ids are never reused after deletes)
//! - Reset-and-reseed lifecycle for test isolation
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod storage;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Course, NewCourse, NewStudent, Student, UpdateStudent};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::storage::Store;
}
