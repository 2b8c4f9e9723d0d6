//! In-memory storage layer.
//!
//! [`Store`] is the single source of truth for students, courses, and
//! enrollments. Handlers never touch the collections directly; every read and
//! mutation goes through a `Store` method so the invariants live in one place.

pub mod store;

pub use store::Store;
