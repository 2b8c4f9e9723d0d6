//! Domain layer containing the core business data model.
//!
//! Entities here are plain data structures without mutation logic; all state
//! changes go through [`crate::storage::Store`], which owns the invariants
//! (unique email, cascading unenroll, monotonic ids).

pub mod entities;
