//! Core domain entities representing the registry data model.
//!
//! # Entity Types
//!
//! - [`Student`] - A registered student with a unique email
//! - [`Course`] - A course with its enrollment roster
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for input:
//! - `NewStudent`, `NewCourse` - For creating new records
//! - `UpdateStudent` - For full replacement of a student's fields

pub mod course;
pub mod student;

pub use course::{Course, NewCourse};
pub use student::{NewStudent, Student, UpdateStudent};
