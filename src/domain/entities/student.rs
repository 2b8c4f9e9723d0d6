//! Student entity.

use serde::Serialize;

/// A registered student.
///
/// Ids are assigned sequentially by the store and never reused, even after
/// deletes. The email is unique (case-sensitive) across all students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Input data for creating a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Input data for updating an existing student.
///
/// Updates are full replacements: both fields are required and the new email
/// is re-checked for uniqueness against all other students.
#[derive(Debug, Clone)]
pub struct UpdateStudent {
    pub name: String,
    pub email: String,
}
