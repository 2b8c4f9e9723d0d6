//! Course entity and its enrollment roster.

use serde::Serialize;
use std::collections::BTreeSet;

/// A course with its enrollment roster.
///
/// The roster is a set of student ids: a student is enrolled at most once per
/// course, and `BTreeSet` keeps the serialized roster deterministically
/// ordered. The wire field name is `enrolledStudentIds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub enrolled_student_ids: BTreeSet<i64>,
}

impl Course {
    /// Creates a new Course with an empty roster.
    pub fn new(id: i64, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            enrolled_student_ids: BTreeSet::new(),
        }
    }
}

/// Input data for creating a new course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
}
