//! Handlers for student endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::students::{CreateStudentRequest, StudentListResponse, UpdateStudentRequest};
use crate::domain::entities::Student;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all students in insertion order.
///
/// # Endpoint
///
/// `GET /students` → 200 `{"students": [...]}`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = state.store.list_students()?;
    Ok(Json(StudentListResponse { students }))
}

/// Retrieves a single student.
///
/// # Endpoint
///
/// `GET /students/{id}` → 200 Student
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn get_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Student>, AppError> {
    let student = state.store.get_student(id)?;
    Ok(Json(student))
}

/// Creates a new student.
///
/// # Endpoint
///
/// `POST /students` → 201 Student
///
/// # Errors
///
/// Returns 400 Bad Request if `name` or `email` is missing/empty, or if the
/// email is already registered.
pub async fn create_student_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = state.store.create_student(payload.into_new_student()?)?;

    tracing::info!(id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// Replaces a student's name and email.
///
/// # Endpoint
///
/// `PUT /students/{id}` → 200 Student
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
/// Returns 400 Bad Request on missing fields or a duplicate email.
pub async fn update_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, AppError> {
    let student = state.store.update_student(id, payload.into_update()?)?;
    Ok(Json(student))
}

/// Deletes a student and unenrolls it from every course.
///
/// # Endpoint
///
/// `DELETE /students/{id}` → 204 No Content
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn delete_student_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.store.delete_student(id)?;

    tracing::info!(id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}
