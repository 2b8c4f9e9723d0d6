//! Handlers for course and enrollment endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::courses::{CourseListResponse, CreateCourseRequest};
use crate::domain::entities::Course;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all courses in insertion order.
///
/// # Endpoint
///
/// `GET /courses` → 200 `{"courses": [...]}`
pub async fn list_courses_handler(
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = state.store.list_courses()?;
    Ok(Json(CourseListResponse { courses }))
}

/// Retrieves a single course with its roster.
///
/// # Endpoint
///
/// `GET /courses/{id}` → 200 Course
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn get_course_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Course>, AppError> {
    let course = state.store.get_course(id)?;
    Ok(Json(course))
}

/// Creates a new course with an empty roster.
///
/// # Endpoint
///
/// `POST /courses` → 201 Course
///
/// # Errors
///
/// Returns 400 Bad Request if `name` or `description` is missing/empty.
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = state.store.create_course(payload.into_new_course()?)?;

    tracing::info!(id = course.id, "Course created");

    Ok((StatusCode::CREATED, Json(course)))
}

/// Deletes a course, discarding its roster. Succeeds whether or not students
/// are currently enrolled.
///
/// # Endpoint
///
/// `DELETE /courses/{id}` → 204 No Content
///
/// # Errors
///
/// Returns 404 Not Found if the id does not exist.
pub async fn delete_course_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.store.delete_course(id)?;

    tracing::info!(id, "Course deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Enrolls a student in a course.
///
/// # Endpoint
///
/// `POST /courses/{course_id}/students/{student_id}` → 201 Course
///
/// Enrolling an already-enrolled student repeats the 201; the roster is a
/// set, so the second call changes nothing.
///
/// # Errors
///
/// Returns 404 Not Found if either the course or the student does not exist.
pub async fn enroll_student_handler(
    Path((course_id, student_id)): Path<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = state.store.enroll_student(course_id, student_id)?;

    tracing::info!(course_id, student_id, "Student enrolled");

    Ok((StatusCode::CREATED, Json(course)))
}

/// Removes a student from a course roster.
///
/// # Endpoint
///
/// `DELETE /courses/{course_id}/students/{student_id}` → 204 No Content
///
/// Unenrolling a student who is not on the roster still returns 204.
///
/// # Errors
///
/// Returns 404 Not Found if the course does not exist.
pub async fn unenroll_student_handler(
    Path((course_id, student_id)): Path<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.store.unenroll_student(course_id, student_id)?;

    tracing::info!(course_id, student_id, "Student unenrolled");

    Ok(StatusCode::NO_CONTENT)
}
