//! Resource route configuration.

use crate::api::handlers::{
    create_course_handler, create_student_handler, delete_course_handler, delete_student_handler,
    enroll_student_handler, get_course_handler, get_student_handler, list_courses_handler,
    list_students_handler, unenroll_student_handler, update_student_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Student resource routes.
///
/// # Endpoints
///
/// - `GET    /students`      - List all students
/// - `POST   /students`      - Create a student
/// - `GET    /students/{id}` - Get a student
/// - `PUT    /students/{id}` - Replace a student's name and email
/// - `DELETE /students/{id}` - Delete a student (cascades to rosters)
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
}

/// Course resource routes, including enrollment management.
///
/// # Endpoints
///
/// - `GET    /courses`                     - List all courses
/// - `POST   /courses`                     - Create a course
/// - `GET    /courses/{id}`                - Get a course with its roster
/// - `DELETE /courses/{id}`                - Delete a course (roster discarded)
/// - `POST   /courses/{cid}/students/{sid}`   - Enroll a student
/// - `DELETE /courses/{cid}/students/{sid}`   - Unenroll a student
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route(
            "/courses/{id}",
            get(get_course_handler).delete(delete_course_handler),
        )
        .route(
            "/courses/{course_id}/students/{student_id}",
            delete(unenroll_student_handler).post(enroll_student_handler),
        )
}
