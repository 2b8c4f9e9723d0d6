//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a resource.

pub mod courses;
pub mod students;

pub use courses::{
    create_course_handler, delete_course_handler, enroll_student_handler, get_course_handler,
    list_courses_handler, unenroll_student_handler,
};
pub use students::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    update_student_handler,
};
