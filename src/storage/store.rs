//! The in-memory registry store.
//!
//! Owns the student and course collections, the enrollment rosters, and the
//! per-collection id counters. Enforced invariants:
//!
//! - student emails are unique (case-sensitive) across the collection;
//! - ids are monotonically increasing and never reused after deletes;
//! - deleting a student purges it from every course roster;
//! - deleting a course discards its roster outright;
//! - rosters have set semantics (a student is enrolled at most once).
//!
//! One store is constructed per process (or per test) and shared behind an
//! `Arc`; a `Mutex` serializes access so each operation is a single atomic
//! mutation.

use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Course, NewCourse, NewStudent, Student, UpdateStudent};
use crate::error::AppError;

/// Collections and counters behind the store's mutex.
#[derive(Debug, Default)]
struct RegistryInner {
    students: Vec<Student>,
    courses: Vec<Course>,
    next_student_id: i64,
    next_course_id: i64,
}

/// Single source of truth for students, courses, and enrollments.
///
/// All methods take `&self`; interior mutability via the mutex keeps the
/// store shareable across handler tasks behind an `Arc`.
#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<RegistryInner>,
}

impl Store {
    /// Creates an empty store with both id counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the store with the fixed initial dataset: students Alice,
    /// Bob, and Charlie (ids 1-3) and the Mathematics and Physics courses
    /// (ids 1-2) with empty rosters.
    ///
    /// Calling this on a freshly constructed or [`reset`](Self::reset) store
    /// always reproduces the identical dataset.
    pub fn seed(&self) -> Result<(), AppError> {
        let seed_students = [
            ("Alice", "alice@example.com"),
            ("Bob", "bob@example.com"),
            ("Charlie", "charlie@example.com"),
        ];
        let seed_courses = [
            ("Mathematics", "Introduction to algebra and calculus"),
            ("Physics", "Classical mechanics and waves"),
        ];

        let mut inner = self.lock()?;

        for (name, email) in seed_students {
            let id = inner.next_student_id + 1;
            inner.next_student_id = id;
            inner
                .students
                .push(Student::new(id, name.to_string(), email.to_string()));
        }

        for (name, description) in seed_courses {
            let id = inner.next_course_id + 1;
            inner.next_course_id = id;
            inner
                .courses
                .push(Course::new(id, name.to_string(), description.to_string()));
        }

        Ok(())
    }

    /// Clears all collections and both id counters back to the empty state.
    pub fn reset(&self) -> Result<(), AppError> {
        let mut inner = self.lock()?;
        *inner = RegistryInner::default();
        Ok(())
    }

    /// Lists all students in insertion order.
    pub fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.lock()?.students.clone())
    }

    /// Retrieves a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub fn get_student(&self, id: i64) -> Result<Student, AppError> {
        self.lock()?
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| student_not_found(id))
    }

    /// Creates a new student with the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateEmail`] if the email is already used by
    /// any existing student.
    pub fn create_student(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let mut inner = self.lock()?;

        if inner.students.iter().any(|s| s.email == new_student.email) {
            return Err(duplicate_email(&new_student.email));
        }

        let id = inner.next_student_id + 1;
        inner.next_student_id = id;

        let student = Student::new(id, new_student.name, new_student.email);
        inner.students.push(student.clone());

        Ok(student)
    }

    /// Replaces a student's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    /// Returns [`AppError::DuplicateEmail`] if the new email collides with
    /// any *other* student's email.
    pub fn update_student(&self, id: i64, update: UpdateStudent) -> Result<Student, AppError> {
        let mut inner = self.lock()?;

        if !inner.students.iter().any(|s| s.id == id) {
            return Err(student_not_found(id));
        }

        if inner
            .students
            .iter()
            .any(|s| s.id != id && s.email == update.email)
        {
            return Err(duplicate_email(&update.email));
        }

        let student = inner
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| student_not_found(id))?;

        student.name = update.name;
        student.email = update.email;

        Ok(student.clone())
    }

    /// Deletes a student and purges its id from every course roster.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.lock()?;

        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        if inner.students.len() == before {
            return Err(student_not_found(id));
        }

        // Cascade: no roster may keep a dangling student id.
        for course in &mut inner.courses {
            course.enrolled_student_ids.remove(&id);
        }

        Ok(())
    }

    /// Lists all courses in insertion order.
    pub fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.lock()?.courses.clone())
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub fn get_course(&self, id: i64) -> Result<Course, AppError> {
        self.lock()?
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| course_not_found(id))
    }

    /// Creates a new course with the next sequential id and an empty roster.
    pub fn create_course(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut inner = self.lock()?;

        let id = inner.next_course_id + 1;
        inner.next_course_id = id;

        let course = Course::new(id, new_course.name, new_course.description);
        inner.courses.push(course.clone());

        Ok(course)
    }

    /// Deletes a course and discards its roster, whether or not students are
    /// currently enrolled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    pub fn delete_course(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.lock()?;

        let before = inner.courses.len();
        inner.courses.retain(|c| c.id != id);
        if inner.courses.len() == before {
            return Err(course_not_found(id));
        }

        Ok(())
    }

    /// Enrolls a student in a course.
    ///
    /// The roster is a set: enrolling an already-enrolled student is a
    /// successful no-op. Returns the course with its updated roster.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either id does not exist.
    pub fn enroll_student(&self, course_id: i64, student_id: i64) -> Result<Course, AppError> {
        let mut inner = self.lock()?;

        if !inner.students.iter().any(|s| s.id == student_id) {
            return Err(student_not_found(student_id));
        }

        let course = inner
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| course_not_found(course_id))?;

        course.enrolled_student_ids.insert(student_id);

        Ok(course.clone())
    }

    /// Removes a student from a course roster.
    ///
    /// Removing a student who is not currently enrolled is a successful
    /// no-op; only a missing course is an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    pub fn unenroll_student(&self, course_id: i64, student_id: i64) -> Result<(), AppError> {
        let mut inner = self.lock()?;

        let course = inner
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| course_not_found(course_id))?;

        course.enrolled_student_ids.remove(&student_id);

        Ok(())
    }

    /// Acquires the store mutex, mapping a poisoned lock to an internal
    /// error instead of panicking in the request path.
    fn lock(&self) -> Result<MutexGuard<'_, RegistryInner>, AppError> {
        self.inner
            .lock()
            .map_err(|e| AppError::internal(format!("registry lock poisoned: {e}")))
    }
}

fn student_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Student {id} not found"))
}

fn course_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Course {id} not found"))
}

fn duplicate_email(email: &str) -> AppError {
    AppError::duplicate_email(format!("Email {email} is already registered"))
}
