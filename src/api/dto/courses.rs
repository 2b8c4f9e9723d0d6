//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Course, NewCourse};
use crate::error::AppError;

/// Request body for `POST /courses`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub description: Option<String>,
}

impl CreateCourseRequest {
    /// Validates presence and converts into store input.
    pub fn into_new_course(self) -> Result<NewCourse, AppError> {
        self.validate()?;
        Ok(NewCourse {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Response body for `GET /courses`.
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<Course>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_both_fields() {
        let missing_description = CreateCourseRequest {
            name: Some("Biology".to_string()),
            description: None,
        };
        assert!(matches!(
            missing_description.into_new_course(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_create_request_converts() {
        let request = CreateCourseRequest {
            name: Some("Biology".to_string()),
            description: Some("Cell biology".to_string()),
        };

        let new_course = request.into_new_course().unwrap();
        assert_eq!(new_course.name, "Biology");
        assert_eq!(new_course.description, "Cell biology");
    }
}
