//! DTOs for student endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStudent, Student, UpdateStudent};
use crate::error::AppError;

/// Request body for `POST /students`.
///
/// Both fields must be present and non-empty. Validation stops at presence;
/// email format is not checked.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub email: Option<String>,
}

impl CreateStudentRequest {
    /// Validates presence and converts into store input.
    pub fn into_new_student(self) -> Result<NewStudent, AppError> {
        self.validate()?;
        Ok(NewStudent {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        })
    }
}

/// Request body for `PUT /students/{id}`.
///
/// Updates are full replacements, so the same presence rules apply as for
/// creation.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, message = "must not be empty"))]
    pub email: Option<String>,
}

impl UpdateStudentRequest {
    /// Validates presence and converts into store input.
    pub fn into_update(self) -> Result<UpdateStudent, AppError> {
        self.validate()?;
        Ok(UpdateStudent {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        })
    }
}

/// Response body for `GET /students`.
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_both_fields() {
        let missing_email = CreateStudentRequest {
            name: Some("David".to_string()),
            email: None,
        };
        assert!(matches!(
            missing_email.into_new_student(),
            Err(AppError::Validation(_))
        ));

        let empty_name = CreateStudentRequest {
            name: Some(String::new()),
            email: Some("david@example.com".to_string()),
        };
        assert!(matches!(
            empty_name.into_new_student(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_create_request_converts() {
        let request = CreateStudentRequest {
            name: Some("David".to_string()),
            email: Some("david@example.com".to_string()),
        };

        let new_student = request.into_new_student().unwrap();
        assert_eq!(new_student.name, "David");
        assert_eq!(new_student.email, "david@example.com");
    }
}
