use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_required};

#[derive(Debug, Clone)]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub class_id: i64,
}

impl CreateEnrollmentRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(body, &["class_id", "student_id"])?;
        Ok(Self {
            class_id: body.id("class_id")?,
            student_id: body.id("student_id")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEnrollmentRequest {
    pub student_id: Option<i64>,
    pub class_id: Option<i64>,
}

impl UpdateEnrollmentRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        Ok(Self {
            student_id: body.patch_id("student_id")?,
            class_id: body.patch_id("class_id")?,
        })
    }
}
