use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_required};

#[derive(Debug, Clone)]
pub struct CreateAccommodationRequest {
    pub student_id: i64,
    pub lesson_plan_id: i64,
    pub text: String,
}

impl CreateAccommodationRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(body, &["student_id", "lesson_plan_id", "text"])?;
        Ok(Self {
            student_id: body.id("student_id")?,
            lesson_plan_id: body.id("lesson_plan_id")?,
            text: body.text("text")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAccommodationRequest {
    pub student_id: Option<i64>,
    pub lesson_plan_id: Option<i64>,
    pub text: Option<String>,
}

impl UpdateAccommodationRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        Ok(Self {
            student_id: body.patch_id("student_id")?,
            lesson_plan_id: body.patch_id("lesson_plan_id")?,
            text: body.patch_text("text")?,
        })
    }
}
