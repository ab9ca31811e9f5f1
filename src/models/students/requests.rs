use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_required};

// 创建学生请求
#[derive(Debug, Clone)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
}

impl CreateStudentRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(body, &["first_name", "last_name"])?;
        Ok(Self {
            first_name: body.text("first_name")?,
            last_name: body.text("last_name")?,
        })
    }
}

// 更新学生请求
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateStudentRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: body.patch_text("first_name")?,
            last_name: body.patch_text("last_name")?,
        })
    }
}
