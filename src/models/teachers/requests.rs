use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_required};

// 创建教师请求，password 为明文，由服务层哈希后入库
#[derive(Debug, Clone)]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl CreateTeacherRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(body, &["first_name", "last_name", "email", "password"])?;
        Ok(Self {
            first_name: body.text("first_name")?,
            last_name: body.text("last_name")?,
            email: body.text("email")?,
            password: body.text("password")?,
        })
    }
}

// 更新教师请求
#[derive(Debug, Clone, Default)]
pub struct UpdateTeacherRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateTeacherRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: body.patch_text("first_name")?,
            last_name: body.patch_text("last_name")?,
            email: body.patch_text("email")?,
            password: body.patch_text("password")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_requires_password() {
        let body = Payload::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@school.test",
        }))
        .unwrap();
        assert_eq!(
            CreateTeacherRequest::from_payload(&body).unwrap_err(),
            ValidationError::MissingField { field: "password" }
        );
    }

    #[test]
    fn test_update_collects_truthy_fields() {
        let body = Payload::from_value(json!({ "email": "new@school.test", "password": "" })).unwrap();
        let update = UpdateTeacherRequest::from_payload(&body).unwrap();
        assert_eq!(update.email.as_deref(), Some("new@school.test"));
        assert_eq!(update.password, None);
        assert_eq!(update.first_name, None);
    }
}
