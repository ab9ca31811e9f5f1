use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_required, validate_school_year};

// 创建班级请求
#[derive(Debug, Clone)]
pub struct CreateClassRequest {
    pub teacher_id: i64,
    pub name: String,
    pub school_year: String,
}

impl CreateClassRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(body, &["teacher_id", "name", "school_year"])?;
        let school_year = body.text("school_year")?;
        validate_school_year(&school_year)?;

        Ok(Self {
            teacher_id: body.id("teacher_id")?,
            name: body.text("name")?,
            school_year,
        })
    }
}

// 更新班级请求
#[derive(Debug, Clone, Default)]
pub struct UpdateClassRequest {
    pub teacher_id: Option<i64>,
    pub name: Option<String>,
    pub school_year: Option<String>,
}

impl UpdateClassRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        let school_year = body.patch_text("school_year")?;
        if let Some(year) = &school_year {
            validate_school_year(year)?;
        }

        Ok(Self {
            teacher_id: body.patch_id("teacher_id")?,
            name: body.patch_text("name")?,
            school_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_validates_school_year() {
        let body = Payload::from_value(json!({
            "teacher_id": 1,
            "name": "English 101",
            "school_year": "2022-2024",
        }))
        .unwrap();
        let err = CreateClassRequest::from_payload(&body).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSchoolYear { .. }));
    }

    #[test]
    fn test_create_accepts_string_teacher_id() {
        let body = Payload::from_value(json!({
            "teacher_id": "2",
            "name": "Algebra",
            "school_year": "2022-2023",
        }))
        .unwrap();
        let class = CreateClassRequest::from_payload(&body).unwrap();
        assert_eq!(class.teacher_id, 2);
    }

    #[test]
    fn test_update_skips_empty_school_year() {
        let body = Payload::from_value(json!({ "school_year": "", "name": "Geometry" })).unwrap();
        let update = UpdateClassRequest::from_payload(&body).unwrap();
        assert_eq!(update.school_year, None);
        assert_eq!(update.name.as_deref(), Some("Geometry"));
    }
}
