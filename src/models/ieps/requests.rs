use chrono::NaiveDate;

use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_date, validate_required};

// 创建 IEP 请求
#[derive(Debug, Clone)]
pub struct CreateIepRequest {
    pub student_id: i64,
    pub description: String,
    pub disability: String,
    pub start_date: NaiveDate,
}

impl CreateIepRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(
            body,
            &["student_id", "description", "disability", "start_date"],
        )?;
        let start_date = validate_date(&body.text("start_date")?)?;

        Ok(Self {
            student_id: body.id("student_id")?,
            description: body.text("description")?,
            disability: body.text("disability")?,
            start_date,
        })
    }
}

// 更新 IEP 请求
#[derive(Debug, Clone, Default)]
pub struct UpdateIepRequest {
    pub student_id: Option<i64>,
    pub description: Option<String>,
    pub disability: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl UpdateIepRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        let start_date = body
            .patch_text("start_date")?
            .map(|d| validate_date(&d))
            .transpose()?;

        Ok(Self {
            student_id: body.patch_id("student_id")?,
            description: body.patch_text("description")?,
            disability: body.patch_text("disability")?,
            start_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_rejects_bad_start_date() {
        let body = Payload::from_value(json!({
            "student_id": 1,
            "description": "Extended time",
            "disability": "ADHD",
            "start_date": "2022/09/01",
        }))
        .unwrap();
        assert_eq!(
            CreateIepRequest::from_payload(&body).unwrap_err(),
            ValidationError::InvalidDate {
                value: "2022/09/01".into()
            }
        );
    }

    #[test]
    fn test_update_parses_truthy_start_date() {
        let body = Payload::from_value(json!({ "start_date": "2023-02-01", "disability": null })).unwrap();
        let update = UpdateIepRequest::from_payload(&body).unwrap();
        assert_eq!(update.start_date, NaiveDate::from_ymd_opt(2023, 2, 1));
        assert_eq!(update.disability, None);
    }
}
