use chrono::NaiveDate;

use crate::models::SubjectType;
use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_date, validate_enum, validate_required};

// 创建课程计划请求
#[derive(Debug, Clone)]
pub struct CreateLessonPlanRequest {
    pub class_id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub overview: String,
    pub objective: String,
    pub subject: SubjectType,
}

impl CreateLessonPlanRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(
            body,
            &["class_id", "name", "date", "overview", "objective", "subject"],
        )?;
        let subject = validate_enum(&body.text("subject")?)?;
        let date = validate_date(&body.text("date")?)?;

        Ok(Self {
            class_id: body.id("class_id")?,
            name: body.text("name")?,
            date,
            overview: body.text("overview")?,
            objective: body.text("objective")?,
            subject,
        })
    }
}

// 更新课程计划请求
#[derive(Debug, Clone, Default)]
pub struct UpdateLessonPlanRequest {
    pub class_id: Option<i64>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub overview: Option<String>,
    pub objective: Option<String>,
    pub subject: Option<SubjectType>,
}

impl UpdateLessonPlanRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        let date = body.patch_text("date")?.map(|d| validate_date(&d)).transpose()?;
        let subject = body
            .patch_text("subject")?
            .map(|s| validate_enum(&s))
            .transpose()?;

        Ok(Self {
            class_id: body.patch_id("class_id")?,
            name: body.patch_text("name")?,
            date,
            overview: body.patch_text("overview")?,
            objective: body.patch_text("objective")?,
            subject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_rejects_lowercase_subject() {
        let body = Payload::from_value(json!({
            "class_id": 1,
            "name": "Fractions",
            "date": "2022-10-03",
            "overview": "Intro",
            "objective": "Add fractions",
            "subject": "math",
        }))
        .unwrap();
        let err = CreateLessonPlanRequest::from_payload(&body).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEnumValue { enum_name: "SubjectType", .. }));
    }

    #[test]
    fn test_update_validates_subject_only_when_present() {
        let body = Payload::from_value(json!({ "name": "Decimals", "subject": "" })).unwrap();
        let update = UpdateLessonPlanRequest::from_payload(&body).unwrap();
        assert_eq!(update.name.as_deref(), Some("Decimals"));
        assert_eq!(update.subject, None);

        let body = Payload::from_value(json!({ "subject": "Science" })).unwrap();
        assert!(UpdateLessonPlanRequest::from_payload(&body).is_err());
    }
}
