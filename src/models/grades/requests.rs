use chrono::NaiveDate;

use super::entities::GradeType;
use crate::models::SubjectType;
use crate::utils::payload::Payload;
use crate::utils::validate::{ValidationError, validate_date, validate_enum, validate_required};

// 创建成绩请求
#[derive(Debug, Clone)]
pub struct CreateGradeRequest {
    pub student_id: i64,
    pub grade_type: GradeType,
    pub grade_value: f64,
    pub date: NaiveDate,
    pub subject: SubjectType,
}

impl CreateGradeRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        validate_required(
            body,
            &["student_id", "grade_type", "grade_value", "date", "subject"],
        )?;
        let subject = validate_enum(&body.text("subject")?)?;
        let grade_type = validate_enum(&body.text("grade_type")?)?;
        let date = validate_date(&body.text("date")?)?;

        Ok(Self {
            student_id: body.id("student_id")?,
            grade_type,
            grade_value: body.number("grade_value")?,
            date,
            subject,
        })
    }
}

// 更新成绩请求
#[derive(Debug, Clone, Default)]
pub struct UpdateGradeRequest {
    pub student_id: Option<i64>,
    pub grade_type: Option<GradeType>,
    pub grade_value: Option<f64>,
    pub date: Option<NaiveDate>,
    pub subject: Option<SubjectType>,
}

impl UpdateGradeRequest {
    pub fn from_payload(body: &Payload) -> Result<Self, ValidationError> {
        let date = body.patch_text("date")?.map(|d| validate_date(&d)).transpose()?;
        let subject = body
            .patch_text("subject")?
            .map(|s| validate_enum(&s))
            .transpose()?;
        let grade_type = body
            .patch_text("grade_type")?
            .map(|t| validate_enum(&t))
            .transpose()?;

        Ok(Self {
            student_id: body.patch_id("student_id")?,
            grade_type,
            grade_value: body.patch_number("grade_value")?,
            date,
            subject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    #[test]
    fn test_create_checks_enums_before_dates() {
        let body = payload(json!({
            "student_id": 1,
            "grade_type": "Essay",
            "grade_value": 90,
            "date": "not a date",
            "subject": "Math",
        }));
        let err = CreateGradeRequest::from_payload(&body).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEnumValue { enum_name: "GradeType", .. }));
    }

    #[test]
    fn test_create_parses_all_fields() {
        let body = payload(json!({
            "student_id": 4,
            "grade_type": "Quiz",
            "grade_value": 87.5,
            "date": "2023-01-15",
            "subject": "Reading & Writing",
        }));
        let grade = CreateGradeRequest::from_payload(&body).unwrap();
        assert_eq!(grade.student_id, 4);
        assert_eq!(grade.grade_type, GradeType::Quiz);
        assert_eq!(grade.grade_value, 87.5);
        assert_eq!(grade.subject, SubjectType::ReadingAndWriting);
    }

    #[test]
    fn test_update_ignores_zero_grade_value() {
        let body = payload(json!({ "grade_value": 0, "grade_type": "Test" }));
        let update = UpdateGradeRequest::from_payload(&body).unwrap();
        assert_eq!(update.grade_value, None);
        assert_eq!(update.grade_type, Some(GradeType::Test));
    }
}
