use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::errors::{ApiError, ApiResult};
use crate::models::{EntityKind, ErrorCode, RecordEnum};
use crate::storage::Storage;
use crate::utils::payload::Payload;

static SCHOOL_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{4})$").expect("Invalid school year regex")
});

const MIN_SCHOOL_YEAR: i32 = 1900;
const MAX_SCHOOL_YEAR: i32 = 2100;

/// 请求数据校验错误
///
/// 序列化时以 `error` 字段标记变体名称，其余字段为错误详情。
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error")]
pub enum ValidationError {
    #[error("Missing {field}")]
    MissingField { field: &'static str },

    #[error("Invalid {enum_name}: '{value}' is not one of {}", .allowed.join(", "))]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Date parsing error YYYY-mm-dd: '{value}'")]
    InvalidDate { value: String },

    #[error("{reason}")]
    InvalidSchoolYear { value: String, reason: &'static str },

    #[error("Field '{field}' must be {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid {entity} ID: {id}")]
    ForeignKeyNotFound { entity: EntityKind, id: i64 },

    #[error("Invalid JSON body: {message}")]
    InvalidJson { message: String },
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::InvalidEnumValue { .. } => ErrorCode::InvalidEnumValue,
            ValidationError::InvalidDate { .. } => ErrorCode::InvalidDate,
            ValidationError::InvalidSchoolYear { .. } => ErrorCode::InvalidSchoolYear,
            ValidationError::InvalidFieldType { .. } => ErrorCode::InvalidFieldType,
            ValidationError::ForeignKeyNotFound { .. } => ErrorCode::ForeignKeyNotFound,
            ValidationError::InvalidJson { .. } => ErrorCode::InvalidJson,
        }
    }

    pub fn error_name(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MissingField",
            ValidationError::InvalidEnumValue { .. } => "InvalidEnumValue",
            ValidationError::InvalidDate { .. } => "InvalidDate",
            ValidationError::InvalidSchoolYear { .. } => "InvalidSchoolYear",
            ValidationError::InvalidFieldType { .. } => "InvalidFieldType",
            ValidationError::ForeignKeyNotFound { .. } => "ForeignKeyNotFound",
            ValidationError::InvalidJson { .. } => "InvalidJson",
        }
    }
}

/// 必填字段校验：按给定顺序返回第一个缺失的字段
///
/// 字段存在即视为通过（值为 `null` 也算存在），类型由后续读取时检查。
pub fn validate_required(payload: &Payload, fields: &[&'static str]) -> Result<(), ValidationError> {
    match fields.iter().copied().find(|field| !payload.contains(field)) {
        Some(field) => Err(ValidationError::MissingField { field }),
        None => Ok(()),
    }
}

/// 枚举校验：按外部字符串匹配成员
pub fn validate_enum<E: RecordEnum>(text: &str) -> Result<E, ValidationError> {
    E::from_external(text).ok_or_else(|| ValidationError::InvalidEnumValue {
        enum_name: E::NAME,
        value: text.to_string(),
        allowed: E::external_values(),
    })
}

/// 日期校验，格式 YYYY-MM-DD
pub fn validate_date(text: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: text.to_string(),
    })
}

/// 学年校验：YYYY-YYYY，年份在 [1900, 2100] 内且相邻
pub fn validate_school_year(text: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &'static str| ValidationError::InvalidSchoolYear {
        value: text.to_string(),
        reason,
    };

    let captures = SCHOOL_YEAR_RE
        .captures(text)
        .ok_or_else(|| invalid("Invalid school year format. Please use the format: YYYY-YYYY"))?;

    // 正则已保证两段均为四位数字
    let start_year: i32 = captures[1].parse().unwrap_or_default();
    let end_year: i32 = captures[2].parse().unwrap_or_default();

    if start_year < MIN_SCHOOL_YEAR || end_year > MAX_SCHOOL_YEAR {
        return Err(invalid(
            "Invalid school year. Please enter a year between 1900 and 2100.",
        ));
    }
    if end_year - start_year != 1 {
        return Err(invalid(
            "Invalid school year. Please enter consecutive years.",
        ));
    }
    Ok(())
}

/// 外键校验：引用的行必须存在
pub async fn validate_foreign_key(
    storage: &dyn Storage,
    entity: EntityKind,
    id: i64,
) -> ApiResult<()> {
    if storage.entity_exists(entity, id).await? {
        Ok(())
    } else {
        Err(ApiError::Validation(ValidationError::ForeignKeyNotFound {
            entity,
            id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectType;
    use crate::models::grades::entities::GradeType;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    #[test]
    fn test_required_reports_first_missing_field() {
        let body = payload(json!({ "name": "English 101" }));
        let err = validate_required(&body, &["teacher_id", "name", "school_year"]).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "teacher_id" });

        let body = payload(json!({ "teacher_id": 1, "name": "English 101" }));
        let err = validate_required(&body, &["teacher_id", "name", "school_year"]).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "school_year" });
    }

    #[test]
    fn test_required_accepts_present_null() {
        let body = payload(json!({ "first_name": null, "last_name": "Doe" }));
        assert!(validate_required(&body, &["first_name", "last_name"]).is_ok());
    }

    #[test]
    fn test_enum_matches_external_values() {
        assert_eq!(validate_enum::<GradeType>("Quiz"), Ok(GradeType::Quiz));
        assert_eq!(
            validate_enum::<SubjectType>("Reading & Writing"),
            Ok(SubjectType::ReadingAndWriting)
        );
    }

    #[test]
    fn test_enum_rejects_unknown_value() {
        let err = validate_enum::<GradeType>("Essay").unwrap_err();
        match &err {
            ValidationError::InvalidEnumValue {
                enum_name, value, ..
            } => {
                assert_eq!(*enum_name, "GradeType");
                assert_eq!(value, "Essay");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("Test, Assignment, Quiz"));
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(
            validate_date("2022-09-01"),
            Ok(NaiveDate::from_ymd_opt(2022, 9, 1).unwrap())
        );
        assert!(validate_date("09/01/2022").is_err());
        assert!(validate_date("2022-13-01").is_err());
        assert!(validate_date("2022-02-30").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_valid_school_years() {
        assert!(validate_school_year("2022-2023").is_ok());
        assert!(validate_school_year("1900-1901").is_ok());
        assert!(validate_school_year("2099-2100").is_ok());
    }

    #[test]
    fn test_school_year_format() {
        for bad in ["2022", "2022/2023", "22-23", "2022-2023 ", "２０２２-２０２３", ""] {
            let err = validate_school_year(bad).unwrap_err();
            assert_eq!(err.error_code(), ErrorCode::InvalidSchoolYear, "{bad}");
        }
    }

    #[test]
    fn test_school_year_range_and_consecutive() {
        assert!(validate_school_year("1899-1900").is_err());
        assert!(validate_school_year("2100-2101").is_err());
        assert!(validate_school_year("2022-2024").is_err());
        assert!(validate_school_year("2023-2022").is_err());
        assert!(validate_school_year("2022-2022").is_err());
    }

    #[test]
    fn test_validation_error_serializes_with_tag() {
        let err = ValidationError::MissingField { field: "name" };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, json!({ "error": "MissingField", "field": "name" }));
    }
}
