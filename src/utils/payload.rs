//! JSON 请求体访问
//!
//! 创建请求使用 `text`/`id`/`number` 读取必填字段；更新请求使用 `patch_*`，
//! 只返回“真值”字段，假值（null、false、0、空字符串、空数组、空对象）视为未提供。

use serde_json::{Map, Value};

use crate::utils::validate::ValidationError;

const EXPECTED_STRING: &str = "a string";
const EXPECTED_INTEGER: &str = "an integer";
const EXPECTED_NUMBER: &str = "a number";

#[derive(Debug, Clone, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ValidationError::InvalidFieldType {
                field: "body",
                expected: "a JSON object",
            }),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// 字段存在且为真值
    pub fn truthy(&self, field: &str) -> Option<&Value> {
        self.get(field).filter(|value| is_truthy(value))
    }

    pub fn text(&self, field: &'static str) -> Result<String, ValidationError> {
        as_text(field, self.required(field)?)
    }

    pub fn id(&self, field: &'static str) -> Result<i64, ValidationError> {
        as_id(field, self.required(field)?)
    }

    pub fn number(&self, field: &'static str) -> Result<f64, ValidationError> {
        as_number(field, self.required(field)?)
    }

    pub fn patch_text(&self, field: &'static str) -> Result<Option<String>, ValidationError> {
        self.truthy(field).map(|v| as_text(field, v)).transpose()
    }

    pub fn patch_id(&self, field: &'static str) -> Result<Option<i64>, ValidationError> {
        self.truthy(field).map(|v| as_id(field, v)).transpose()
    }

    pub fn patch_number(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        self.truthy(field).map(|v| as_number(field, v)).transpose()
    }

    fn required(&self, field: &'static str) -> Result<&Value, ValidationError> {
        self.get(field)
            .ok_or(ValidationError::MissingField { field })
    }
}

/// 判断 JSON 值是否为真值
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn as_text(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ValidationError::InvalidFieldType {
            field,
            expected: EXPECTED_STRING,
        })
}

// ID 支持整数或整数字符串
fn as_id(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or(ValidationError::InvalidFieldType {
        field,
        expected: EXPECTED_INTEGER,
    })
}

fn as_number(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    value.as_f64().ok_or(ValidationError::InvalidFieldType {
        field,
        expected: EXPECTED_NUMBER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_must_be_object() {
        assert!(Payload::from_value(json!([1, 2])).is_err());
        assert!(Payload::from_value(json!("text")).is_err());
        assert!(Payload::from_value(json!({})).is_ok());
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy}");
        }
        for truthy in [json!(true), json!(1), json!(-2.5), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy}");
        }
    }

    #[test]
    fn test_patch_skips_falsy_fields() {
        let body = Payload::from_value(json!({
            "first_name": "X",
            "last_name": "",
            "student_id": 0,
            "grade_value": null,
        }))
        .unwrap();
        assert_eq!(body.patch_text("first_name"), Ok(Some("X".to_string())));
        assert_eq!(body.patch_text("last_name"), Ok(None));
        assert_eq!(body.patch_id("student_id"), Ok(None));
        assert_eq!(body.patch_number("grade_value"), Ok(None));
        assert_eq!(body.patch_text("missing"), Ok(None));
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let body = Payload::from_value(json!({ "first_name": 5, "class_id": "abc", "grade_value": "A" }))
            .unwrap();
        assert_eq!(
            body.text("first_name"),
            Err(ValidationError::InvalidFieldType {
                field: "first_name",
                expected: EXPECTED_STRING,
            })
        );
        assert!(body.id("class_id").is_err());
        assert!(body.patch_number("grade_value").is_err());
    }

    #[test]
    fn test_ids_accept_integer_strings() {
        let body = Payload::from_value(json!({ "class_id": "7", "student_id": 3 })).unwrap();
        assert_eq!(body.id("class_id"), Ok(7));
        assert_eq!(body.id("student_id"), Ok(3));
        assert_eq!(
            body.id("teacher_id"),
            Err(ValidationError::MissingField { field: "teacher_id" })
        );
    }

    #[test]
    fn test_number_accepts_integers_and_floats() {
        let body = Payload::from_value(json!({ "a": 90, "b": 87.5 })).unwrap();
        assert_eq!(body.number("a"), Ok(90.0));
        assert_eq!(body.number("b"), Ok(87.5));
    }
}
