//! 统一错误处理模块
//!
//! - `RecordsError`: 基础设施错误（配置、连接、查询、哈希），使用宏自动生成，带错误代码。
//! - `ApiError`: 请求级错误，实现 `ResponseError`，负责映射为 HTTP 状态码与结构化错误体。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::{ApiResponse, EntityKind, ErrorCode};
use crate::utils::validate::ValidationError;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_records_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RecordsError {
            $($variant(String),)*
        }

        impl RecordsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RecordsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RecordsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RecordsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_records_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    DataIntegrity("E004", "Data Integrity Error"),
    UniqueViolation("E005", "Unique Constraint Violation"),
    DateParse("E006", "Date Parse Error"),
    PasswordHash("E007", "Password Hash Error"),
}

impl RecordsError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("[{}] {}: {}", self.code(), self.error_type(), self.message())
    }
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RecordsError {}

// 唯一索引冲突单独归类，其余数据库错误统一为操作错误
impl From<sea_orm::DbErr> for RecordsError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                RecordsError::UniqueViolation(msg)
            }
            _ => RecordsError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<chrono::ParseError> for RecordsError {
    fn from(err: chrono::ParseError) -> Self {
        RecordsError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;

/// 请求级错误
///
/// 每个变体对应一个 HTTP 状态码，错误体中 `data.error` 为分类名称。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求数据校验失败 (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 按主键查找的目标资源不存在 (404)
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// 路径参数无法解析为资源 ID (404)
    #[error("No resource matches {name} '{value}'")]
    InvalidPath { name: &'static str, value: String },

    /// 教师邮箱已被占用 (409)
    #[error("Email '{email}' is already in use")]
    EmailAlreadyExists { email: String },

    /// 存储或其他内部故障 (500)
    #[error(transparent)]
    Internal(#[from] RecordsError),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        ApiError::NotFound { entity, id }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::Validation(err) => err.error_code(),
            ApiError::NotFound { .. } | ApiError::InvalidPath { .. } => {
                ErrorCode::ResourceNotFound
            }
            ApiError::EmailAlreadyExists { .. } => ErrorCode::EmailAlreadyExists,
            ApiError::Internal(_) => ErrorCode::InternalServerError,
        }
    }

    /// 结构化错误详情，`error` 字段为错误分类名称
    pub fn detail(&self) -> serde_json::Value {
        match self {
            ApiError::Validation(err) => serde_json::to_value(err)
                .unwrap_or_else(|_| json!({ "error": err.error_name() })),
            ApiError::NotFound { entity, id } => json!({
                "error": "ResourceNotFound",
                "entity": entity,
                "id": id,
            }),
            ApiError::InvalidPath { name, value } => json!({
                "error": "ResourceNotFound",
                "parameter": name,
                "value": value,
            }),
            ApiError::EmailAlreadyExists { email } => json!({
                "error": "EmailAlreadyExists",
                "email": email,
            }),
            ApiError::Internal(_) => json!({ "error": "InternalError" }),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::InvalidPath { .. } => StatusCode::NOT_FOUND,
            ApiError::EmailAlreadyExists { .. } => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // 内部错误只记录日志，不向客户端暴露细节
        let message = match self {
            ApiError::Internal(err) => {
                error!("Request failed: {}", err);
                "Internal server error".to_string()
            }
            other => {
                debug!("Request rejected: {}", other);
                other.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ApiResponse::error(
            self.error_code(),
            self.detail(),
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RecordsError::database_config("test").code(), "E001");
        assert_eq!(RecordsError::database_operation("test").code(), "E003");
        assert_eq!(RecordsError::password_hash("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RecordsError::database_connection("test").error_type(),
            "Database Connection Error"
        );
        assert_eq!(
            RecordsError::data_integrity("test").error_type(),
            "Data Integrity Error"
        );
    }

    #[test]
    fn test_non_constraint_db_error_is_operation_error() {
        let err = RecordsError::from(sea_orm::DbErr::RecordNotInserted);
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_format_simple() {
        let err = RecordsError::database_config("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("E001"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_api_error_status_codes() {
        let missing = ApiError::from(ValidationError::MissingField { field: "name" });
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

        let not_found = ApiError::not_found(EntityKind::Student, 5);
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.detail()["entity"], "Student");

        let conflict = ApiError::EmailAlreadyExists {
            email: "a@b.c".into(),
        };
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let internal = ApiError::from(RecordsError::database_operation("boom"));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.detail()["error"], "InternalError");
    }

    #[test]
    fn test_validation_detail_is_tagged() {
        let err = ApiError::from(ValidationError::InvalidDate {
            value: "2023/01/01".into(),
        });
        let detail = err.detail();
        assert_eq!(detail["error"], "InvalidDate");
        assert_eq!(detail["value"], "2023/01/01");
    }
}
