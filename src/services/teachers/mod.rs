pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::{ApiError, ApiResult, RecordsError};
use crate::storage::Storage;

// 并发写入时由唯一索引兜底，同样按邮箱冲突返回
pub(crate) fn email_conflict(err: RecordsError, email: &str) -> ApiError {
    match err {
        RecordsError::UniqueViolation(_) => ApiError::EmailAlreadyExists {
            email: email.to_string(),
        },
        other => other.into(),
    }
}

pub struct TeacherService;

impl TeacherService {
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ApiResult<Arc<dyn Storage>> {
        super::request_storage(request)
    }

    // 创建教师
    pub async fn create_teacher(&self, request: &HttpRequest, body: Value) -> ApiResult<HttpResponse> {
        create::create_teacher(self, request, body).await
    }

    // 更新教师信息
    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        body: Value,
    ) -> ApiResult<HttpResponse> {
        update::update_teacher(self, request, teacher_id, body).await
    }

    // 删除教师
    pub async fn delete_teacher(&self, request: &HttpRequest, teacher_id: i64) -> ApiResult<HttpResponse> {
        delete::delete_teacher(self, request, teacher_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let err = email_conflict(
            RecordsError::unique_violation("UNIQUE constraint failed: teachers.email"),
            "ada@school.test",
        );
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.detail()["email"], "ada@school.test");
    }

    #[test]
    fn test_other_storage_errors_stay_internal() {
        let err = email_conflict(RecordsError::database_operation("boom"), "ada@school.test");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
