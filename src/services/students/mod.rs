pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::ApiResult;
use crate::storage::Storage;

pub struct StudentService;

impl StudentService {
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ApiResult<Arc<dyn Storage>> {
        super::request_storage(request)
    }

    // 创建学生
    pub async fn create_student(&self, request: &HttpRequest, body: Value) -> ApiResult<HttpResponse> {
        create::create_student(self, request, body).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        body: Value,
    ) -> ApiResult<HttpResponse> {
        update::update_student(self, request, student_id, body).await
    }

    // 删除学生
    pub async fn delete_student(&self, request: &HttpRequest, student_id: i64) -> ApiResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }
}
