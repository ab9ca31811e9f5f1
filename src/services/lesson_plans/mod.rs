pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::ApiResult;
use crate::storage::Storage;

pub struct LessonPlanService;

impl LessonPlanService {
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ApiResult<Arc<dyn Storage>> {
        super::request_storage(request)
    }

    pub async fn create_lesson_plan(&self, request: &HttpRequest, body: Value) -> ApiResult<HttpResponse> {
        create::create_lesson_plan(self, request, body).await
    }

    pub async fn update_lesson_plan(
        &self,
        request: &HttpRequest,
        lesson_plan_id: i64,
        body: Value,
    ) -> ApiResult<HttpResponse> {
        update::update_lesson_plan(self, request, lesson_plan_id, body).await
    }

    pub async fn delete_lesson_plan(&self, request: &HttpRequest, lesson_plan_id: i64) -> ApiResult<HttpResponse> {
        delete::delete_lesson_plan(self, request, lesson_plan_id).await
    }
}
