pub mod create;
pub mod delete;
pub mod lesson_plans;
pub mod roster;
pub mod update;

use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::classes::entities::Class;
use crate::storage::Storage;

pub struct ClassService;

impl ClassService {
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ApiResult<Arc<dyn Storage>> {
        super::request_storage(request)
    }

    // 组合查询的第一步：班级必须存在
    pub(crate) async fn require_class(&self, storage: &dyn Storage, class_id: i64) -> ApiResult<Class> {
        storage
            .get_class_by_id(class_id)
            .await?
            .ok_or_else(|| ApiError::not_found(EntityKind::Class, class_id))
    }

    pub async fn create_class(&self, request: &HttpRequest, body: Value) -> ApiResult<HttpResponse> {
        create::create_class(self, request, body).await
    }

    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        body: Value,
    ) -> ApiResult<HttpResponse> {
        update::update_class(self, request, class_id, body).await
    }

    pub async fn delete_class(&self, request: &HttpRequest, class_id: i64) -> ApiResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }

    // 班级学生及其 IEP
    pub async fn list_class_students(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ApiResult<HttpResponse> {
        roster::list_class_students(self, request, class_id).await
    }

    // 班级学生及其成绩
    pub async fn list_class_grades(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ApiResult<HttpResponse> {
        roster::list_class_grades(self, request, class_id).await
    }

    // 班级课程计划
    pub async fn list_class_lesson_plans(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ApiResult<HttpResponse> {
        lesson_plans::list_class_lesson_plans(self, request, class_id).await
    }

    // 某课程计划下各学生的调整措施
    pub async fn list_lesson_plan_accommodations(
        &self,
        request: &HttpRequest,
        class_id: i64,
        lesson_plan_id: i64,
    ) -> ApiResult<HttpResponse> {
        lesson_plans::list_lesson_plan_accommodations(self, request, class_id, lesson_plan_id).await
    }
}
