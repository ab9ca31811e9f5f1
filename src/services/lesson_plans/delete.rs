use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::LessonPlanService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_lesson_plan(
    service: &LessonPlanService,
    request: &HttpRequest,
    lesson_plan_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 调整措施随课程计划一起删除
    if !storage.delete_lesson_plan(lesson_plan_id).await? {
        return Err(ApiError::not_found(EntityKind::LessonPlan, lesson_plan_id));
    }

    info!("Lesson plan {} deleted", lesson_plan_id);
    Ok(HttpResponse::NoContent().finish())
}
