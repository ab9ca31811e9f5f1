use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::LessonPlanService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::lesson_plans::requests::UpdateLessonPlanRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn update_lesson_plan(
    service: &LessonPlanService,
    request: &HttpRequest,
    lesson_plan_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_lesson_plan_by_id(lesson_plan_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::LessonPlan, lesson_plan_id));
    }

    let update = UpdateLessonPlanRequest::from_payload(&Payload::from_value(body)?)?;

    if let Some(class_id) = update.class_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Class, class_id).await?;
    }

    storage
        .update_lesson_plan(lesson_plan_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::LessonPlan, lesson_plan_id))?;

    info!("Lesson plan {} updated", lesson_plan_id);
    Ok(HttpResponse::NoContent().finish())
}
