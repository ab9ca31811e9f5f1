use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::LessonPlanService;
use crate::errors::ApiResult;
use crate::models::EntityKind;
use crate::models::lesson_plans::requests::CreateLessonPlanRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn create_lesson_plan(
    service: &LessonPlanService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let plan = CreateLessonPlanRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    validate_foreign_key(storage.as_ref(), EntityKind::Class, plan.class_id).await?;

    let created = storage.create_lesson_plan(plan).await?;

    info!(
        "Lesson plan {} created for class {} on {}",
        created.id, created.class_id, created.date
    );
    Ok(HttpResponse::NoContent().finish())
}
