use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::AccommodationService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::accommodations::requests::UpdateAccommodationRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn update_accommodation(
    service: &AccommodationService,
    request: &HttpRequest,
    accommodation_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_accommodation_by_id(accommodation_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::Accommodation, accommodation_id));
    }

    let update = UpdateAccommodationRequest::from_payload(&Payload::from_value(body)?)?;

    if let Some(student_id) = update.student_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Student, student_id).await?;
    }
    if let Some(lesson_plan_id) = update.lesson_plan_id {
        validate_foreign_key(storage.as_ref(), EntityKind::LessonPlan, lesson_plan_id).await?;
    }

    storage
        .update_accommodation(accommodation_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Accommodation, accommodation_id))?;

    info!("Accommodation {} updated", accommodation_id);
    Ok(HttpResponse::NoContent().finish())
}
