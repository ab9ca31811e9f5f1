use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::AccommodationService;
use crate::errors::ApiResult;
use crate::models::EntityKind;
use crate::models::accommodations::requests::CreateAccommodationRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn create_accommodation(
    service: &AccommodationService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let accommodation = CreateAccommodationRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    validate_foreign_key(storage.as_ref(), EntityKind::Student, accommodation.student_id).await?;
    validate_foreign_key(
        storage.as_ref(),
        EntityKind::LessonPlan,
        accommodation.lesson_plan_id,
    )
    .await?;

    let created = storage.create_accommodation(accommodation).await?;

    info!(
        "Accommodation {} created for student {} in lesson plan {}",
        created.id, created.student_id, created.lesson_plan_id
    );
    Ok(HttpResponse::NoContent().finish())
}
