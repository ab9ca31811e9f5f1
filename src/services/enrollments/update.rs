use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::EnrollmentService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::enrollments::requests::UpdateEnrollmentRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn update_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_enrollment_by_id(enrollment_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::Enrollment, enrollment_id));
    }

    let update = UpdateEnrollmentRequest::from_payload(&Payload::from_value(body)?)?;

    if let Some(student_id) = update.student_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Student, student_id).await?;
    }
    if let Some(class_id) = update.class_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Class, class_id).await?;
    }

    storage
        .update_enrollment(enrollment_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Enrollment, enrollment_id))?;

    info!("Enrollment {} updated", enrollment_id);
    Ok(HttpResponse::NoContent().finish())
}
