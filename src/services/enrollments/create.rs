use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::EnrollmentService;
use crate::errors::ApiResult;
use crate::models::EntityKind;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn create_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let enrollment = CreateEnrollmentRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    validate_foreign_key(storage.as_ref(), EntityKind::Class, enrollment.class_id).await?;
    validate_foreign_key(storage.as_ref(), EntityKind::Student, enrollment.student_id).await?;

    let created = storage.create_enrollment(enrollment).await?;

    info!(
        "Student {} enrolled in class {} (enrollment {})",
        created.student_id, created.class_id, created.id
    );
    Ok(HttpResponse::NoContent().finish())
}
