use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::StudentService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::students::requests::UpdateStudentRequest;
use crate::utils::payload::Payload;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_student_by_id(student_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::Student, student_id));
    }

    let update = UpdateStudentRequest::from_payload(&Payload::from_value(body)?)?;

    storage
        .update_student(student_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Student, student_id))?;

    info!("Student {} updated", student_id);
    Ok(HttpResponse::NoContent().finish())
}
