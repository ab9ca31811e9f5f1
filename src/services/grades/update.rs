use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::GradeService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::grades::requests::UpdateGradeRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_grade_by_id(grade_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::Grade, grade_id));
    }

    // grade_value 为 0 时视为未提供，保留原值
    let update = UpdateGradeRequest::from_payload(&Payload::from_value(body)?)?;

    if let Some(student_id) = update.student_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Student, student_id).await?;
    }

    storage
        .update_grade(grade_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Grade, grade_id))?;

    info!("Grade {} updated", grade_id);
    Ok(HttpResponse::NoContent().finish())
}
