use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::GradeService;
use crate::errors::ApiResult;
use crate::models::EntityKind;
use crate::models::grades::requests::CreateGradeRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let grade = CreateGradeRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    validate_foreign_key(storage.as_ref(), EntityKind::Student, grade.student_id).await?;

    let created = storage.create_grade(grade).await?;

    info!(
        "Grade {} ({} {}) recorded for student {}",
        created.id, created.subject, created.grade_type, created.student_id
    );
    Ok(HttpResponse::NoContent().finish())
}
