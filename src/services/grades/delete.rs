use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::GradeService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_grade(grade_id).await? {
        return Err(ApiError::not_found(EntityKind::Grade, grade_id));
    }

    info!("Grade {} deleted", grade_id);
    Ok(HttpResponse::NoContent().finish())
}
