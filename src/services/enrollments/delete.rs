use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::EnrollmentService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_enrollment(enrollment_id).await? {
        return Err(ApiError::not_found(EntityKind::Enrollment, enrollment_id));
    }

    info!("Enrollment {} deleted", enrollment_id);
    Ok(HttpResponse::NoContent().finish())
}
