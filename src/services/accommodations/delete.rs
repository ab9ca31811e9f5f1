use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::AccommodationService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_accommodation(
    service: &AccommodationService,
    request: &HttpRequest,
    accommodation_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_accommodation(accommodation_id).await? {
        return Err(ApiError::not_found(EntityKind::Accommodation, accommodation_id));
    }

    info!("Accommodation {} deleted", accommodation_id);
    Ok(HttpResponse::NoContent().finish())
}
