use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::IepService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_iep(
    service: &IepService,
    request: &HttpRequest,
    iep_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if !storage.delete_iep(iep_id).await? {
        return Err(ApiError::not_found(EntityKind::Iep, iep_id));
    }

    info!("IEP {} deleted", iep_id);
    Ok(HttpResponse::NoContent().finish())
}
