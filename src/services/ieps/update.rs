use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::IepService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::ieps::requests::UpdateIepRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn update_iep(
    service: &IepService,
    request: &HttpRequest,
    iep_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_iep_by_id(iep_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::Iep, iep_id));
    }

    let update = UpdateIepRequest::from_payload(&Payload::from_value(body)?)?;

    if let Some(student_id) = update.student_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Student, student_id).await?;
    }

    storage
        .update_iep(iep_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Iep, iep_id))?;

    info!("IEP {} updated", iep_id);
    Ok(HttpResponse::NoContent().finish())
}
