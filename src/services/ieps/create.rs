use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::IepService;
use crate::errors::ApiResult;
use crate::models::EntityKind;
use crate::models::ieps::requests::CreateIepRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn create_iep(
    service: &IepService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let iep = CreateIepRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    validate_foreign_key(storage.as_ref(), EntityKind::Student, iep.student_id).await?;

    let created = storage.create_iep(iep).await?;

    info!("IEP {} created for student {}", created.id, created.student_id);
    Ok(HttpResponse::NoContent().finish())
}
