use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::ClassService;
use crate::errors::ApiResult;
use crate::models::EntityKind;
use crate::models::classes::requests::CreateClassRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let class = CreateClassRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    validate_foreign_key(storage.as_ref(), EntityKind::Teacher, class.teacher_id).await?;

    let created = storage.create_class(class).await?;

    info!(
        "Class {} '{}' ({}) created",
        created.id, created.name, created.school_year
    );
    Ok(HttpResponse::NoContent().finish())
}
