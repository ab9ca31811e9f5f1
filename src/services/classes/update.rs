use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::ClassService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::classes::requests::UpdateClassRequest;
use crate::utils::payload::Payload;
use crate::utils::validate::validate_foreign_key;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    service.require_class(storage.as_ref(), class_id).await?;

    let update = UpdateClassRequest::from_payload(&Payload::from_value(body)?)?;

    if let Some(teacher_id) = update.teacher_id {
        validate_foreign_key(storage.as_ref(), EntityKind::Teacher, teacher_id).await?;
    }

    storage
        .update_class(class_id, update)
        .await?
        .ok_or_else(|| ApiError::not_found(EntityKind::Class, class_id))?;

    info!("Class {} updated", class_id);
    Ok(HttpResponse::NoContent().finish())
}
