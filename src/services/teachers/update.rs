use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::{TeacherService, email_conflict};
use crate::config::AppConfig;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::utils::password::hash_password;
use crate::utils::payload::Payload;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    body: Value,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    if storage.get_teacher_by_id(teacher_id).await?.is_none() {
        return Err(ApiError::not_found(EntityKind::Teacher, teacher_id));
    }

    let mut update = UpdateTeacherRequest::from_payload(&Payload::from_value(body)?)?;

    // 新邮箱不能属于其他教师
    if let Some(email) = &update.email
        && let Some(owner) = storage.get_teacher_by_email(email).await?
        && owner.id != teacher_id
    {
        return Err(ApiError::EmailAlreadyExists {
            email: email.clone(),
        });
    }

    if let Some(password) = update.password.take() {
        update.password = Some(hash_password(&password, &AppConfig::get().argon2)?);
    }

    let email = update.email.clone().unwrap_or_default();
    storage
        .update_teacher(teacher_id, update)
        .await
        .map_err(|e| email_conflict(e, &email))?
        .ok_or_else(|| ApiError::not_found(EntityKind::Teacher, teacher_id))?;

    info!("Teacher {} updated", teacher_id);
    Ok(HttpResponse::NoContent().finish())
}
