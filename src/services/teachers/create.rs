use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::{TeacherService, email_conflict};
use crate::config::AppConfig;
use crate::errors::{ApiError, ApiResult};
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::utils::password::hash_password;
use crate::utils::payload::Payload;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let mut teacher = CreateTeacherRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;

    // 邮箱唯一
    if storage.get_teacher_by_email(&teacher.email).await?.is_some() {
        return Err(ApiError::EmailAlreadyExists {
            email: teacher.email,
        });
    }

    teacher.password = hash_password(&teacher.password, &AppConfig::get().argon2)?;

    let email = teacher.email.clone();
    let created = storage
        .create_teacher(teacher)
        .await
        .map_err(|e| email_conflict(e, &email))?;

    info!("Teacher {} created", created.id);
    Ok(HttpResponse::NoContent().finish())
}
