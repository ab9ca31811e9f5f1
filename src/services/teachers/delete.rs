use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::TeacherService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 该教师的班级保留，teacher_id 置空
    if !storage.delete_teacher(teacher_id).await? {
        return Err(ApiError::not_found(EntityKind::Teacher, teacher_id));
    }

    info!("Teacher {} deleted", teacher_id);
    Ok(HttpResponse::NoContent().finish())
}
