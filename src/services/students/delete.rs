use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::StudentService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 选课、成绩、IEP 与调整措施随学生一起删除
    if !storage.delete_student(student_id).await? {
        return Err(ApiError::not_found(EntityKind::Student, student_id));
    }

    info!("Student {} deleted", student_id);
    Ok(HttpResponse::NoContent().finish())
}
