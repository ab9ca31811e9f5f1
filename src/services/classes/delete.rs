use actix_web::{HttpRequest, HttpResponse};
use tracing::info;

use super::ClassService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 课程计划、调整措施与选课记录随班级一起删除
    if !storage.delete_class(class_id).await? {
        return Err(ApiError::not_found(EntityKind::Class, class_id));
    }

    info!("Class {} deleted", class_id);
    Ok(HttpResponse::NoContent().finish())
}
