use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::TeacherService;
use crate::utils::SafeIDI64;

static TEACHER_SERVICE: TeacherService = TeacherService;

// HTTP处理程序，邮箱冲突返回 409
pub async fn create_teacher(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    TEACHER_SERVICE.create_teacher(&req, body.into_inner()).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_id.0, body.into_inner())
        .await
}

pub async fn delete_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ApiResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, teacher_id.0).await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teacher")
            .service(web::resource("").route(web::post().to(create_teacher)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_teacher))
                    .route(web::delete().to(delete_teacher)),
            ),
    );
}
