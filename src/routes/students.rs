use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

static STUDENT_SERVICE: StudentService = StudentService;

// HTTP处理程序
pub async fn create_student(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    STUDENT_SERVICE.create_student(&req, body.into_inner()).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, body.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ApiResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/student")
            .service(web::resource("").route(web::post().to(create_student)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
