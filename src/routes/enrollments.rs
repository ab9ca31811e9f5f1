use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

static ENROLLMENT_SERVICE: EnrollmentService = EnrollmentService;

// HTTP处理程序
pub async fn create_enrollment(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    ENROLLMENT_SERVICE.create_enrollment(&req, body.into_inner()).await
}

pub async fn update_enrollment(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_enrollment(&req, enrollment_id.0, body.into_inner())
        .await
}

pub async fn delete_enrollment(req: HttpRequest, enrollment_id: SafeIDI64) -> ApiResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_enrollment(&req, enrollment_id.0).await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/enrollment")
            .service(web::resource("").route(web::post().to(create_enrollment)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_enrollment))
                    .route(web::delete().to(delete_enrollment)),
            ),
    );
}
