use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::GradeService;
use crate::utils::SafeIDI64;

static GRADE_SERVICE: GradeService = GradeService;

// HTTP处理程序
pub async fn create_grade(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    GRADE_SERVICE.create_grade(&req, body.into_inner()).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, grade_id.0, body.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeIDI64) -> ApiResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, grade_id.0).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/grade")
            .service(web::resource("").route(web::post().to(create_grade)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_grade))
                    .route(web::delete().to(delete_grade)),
            ),
    );
}
