use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::LessonPlanService;
use crate::utils::SafeIDI64;

static LESSON_PLAN_SERVICE: LessonPlanService = LessonPlanService;

// HTTP处理程序
pub async fn create_lesson_plan(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    LESSON_PLAN_SERVICE.create_lesson_plan(&req, body.into_inner()).await
}

pub async fn update_lesson_plan(
    req: HttpRequest,
    lesson_plan_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    LESSON_PLAN_SERVICE
        .update_lesson_plan(&req, lesson_plan_id.0, body.into_inner())
        .await
}

pub async fn delete_lesson_plan(req: HttpRequest, lesson_plan_id: SafeIDI64) -> ApiResult<HttpResponse> {
    LESSON_PLAN_SERVICE.delete_lesson_plan(&req, lesson_plan_id.0).await
}

// 配置路由
pub fn configure_lesson_plans_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lesson_plan")
            .service(web::resource("").route(web::post().to(create_lesson_plan)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_lesson_plan))
                    .route(web::delete().to(delete_lesson_plan)),
            ),
    );
}
