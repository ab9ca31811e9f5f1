use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::ClassService;
use crate::utils::{SafeClassIdI64, SafeIDI64, SafeLessonPlanIdI64};

static CLASS_SERVICE: ClassService = ClassService;

// HTTP处理程序
pub async fn create_class(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    CLASS_SERVICE.create_class(&req, body.into_inner()).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, body.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeIDI64) -> ApiResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub async fn list_class_students(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ApiResult<HttpResponse> {
    CLASS_SERVICE.list_class_students(&req, class_id.0).await
}

pub async fn list_class_grades(req: HttpRequest, class_id: SafeClassIdI64) -> ApiResult<HttpResponse> {
    CLASS_SERVICE.list_class_grades(&req, class_id.0).await
}

pub async fn list_class_lesson_plans(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ApiResult<HttpResponse> {
    CLASS_SERVICE.list_class_lesson_plans(&req, class_id.0).await
}

pub async fn list_lesson_plan_accommodations(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    lesson_plan_id: SafeLessonPlanIdI64,
) -> ApiResult<HttpResponse> {
    CLASS_SERVICE
        .list_lesson_plan_accommodations(&req, class_id.0, lesson_plan_id.0)
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/class")
            .service(web::resource("").route(web::post().to(create_class)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_class))
                    .route(web::delete().to(delete_class)),
            )
            // 组合查询
            .service(
                web::resource("/{class_id}/students").route(web::get().to(list_class_students)),
            )
            .service(web::resource("/{class_id}/grades").route(web::get().to(list_class_grades)))
            .service(
                web::resource("/{class_id}/lesson_plans")
                    .route(web::get().to(list_class_lesson_plans)),
            )
            .service(
                web::resource("/{class_id}/lesson_plans/{lesson_plan_id}/accommodations")
                    .route(web::get().to(list_lesson_plan_accommodations)),
            ),
    );
}
