use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::AccommodationService;
use crate::utils::SafeIDI64;

static ACCOMMODATION_SERVICE: AccommodationService = AccommodationService;

// HTTP处理程序
pub async fn create_accommodation(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    ACCOMMODATION_SERVICE.create_accommodation(&req, body.into_inner()).await
}

pub async fn update_accommodation(
    req: HttpRequest,
    accommodation_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    ACCOMMODATION_SERVICE
        .update_accommodation(&req, accommodation_id.0, body.into_inner())
        .await
}

pub async fn delete_accommodation(req: HttpRequest, accommodation_id: SafeIDI64) -> ApiResult<HttpResponse> {
    ACCOMMODATION_SERVICE.delete_accommodation(&req, accommodation_id.0).await
}

// 配置路由
pub fn configure_accommodations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accommodation")
            .service(web::resource("").route(web::post().to(create_accommodation)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_accommodation))
                    .route(web::delete().to(delete_accommodation)),
            ),
    );
}
