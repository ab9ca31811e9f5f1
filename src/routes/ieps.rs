use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;

use crate::errors::ApiResult;
use crate::services::IepService;
use crate::utils::SafeIDI64;

static IEP_SERVICE: IepService = IepService;

// HTTP处理程序
pub async fn create_iep(req: HttpRequest, body: web::Json<Value>) -> ApiResult<HttpResponse> {
    IEP_SERVICE.create_iep(&req, body.into_inner()).await
}

pub async fn update_iep(
    req: HttpRequest,
    iep_id: SafeIDI64,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    IEP_SERVICE
        .update_iep(&req, iep_id.0, body.into_inner())
        .await
}

pub async fn delete_iep(req: HttpRequest, iep_id: SafeIDI64) -> ApiResult<HttpResponse> {
    IEP_SERVICE.delete_iep(&req, iep_id.0).await
}

// 配置路由，路径沿用大写的 /IEP
pub fn configure_ieps_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/IEP")
            .service(web::resource("").route(web::post().to(create_iep)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_iep))
                    .route(web::delete().to(delete_iep)),
            ),
    );
}
