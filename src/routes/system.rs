use actix_web::{HttpResponse, web};
use serde_json::json;

// 存活检查
pub async fn hello_world() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "hello": "world" }))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(hello_world));
}
