use actix_web::{HttpRequest, error::JsonPayloadError};
use tracing::debug;

use crate::errors::ApiError;
use crate::utils::validate::ValidationError;

/// JSON 请求体解析失败时返回结构化的 400 错误
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
    ApiError::from(ValidationError::InvalidJson {
        message: err.to_string(),
    })
    .into()
}
