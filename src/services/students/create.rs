use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use super::StudentService;
use crate::errors::ApiResult;
use crate::models::students::requests::CreateStudentRequest;
use crate::utils::payload::Payload;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    body: Value,
) -> ApiResult<HttpResponse> {
    let student = CreateStudentRequest::from_payload(&Payload::from_value(body)?)?;

    let storage = service.get_storage(request)?;
    let created = storage.create_student(student).await?;

    info!("Student {} created", created.id);
    Ok(HttpResponse::NoContent().finish())
}
