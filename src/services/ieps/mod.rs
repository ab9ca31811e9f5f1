pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::ApiResult;
use crate::storage::Storage;

pub struct IepService;

impl IepService {
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ApiResult<Arc<dyn Storage>> {
        super::request_storage(request)
    }

    pub async fn create_iep(&self, request: &HttpRequest, body: Value) -> ApiResult<HttpResponse> {
        create::create_iep(self, request, body).await
    }

    pub async fn update_iep(
        &self,
        request: &HttpRequest,
        iep_id: i64,
        body: Value,
    ) -> ApiResult<HttpResponse> {
        update::update_iep(self, request, iep_id, body).await
    }

    pub async fn delete_iep(&self, request: &HttpRequest, iep_id: i64) -> ApiResult<HttpResponse> {
        delete::delete_iep(self, request, iep_id).await
    }
}
