//! 业务服务层
//!
//! 每个实体一个服务，负责校验、调用存储与构造响应。存储实例在启动时注册为
//! `web::Data<Arc<dyn Storage>>`，服务在每个请求中从 app data 取出。

pub mod accommodations;
pub mod classes;
pub mod enrollments;
pub mod grades;
pub mod ieps;
pub mod lesson_plans;
pub mod students;
pub mod teachers;

pub use accommodations::AccommodationService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use ieps::IepService;
pub use lesson_plans::LessonPlanService;
pub use students::StudentService;
pub use teachers::TeacherService;

use actix_web::HttpRequest;
use std::sync::Arc;

use crate::errors::{ApiResult, RecordsError};
use crate::storage::Storage;

/// 从请求的 app data 中取出存储实例
pub(crate) fn request_storage(request: &HttpRequest) -> ApiResult<Arc<dyn Storage>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| RecordsError::database_config("Storage not found in app data").into())
}
