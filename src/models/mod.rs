pub mod accommodations;
pub mod classes;
pub mod common;
pub mod enrollments;
pub mod grades;
pub mod ieps;
pub mod lesson_plans;
pub mod students;
pub mod teachers;

pub use common::{ApiResponse, EntityKind, ErrorCode, RecordEnum, SubjectType};
