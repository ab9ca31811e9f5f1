use chrono::NaiveDate;
use serde::Serialize;

use crate::models::SubjectType;

#[derive(Debug, Clone, Serialize)]
pub struct LessonPlan {
    pub id: i64,
    pub class_id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub overview: String,
    pub objective: String,
    pub subject: SubjectType,
}
