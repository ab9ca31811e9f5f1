use chrono::NaiveDate;
use serde::Serialize;

/// 个别化教育计划 (Individualized Education Program)
#[derive(Debug, Clone, Serialize)]
pub struct Iep {
    pub id: i64,
    pub student_id: i64,
    pub description: String,
    pub disability: String,
    pub start_date: NaiveDate,
}
