use serde::Serialize;

// 针对某学生在某课程计划中的调整措施
#[derive(Debug, Clone, Serialize)]
pub struct Accommodation {
    pub id: i64,
    pub student_id: i64,
    pub lesson_plan_id: i64,
    pub text: String,
}
