use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 任课教师ID，教师删除后为空
    pub teacher_id: Option<i64>,
    // 班级名称
    pub name: String,
    // 学年，格式 YYYY-YYYY
    pub school_year: String,
}
