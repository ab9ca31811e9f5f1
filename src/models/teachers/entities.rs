use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // 密码哈希（PHC 字符串），不出现在任何响应中
    #[serde(skip_serializing)]
    pub password_hash: String,
}
