use serde::{Deserialize, Serialize};

/// 业务错误代码
///
/// 1xxx: 请求校验，2xxx: 资源查找，3xxx: 冲突，5xxx: 服务端错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    InvalidJson = 1000,
    MissingField = 1001,
    InvalidEnumValue = 1002,
    InvalidDate = 1003,
    InvalidSchoolYear = 1004,
    InvalidFieldType = 1005,
    ForeignKeyNotFound = 1006,

    ResourceNotFound = 2001,

    EmailAlreadyExists = 3001,

    InternalServerError = 5000,
}
