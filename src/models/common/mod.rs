pub mod entity_kind;
pub mod enums;
pub mod error_code;
pub mod response;

pub use entity_kind::EntityKind;
pub use enums::{RecordEnum, SubjectType};
pub use error_code::ErrorCode;
pub use response::ApiResponse;
