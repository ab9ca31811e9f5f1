pub mod extractor;
pub mod parameter_error_handler;
pub mod password;
pub mod payload;
pub mod validate;

pub use extractor::{SafeClassIdI64, SafeIDI64, SafeLessonPlanIdI64};
pub use parameter_error_handler::json_error_handler;
pub use payload::Payload;
pub use validate::{
    ValidationError, validate_date, validate_enum, validate_foreign_key, validate_required,
    validate_school_year,
};
