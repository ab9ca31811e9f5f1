//! 路径参数提取器
//!
//! 将路径中的 ID 段解析为 i64，无法解析时返回 404（与找不到资源一致）。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use crate::errors::ApiError;

macro_rules! define_safe_id_extractor {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(parse_path_id(req, $param).map($name).map_err(Into::into))
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIDI64 => "id",
    SafeClassIdI64 => "class_id",
    SafeLessonPlanIdI64 => "lesson_plan_id",
}

fn parse_path_id(req: &HttpRequest, name: &'static str) -> Result<i64, ApiError> {
    let raw = req.match_info().get(name).unwrap_or_default();
    raw.parse::<i64>().map_err(|_| ApiError::InvalidPath {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parses_integer_segment() {
        let req = TestRequest::default()
            .param("class_id", "42")
            .to_http_request();
        assert_eq!(parse_path_id(&req, "class_id").unwrap(), 42);
    }

    #[test]
    fn test_rejects_non_integer_segment() {
        let req = TestRequest::default().param("id", "abc").to_http_request();
        match parse_path_id(&req, "id") {
            Err(ApiError::InvalidPath { name, value }) => {
                assert_eq!(name, "id");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
