//! 封闭枚举的外部字符串映射

use serde::{Deserialize, Serialize};

/// 以外部字符串表示的封闭枚举
///
/// `VARIANTS` 列出全部成员，`as_str` 返回成员的外部字符串（区分大小写）。
pub trait RecordEnum: Sized + Copy + 'static {
    /// 枚举名称，用于错误信息
    const NAME: &'static str;
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// 按外部字符串查找成员
    fn from_external(text: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == text)
    }

    /// 全部外部字符串
    fn external_values() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.as_str()).collect()
    }
}

// 学科
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectType {
    ReadingAndWriting, // 读写
    Math,              // 数学
}

impl SubjectType {
    pub const READING_AND_WRITING: &'static str = "Reading & Writing";
    pub const MATH: &'static str = "Math";
}

impl RecordEnum for SubjectType {
    const NAME: &'static str = "SubjectType";
    const VARIANTS: &'static [Self] = &[SubjectType::ReadingAndWriting, SubjectType::Math];

    fn as_str(&self) -> &'static str {
        match self {
            SubjectType::ReadingAndWriting => SubjectType::READING_AND_WRITING,
            SubjectType::Math => SubjectType::MATH,
        }
    }
}

impl Serialize for SubjectType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SubjectType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubjectType::from_external(s).ok_or_else(|| format!("Invalid subject type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_round_trips_external_string() {
        assert_eq!(
            "Reading & Writing".parse::<SubjectType>(),
            Ok(SubjectType::ReadingAndWriting)
        );
        assert_eq!(SubjectType::Math.to_string(), "Math");
    }

    #[test]
    fn test_subject_is_case_sensitive() {
        assert!("math".parse::<SubjectType>().is_err());
        assert!("Reading and Writing".parse::<SubjectType>().is_err());
    }

    #[test]
    fn test_subject_serializes_as_external_string() {
        let json = serde_json::to_string(&SubjectType::ReadingAndWriting).unwrap();
        assert_eq!(json, "\"Reading & Writing\"");
        assert_eq!(
            SubjectType::external_values(),
            vec!["Reading & Writing", "Math"]
        );
    }
}
