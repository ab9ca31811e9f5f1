use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RecordEnum, SubjectType};

// 成绩类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeType {
    Test,       // 考试
    Assignment, // 作业
    Quiz,       // 小测
}

impl GradeType {
    pub const TEST: &'static str = "Test";
    pub const ASSIGNMENT: &'static str = "Assignment";
    pub const QUIZ: &'static str = "Quiz";
}

impl RecordEnum for GradeType {
    const NAME: &'static str = "GradeType";
    const VARIANTS: &'static [Self] = &[GradeType::Test, GradeType::Assignment, GradeType::Quiz];

    fn as_str(&self) -> &'static str {
        match self {
            GradeType::Test => GradeType::TEST,
            GradeType::Assignment => GradeType::ASSIGNMENT,
            GradeType::Quiz => GradeType::QUIZ,
        }
    }
}

impl Serialize for GradeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GradeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for GradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeType::from_external(s).ok_or_else(|| format!("Invalid grade type: {s}"))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub grade_type: GradeType,
    pub grade_value: f64,
    pub date: NaiveDate,
    pub subject: SubjectType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_type_parsing() {
        assert_eq!("Assignment".parse::<GradeType>(), Ok(GradeType::Assignment));
        assert!("quiz".parse::<GradeType>().is_err());
        assert!("Essay".parse::<GradeType>().is_err());
    }

    #[test]
    fn test_grade_type_external_values() {
        assert_eq!(GradeType::external_values(), vec!["Test", "Assignment", "Quiz"]);
        assert_eq!(serde_json::to_string(&GradeType::Test).unwrap(), "\"Test\"");
    }
}
