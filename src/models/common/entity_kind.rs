use serde::Serialize;

/// 实体种类，用于外键校验与错误详情
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Teacher,
    Student,
    Class,
    Enrollment,
    LessonPlan,
    Grade,
    #[serde(rename = "IEP")]
    Iep,
    Accommodation,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Teacher => "Teacher",
            EntityKind::Student => "Student",
            EntityKind::Class => "Class",
            EntityKind::Enrollment => "Enrollment",
            EntityKind::LessonPlan => "LessonPlan",
            EntityKind::Grade => "Grade",
            EntityKind::Iep => "IEP",
            EntityKind::Accommodation => "Accommodation",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
