//! 班级组合查询的响应结构
//!
//! 所有响应都包在 `{"Class": {...}}` 中。

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::SubjectType;
use crate::models::grades::entities::{Grade, GradeType};
use crate::models::ieps::entities::Iep;
use crate::models::lesson_plans::entities::LessonPlan;
use crate::models::students::entities::Student;

#[derive(Debug, Serialize)]
pub struct ClassEnvelope<T> {
    #[serde(rename = "Class")]
    pub class: T,
}

impl<T> ClassEnvelope<T> {
    pub fn new(class: T) -> Self {
        Self { class }
    }
}

// 学生的 IEP 摘要
#[derive(Debug, Clone, Serialize)]
pub struct IepSummary {
    pub description: String,
    pub disability: String,
}

impl From<Iep> for IepSummary {
    fn from(iep: Iep) -> Self {
        Self {
            description: iep.description,
            disability: iep.disability,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RosterStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub iep: Option<IepSummary>,
}

impl RosterStudent {
    pub fn new(student: Student, iep: Option<IepSummary>) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            iep,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassStudents {
    pub id: i64,
    pub students: Vec<RosterStudent>,
}

#[derive(Debug, Serialize)]
pub struct GradeSummary {
    pub id: i64,
    pub subject: SubjectType,
    pub grade_type: GradeType,
    pub date: NaiveDate,
    pub grade_value: f64,
}

impl From<Grade> for GradeSummary {
    fn from(grade: Grade) -> Self {
        Self {
            id: grade.id,
            subject: grade.subject,
            grade_type: grade.grade_type,
            date: grade.date,
            grade_value: grade.grade_value,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentGrades {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub grades: Vec<GradeSummary>,
}

#[derive(Debug, Serialize)]
pub struct ClassGrades {
    pub id: i64,
    pub students: Vec<StudentGrades>,
}

#[derive(Debug, Serialize)]
pub struct LessonPlanSummary {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub overview: String,
    pub objective: String,
    pub subject: SubjectType,
}

impl From<LessonPlan> for LessonPlanSummary {
    fn from(plan: LessonPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            date: plan.date,
            overview: plan.overview,
            objective: plan.objective,
            subject: plan.subject,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClassLessonPlans {
    pub id: i64,
    pub lesson_plans: Vec<LessonPlanSummary>,
}

#[derive(Debug, Serialize)]
pub struct AccommodationSummary {
    pub text: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct StudentAccommodation {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub iep: Option<IepSummary>,
    pub accommodation: AccommodationSummary,
}

#[derive(Debug, Serialize)]
pub struct LessonPlanAccommodations {
    pub id: i64,
    pub student_accommodations: Vec<StudentAccommodation>,
}

#[derive(Debug, Serialize)]
pub struct ClassLessonPlanAccommodations {
    pub id: i64,
    pub lesson_plan: LessonPlanAccommodations,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roster_serializes_null_iep() {
        let body = ClassEnvelope::new(ClassStudents {
            id: 1,
            students: vec![RosterStudent::new(
                Student {
                    id: 3,
                    first_name: "Sam".into(),
                    last_name: "Lee".into(),
                },
                None,
            )],
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "Class": { "id": 1, "students": [
                { "id": 3, "first_name": "Sam", "last_name": "Lee", "iep": null }
            ]}})
        );
    }

    #[test]
    fn test_grade_summary_uses_external_strings() {
        let summary = GradeSummary {
            id: 9,
            subject: SubjectType::ReadingAndWriting,
            grade_type: GradeType::Assignment,
            date: NaiveDate::from_ymd_opt(2023, 3, 7).unwrap(),
            grade_value: 72.0,
        };
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "id": 9,
                "subject": "Reading & Writing",
                "grade_type": "Assignment",
                "date": "2023-03-07",
                "grade_value": 72.0,
            })
        );
    }
}
