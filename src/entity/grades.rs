//! 成绩实体

use sea_orm::entity::prelude::*;

use crate::errors::{RecordsError, Result as RecordsResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub grade_type: String,
    pub grade_value: f64,
    pub date: Date,
    pub subject: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade(self) -> RecordsResult<crate::models::grades::entities::Grade> {
        use crate::models::grades::entities::Grade;

        let integrity = |e: String| RecordsError::data_integrity(format!("grades.id={}: {e}", self.id));
        let grade_type = self.grade_type.parse().map_err(integrity)?;
        let subject = self.subject.parse().map_err(integrity)?;

        Ok(Grade {
            id: self.id,
            student_id: self.student_id,
            grade_type,
            grade_value: self.grade_value,
            date: self.date,
            subject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectType;
    use crate::models::grades::entities::GradeType;

    fn row(grade_type: &str) -> Model {
        Model {
            id: 7,
            student_id: 1,
            grade_type: grade_type.into(),
            grade_value: 92.0,
            date: Date::from_ymd_opt(2022, 9, 1).unwrap(),
            subject: "Math".into(),
        }
    }

    #[test]
    fn test_into_grade() {
        let grade = row("Quiz").into_grade().unwrap();
        assert_eq!(grade.grade_type, GradeType::Quiz);
        assert_eq!(grade.subject, SubjectType::Math);
    }

    #[test]
    fn test_unknown_grade_type_is_data_integrity_error() {
        let err = row("Essay").into_grade().unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("grades.id=7"));
    }
}
