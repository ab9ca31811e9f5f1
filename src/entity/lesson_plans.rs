//! 课程计划实体

use sea_orm::entity::prelude::*;

use crate::errors::{RecordsError, Result as RecordsResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub name: String,
    pub date: Date,
    #[sea_orm(column_type = "Text")]
    pub overview: String,
    #[sea_orm(column_type = "Text")]
    pub objective: String,
    pub subject: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
    #[sea_orm(has_many = "super::accommodations::Entity")]
    Accommodations,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::accommodations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型，学科字符串无法识别时视为数据损坏
impl Model {
    pub fn into_lesson_plan(self) -> RecordsResult<crate::models::lesson_plans::entities::LessonPlan> {
        use crate::models::lesson_plans::entities::LessonPlan;

        let subject = self.subject.parse().map_err(|e: String| {
            RecordsError::data_integrity(format!("lesson_plans.id={}: {e}", self.id))
        })?;

        Ok(LessonPlan {
            id: self.id,
            class_id: self.class_id,
            name: self.name,
            date: self.date,
            overview: self.overview,
            objective: self.objective,
            subject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(subject: &str) -> Model {
        Model {
            id: 3,
            class_id: 1,
            name: "Lesson 1".into(),
            date: Date::from_ymd_opt(2022, 9, 1).unwrap(),
            overview: "Intro".into(),
            objective: "Learn".into(),
            subject: subject.into(),
        }
    }

    #[test]
    fn test_into_lesson_plan() {
        let plan = row("Reading & Writing").into_lesson_plan().unwrap();
        assert_eq!(plan.subject.to_string(), "Reading & Writing");
    }

    #[test]
    fn test_unknown_subject_is_data_integrity_error() {
        let err = row("Science").into_lesson_plan().unwrap_err();
        assert_eq!(err.code(), "E004");
    }
}
