//! 调整措施实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accommodations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub lesson_plan_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
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
    #[sea_orm(
        belongs_to = "super::lesson_plans::Entity",
        from = "Column::LessonPlanId",
        to = "super::lesson_plans::Column::Id",
        on_delete = "Cascade"
    )]
    LessonPlan,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::lesson_plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_accommodation(self) -> crate::models::accommodations::entities::Accommodation {
        use crate::models::accommodations::entities::Accommodation;

        Accommodation {
            id: self.id,
            student_id: self.student_id,
            lesson_plan_id: self.lesson_plan_id,
            text: self.text,
        }
    }
}
