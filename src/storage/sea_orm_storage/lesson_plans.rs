//! 课程计划存储操作

use super::SeaOrmStorage;
use crate::entity::lesson_plans::{ActiveModel, Column, Entity as LessonPlans};
use crate::errors::{RecordsError, Result};
use crate::models::RecordEnum;
use crate::models::lesson_plans::{
    entities::LessonPlan,
    requests::{CreateLessonPlanRequest, UpdateLessonPlanRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged};

impl SeaOrmStorage {
    /// 创建课程计划
    pub async fn create_lesson_plan_impl(&self, req: CreateLessonPlanRequest) -> Result<LessonPlan> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            name: Set(req.name),
            date: Set(req.date),
            overview: Set(req.overview),
            objective: Set(req.objective),
            subject: Set(req.subject.as_str().to_string()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to create lesson plan: {e}"))
        })?;

        result.into_lesson_plan()
    }

    /// 通过 ID 获取课程计划
    pub async fn get_lesson_plan_by_id_impl(&self, id: i64) -> Result<Option<LessonPlan>> {
        let result = LessonPlans::find_by_id(id).one(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to query lesson plan: {e}"))
        })?;

        result.map(|m| m.into_lesson_plan()).transpose()
    }

    /// 更新课程计划
    pub async fn update_lesson_plan_impl(
        &self,
        id: i64,
        update: UpdateLessonPlanRequest,
    ) -> Result<Option<LessonPlan>> {
        if self.get_lesson_plan_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(overview) = update.overview {
            model.overview = Set(overview);
        }
        if let Some(objective) = update.objective {
            model.objective = Set(objective);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject.as_str().to_string());
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update lesson plan: {e}"))
            })?;
        }

        self.get_lesson_plan_by_id_impl(id).await
    }

    /// 删除课程计划，调整措施由外键级联删除
    pub async fn delete_lesson_plan_impl(&self, id: i64) -> Result<bool> {
        let result = LessonPlans::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to delete lesson plan: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }

    /// 列出班级的课程计划
    pub async fn list_lesson_plans_by_class_impl(&self, class_id: i64) -> Result<Vec<LessonPlan>> {
        let plans = LessonPlans::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                RecordsError::database_operation(format!("Failed to query lesson plans: {e}"))
            })?;

        plans.into_iter().map(|m| m.into_lesson_plan()).collect()
    }
}
