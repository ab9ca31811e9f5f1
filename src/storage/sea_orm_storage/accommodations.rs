//! 调整措施存储操作

use super::SeaOrmStorage;
use crate::entity::accommodations::{ActiveModel, Column, Entity as Accommodations};
use crate::errors::{RecordsError, Result};
use crate::models::accommodations::{
    entities::Accommodation,
    requests::{CreateAccommodationRequest, UpdateAccommodationRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged};

impl SeaOrmStorage {
    pub async fn create_accommodation_impl(
        &self,
        req: CreateAccommodationRequest,
    ) -> Result<Accommodation> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            lesson_plan_id: Set(req.lesson_plan_id),
            text: Set(req.text),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to create accommodation: {e}"))
        })?;

        Ok(result.into_accommodation())
    }

    pub async fn get_accommodation_by_id_impl(&self, id: i64) -> Result<Option<Accommodation>> {
        let result = Accommodations::find_by_id(id).one(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to query accommodation: {e}"))
        })?;

        Ok(result.map(|m| m.into_accommodation()))
    }

    pub async fn update_accommodation_impl(
        &self,
        id: i64,
        update: UpdateAccommodationRequest,
    ) -> Result<Option<Accommodation>> {
        if self.get_accommodation_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(lesson_plan_id) = update.lesson_plan_id {
            model.lesson_plan_id = Set(lesson_plan_id);
        }
        if let Some(text) = update.text {
            model.text = Set(text);
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update accommodation: {e}"))
            })?;
        }

        self.get_accommodation_by_id_impl(id).await
    }

    pub async fn delete_accommodation_impl(&self, id: i64) -> Result<bool> {
        let result = Accommodations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RecordsError::database_operation(format!("Failed to delete accommodation: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 列出课程计划下的调整措施，按 ID 升序
    pub async fn list_accommodations_by_lesson_plan_impl(
        &self,
        lesson_plan_id: i64,
    ) -> Result<Vec<Accommodation>> {
        let accommodations = Accommodations::find()
            .filter(Column::LessonPlanId.eq(lesson_plan_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                RecordsError::database_operation(format!("Failed to query accommodations: {e}"))
            })?;

        Ok(accommodations
            .into_iter()
            .map(|m| m.into_accommodation())
            .collect())
    }
}
