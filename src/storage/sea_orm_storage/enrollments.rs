//! 选课存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Entity as Enrollments};
use crate::errors::{RecordsError, Result};
use crate::models::enrollments::{
    entities::Enrollment,
    requests::{CreateEnrollmentRequest, UpdateEnrollmentRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, Unchanged};

impl SeaOrmStorage {
    pub async fn create_enrollment_impl(&self, req: CreateEnrollmentRequest) -> Result<Enrollment> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to create enrollment: {e}"))
        })?;

        Ok(result.into_enrollment())
    }

    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id).one(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to query enrollment: {e}"))
        })?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn update_enrollment_impl(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        if self.get_enrollment_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update enrollment: {e}"))
            })?;
        }

        self.get_enrollment_by_id_impl(id).await
    }

    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id).exec(&self.db).await.map_err(|e| {
            RecordsError::database_operation(format!("Failed to delete enrollment: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }
}
