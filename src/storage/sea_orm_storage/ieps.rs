//! IEP 存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::ieps::{ActiveModel, Column, Entity as Ieps};
use crate::errors::{RecordsError, Result};
use crate::models::ieps::{
    entities::Iep,
    requests::{CreateIepRequest, UpdateIepRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged};

impl SeaOrmStorage {
    /// 创建 IEP
    pub async fn create_iep_impl(&self, req: CreateIepRequest) -> Result<Iep> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            description: Set(req.description),
            disability: Set(req.disability),
            start_date: Set(req.start_date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create IEP: {e}")))?;

        Ok(result.into_iep())
    }

    /// 通过 ID 获取 IEP
    pub async fn get_iep_by_id_impl(&self, id: i64) -> Result<Option<Iep>> {
        let result = Ieps::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query IEP: {e}")))?;

        Ok(result.map(|m| m.into_iep()))
    }

    /// 更新 IEP
    pub async fn update_iep_impl(&self, id: i64, update: UpdateIepRequest) -> Result<Option<Iep>> {
        if self.get_iep_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(disability) = update.disability {
            model.disability = Set(disability);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update IEP: {e}"))
            })?;
        }

        self.get_iep_by_id_impl(id).await
    }

    /// 删除 IEP
    pub async fn delete_iep_impl(&self, id: i64) -> Result<bool> {
        let result = Ieps::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete IEP: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 每个学生取 ID 最小的 IEP
    pub async fn first_ieps_by_students_impl(
        &self,
        student_ids: &[i64],
    ) -> Result<HashMap<i64, Iep>> {
        if student_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ieps = Ieps::find()
            .filter(Column::StudentId.is_in(student_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query IEPs: {e}")))?;

        let mut first = HashMap::new();
        for model in ieps {
            first
                .entry(model.student_id)
                .or_insert_with(|| model.into_iep());
        }
        Ok(first)
    }
}
