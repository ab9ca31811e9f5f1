//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Entity as Classes};
use crate::errors::{RecordsError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, Unchanged};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ActiveModel {
            teacher_id: Set(Some(req.teacher_id)),
            name: Set(req.name),
            school_year: Set(req.school_year),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create class: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query class: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        if self.get_class_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(school_year) = update.school_year {
            model.school_year = Set(school_year);
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update class: {e}"))
            })?;
        }

        self.get_class_by_id_impl(id).await
    }

    /// 删除班级，课程计划（及其调整措施）与选课由外键级联删除
    pub async fn delete_class_impl(&self, id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete class: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
