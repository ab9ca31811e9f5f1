//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{RecordsError, Result};
use crate::models::RecordEnum;
use crate::models::grades::{
    entities::Grade,
    requests::{CreateGradeRequest, UpdateGradeRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged};

impl SeaOrmStorage {
    /// 创建成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            grade_type: Set(req.grade_type.as_str().to_string()),
            grade_value: Set(req.grade_value),
            date: Set(req.date),
            subject: Set(req.subject.as_str().to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create grade: {e}")))?;

        result.into_grade()
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query grade: {e}")))?;

        result.map(|m| m.into_grade()).transpose()
    }

    /// 更新成绩
    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        if self.get_grade_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }
        if let Some(grade_type) = update.grade_type {
            model.grade_type = Set(grade_type.as_str().to_string());
        }
        if let Some(grade_value) = update.grade_value {
            model.grade_value = Set(grade_value);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(subject) = update.subject {
            model.subject = Set(subject.as_str().to_string());
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update grade: {e}"))
            })?;
        }

        self.get_grade_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete grade: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出一组学生的成绩，按成绩 ID 升序
    pub async fn list_grades_by_students_impl(&self, student_ids: &[i64]) -> Result<Vec<Grade>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let grades = Grades::find()
            .filter(Column::StudentId.is_in(student_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query grades: {e}")))?;

        grades.into_iter().map(|m| m.into_grade()).collect()
    }
}
