//! 学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{RecordsError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to create student: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if model.is_changed() {
            model.update(&self.db).await.map_err(|e| {
                RecordsError::database_operation(format!("Failed to update student: {e}"))
            })?;
        }

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生，选课、成绩、IEP 与调整措施由外键级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to delete student: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按 ID 批量获取学生
    pub async fn list_students_by_ids_impl(&self, ids: &[i64]) -> Result<HashMap<i64, Student>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let students = Students::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Failed to query students: {e}")))?;

        Ok(students
            .into_iter()
            .map(|m| (m.id, m.into_student()))
            .collect())
    }

    /// 按选课 ID 顺序列出班级学生
    pub async fn list_students_in_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let enrollments = Enrollments::find()
            .filter(EnrollmentColumn::ClassId.eq(class_id))
            .order_by_asc(EnrollmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                RecordsError::database_operation(format!("Failed to query enrollments: {e}"))
            })?;

        let ids: Vec<i64> = enrollments.iter().map(|e| e.student_id).collect();
        let students = self.list_students_by_ids_impl(&ids).await?;

        Ok(ids
            .iter()
            .filter_map(|id| students.get(id).cloned())
            .collect())
    }
}
