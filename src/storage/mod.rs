use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    EntityKind,
    accommodations::{
        entities::Accommodation,
        requests::{CreateAccommodationRequest, UpdateAccommodationRequest},
    },
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, UpdateEnrollmentRequest},
    },
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, UpdateGradeRequest},
    },
    ieps::{
        entities::Iep,
        requests::{CreateIepRequest, UpdateIepRequest},
    },
    lesson_plans::{
        entities::LessonPlan,
        requests::{CreateLessonPlanRequest, UpdateLessonPlanRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 持久化网关
///
/// `update_*` 只写入请求中为 `Some` 的字段，目标不存在时返回 `Ok(None)`；
/// `delete_*` 返回是否删除了一行，级联由数据库外键完成。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 检查任意实体的主键是否存在
    async fn entity_exists(&self, entity: EntityKind, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师，password 字段须已是哈希值
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 更新教师，password 字段须已是哈希值
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    async fn count_teachers(&self) -> Result<u64>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 按 ID 批量获取学生
    async fn list_students_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Student>>;
    // 按选课顺序列出班级学生，重复选课的学生会重复出现
    async fn list_students_in_class(&self, class_id: i64) -> Result<Vec<Student>>;

    /// 班级管理方法
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>>;
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    async fn delete_class(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 课程计划管理方法
    async fn create_lesson_plan(&self, plan: CreateLessonPlanRequest) -> Result<LessonPlan>;
    async fn get_lesson_plan_by_id(&self, id: i64) -> Result<Option<LessonPlan>>;
    async fn update_lesson_plan(
        &self,
        id: i64,
        update: UpdateLessonPlanRequest,
    ) -> Result<Option<LessonPlan>>;
    async fn delete_lesson_plan(&self, id: i64) -> Result<bool>;
    async fn list_lesson_plans_by_class(&self, class_id: i64) -> Result<Vec<LessonPlan>>;

    /// 成绩管理方法
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    async fn delete_grade(&self, id: i64) -> Result<bool>;
    // 按成绩 ID 升序返回这些学生的全部成绩
    async fn list_grades_by_students(&self, student_ids: &[i64]) -> Result<Vec<Grade>>;

    /// IEP 管理方法
    async fn create_iep(&self, iep: CreateIepRequest) -> Result<Iep>;
    async fn get_iep_by_id(&self, id: i64) -> Result<Option<Iep>>;
    async fn update_iep(&self, id: i64, update: UpdateIepRequest) -> Result<Option<Iep>>;
    async fn delete_iep(&self, id: i64) -> Result<bool>;
    // 每个学生 ID 最小的 IEP
    async fn first_ieps_by_students(&self, student_ids: &[i64]) -> Result<HashMap<i64, Iep>>;

    /// 调整措施管理方法
    async fn create_accommodation(
        &self,
        accommodation: CreateAccommodationRequest,
    ) -> Result<Accommodation>;
    async fn get_accommodation_by_id(&self, id: i64) -> Result<Option<Accommodation>>;
    async fn update_accommodation(
        &self,
        id: i64,
        update: UpdateAccommodationRequest,
    ) -> Result<Option<Accommodation>>;
    async fn delete_accommodation(&self, id: i64) -> Result<bool>;
    async fn list_accommodations_by_lesson_plan(
        &self,
        lesson_plan_id: i64,
    ) -> Result<Vec<Accommodation>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
