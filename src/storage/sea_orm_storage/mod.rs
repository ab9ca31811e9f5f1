//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accommodations;
mod classes;
mod enrollments;
mod grades;
mod ieps;
mod lesson_plans;
mod students;
mod teachers;

use crate::config::DatabaseConfig;
use crate::errors::{RecordsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例并执行迁移
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| RecordsError::database_operation(format!("Migration failed: {e}")))?;

        info!("SeaORM storage ready, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化，开启外键约束）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url == SQLITE_MEMORY_URL;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RecordsError::database_config(format!("Invalid SQLite URL: {e}")))?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");
        if !in_memory {
            opt = opt
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存数据库只存在于单个连接中，连接池固定为一个且不回收
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| {
                RecordsError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            RecordsError::database_connection(format!("Unable to connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url == SQLITE_MEMORY_URL || url == ":memory:" {
            Ok(SQLITE_MEMORY_URL.to_string())
        } else if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RecordsError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, sqlite::memory:, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn entity_exists(&self, entity: EntityKind, id: i64) -> Result<bool> {
        self.entity_exists_impl(entity, id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_email_impl(email).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn count_teachers(&self) -> Result<u64> {
        self.count_teachers_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn list_students_by_ids(&self, ids: &[i64]) -> Result<HashMap<i64, Student>> {
        self.list_students_by_ids_impl(ids).await
    }

    async fn list_students_in_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_in_class_impl(class_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(id).await
    }

    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, update).await
    }

    async fn delete_class(&self, id: i64) -> Result<bool> {
        self.delete_class_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(id, update).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    // 课程计划模块
    async fn create_lesson_plan(&self, plan: CreateLessonPlanRequest) -> Result<LessonPlan> {
        self.create_lesson_plan_impl(plan).await
    }

    async fn get_lesson_plan_by_id(&self, id: i64) -> Result<Option<LessonPlan>> {
        self.get_lesson_plan_by_id_impl(id).await
    }

    async fn update_lesson_plan(
        &self,
        id: i64,
        update: UpdateLessonPlanRequest,
    ) -> Result<Option<LessonPlan>> {
        self.update_lesson_plan_impl(id, update).await
    }

    async fn delete_lesson_plan(&self, id: i64) -> Result<bool> {
        self.delete_lesson_plan_impl(id).await
    }

    async fn list_lesson_plans_by_class(&self, class_id: i64) -> Result<Vec<LessonPlan>> {
        self.list_lesson_plans_by_class_impl(class_id).await
    }

    // 成绩模块
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>> {
        self.update_grade_impl(id, update).await
    }

    async fn delete_grade(&self, id: i64) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    async fn list_grades_by_students(&self, student_ids: &[i64]) -> Result<Vec<Grade>> {
        self.list_grades_by_students_impl(student_ids).await
    }

    // IEP 模块
    async fn create_iep(&self, iep: CreateIepRequest) -> Result<Iep> {
        self.create_iep_impl(iep).await
    }

    async fn get_iep_by_id(&self, id: i64) -> Result<Option<Iep>> {
        self.get_iep_by_id_impl(id).await
    }

    async fn update_iep(&self, id: i64, update: UpdateIepRequest) -> Result<Option<Iep>> {
        self.update_iep_impl(id, update).await
    }

    async fn delete_iep(&self, id: i64) -> Result<bool> {
        self.delete_iep_impl(id).await
    }

    async fn first_ieps_by_students(&self, student_ids: &[i64]) -> Result<HashMap<i64, Iep>> {
        self.first_ieps_by_students_impl(student_ids).await
    }

    // 调整措施模块
    async fn create_accommodation(
        &self,
        accommodation: CreateAccommodationRequest,
    ) -> Result<Accommodation> {
        self.create_accommodation_impl(accommodation).await
    }

    async fn get_accommodation_by_id(&self, id: i64) -> Result<Option<Accommodation>> {
        self.get_accommodation_by_id_impl(id).await
    }

    async fn update_accommodation(
        &self,
        id: i64,
        update: UpdateAccommodationRequest,
    ) -> Result<Option<Accommodation>> {
        self.update_accommodation_impl(id, update).await
    }

    async fn delete_accommodation(&self, id: i64) -> Result<bool> {
        self.delete_accommodation_impl(id).await
    }

    async fn list_accommodations_by_lesson_plan(
        &self,
        lesson_plan_id: i64,
    ) -> Result<Vec<Accommodation>> {
        self.list_accommodations_by_lesson_plan_impl(lesson_plan_id)
            .await
    }
}

impl SeaOrmStorage {
    /// 检查实体是否存在
    pub async fn entity_exists_impl(&self, entity: EntityKind, id: i64) -> Result<bool> {
        use crate::entity::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        let count = match entity {
            EntityKind::Teacher => Teachers::find_by_id(id).count(&self.db).await,
            EntityKind::Student => Students::find_by_id(id).count(&self.db).await,
            EntityKind::Class => Classes::find_by_id(id).count(&self.db).await,
            EntityKind::Enrollment => Enrollments::find_by_id(id).count(&self.db).await,
            EntityKind::LessonPlan => LessonPlans::find_by_id(id).count(&self.db).await,
            EntityKind::Grade => Grades::find_by_id(id).count(&self.db).await,
            EntityKind::Iep => Ieps::find_by_id(id).count(&self.db).await,
            EntityKind::Accommodation => Accommodations::find_by_id(id).count(&self.db).await,
        }
        .map_err(|e| {
            RecordsError::database_operation(format!("Failed to look up {entity} {id}: {e}"))
        })?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};

    async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::new_async(&DatabaseConfig {
            url: SQLITE_MEMORY_URL.into(),
            pool_size: 1,
            timeout: 30,
        })
        .await
        .unwrap()
    }

    fn teacher(email: &str) -> CreateTeacherRequest {
        CreateTeacherRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            password: "hash".into(),
        }
    }

    #[actix_web::test]
    async fn test_duplicate_teacher_email_is_unique_violation() {
        let storage = memory_storage().await;
        storage.create_teacher_impl(teacher("ada@school.test")).await.unwrap();

        let err = storage
            .create_teacher_impl(teacher("ada@school.test"))
            .await
            .unwrap_err();
        assert!(matches!(err, RecordsError::UniqueViolation(_)), "{err}");

        let other = storage
            .create_teacher_impl(teacher("grace@school.test"))
            .await
            .unwrap();
        let update = UpdateTeacherRequest {
            email: Some("ada@school.test".into()),
            ..Default::default()
        };
        let err = storage
            .update_teacher_impl(other.id, update)
            .await
            .unwrap_err();
        assert!(matches!(err, RecordsError::UniqueViolation(_)), "{err}");
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            SQLITE_MEMORY_URL
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/school").unwrap(),
            "postgres://u:p@localhost/school"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }
}
