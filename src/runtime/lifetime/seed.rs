//! 演示数据
//!
//! 空库启动且开启 `app.seed_demo_data` 时写入两位教师、十名学生、两个班级及其
//! 课程计划、成绩、IEP 与调整措施。

use chrono::NaiveDate;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Argon2Config;
use crate::errors::{RecordsError, Result};
use crate::models::SubjectType;
use crate::models::accommodations::requests::CreateAccommodationRequest;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::models::grades::entities::GradeType;
use crate::models::grades::requests::CreateGradeRequest;
use crate::models::ieps::requests::CreateIepRequest;
use crate::models::lesson_plans::requests::CreateLessonPlanRequest;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;

const DEMO_PASSWORD: &str = "password";
const DEMO_SCHOOL_YEAR: &str = "2022-2023";

const TEACHERS: [(&str, &str, &str); 2] = [
    ("John", "Doe", "johndoe@example.com"),
    ("Jane", "Doe", "janedoe@example.com"),
];

const STUDENTS: [(&str, &str); 10] = [
    ("Alice", "Johnson"),
    ("Bob", "Smith"),
    ("Charlie", "Brown"),
    ("Diana", "Parker"),
    ("Emily", "Lee"),
    ("Frank", "Rodriguez"),
    ("Grace", "Lin"),
    ("Henry", "Chen"),
    ("Isabella", "Davis"),
    ("Jack", "Wang"),
];

// (班级名称, 学科)
const CLASSES: [(&str, SubjectType); 2] = [
    ("English 101", SubjectType::ReadingAndWriting),
    ("Math 101", SubjectType::Math),
];

const LESSON_DATES: [&str; 3] = ["2022-09-01", "2022-09-08", "2022-09-15"];

// (学生序号, 描述, 障碍类型, 开始日期)
const IEPS: [(usize, &str, &str, &str); 5] = [
    (0, "Sample Text", "Dyscalculia", "2021-01-01"),
    (1, "Reading Comprehension", "Dyslexia", "2020-08-15"),
    (
        3,
        "Attention Deficit Hyperactivity Disorder (ADHD)",
        "ADHD",
        "2022-02-01",
    ),
    (6, "Language Barrier", "ESL", "2021-09-01"),
    (9, "Social Anxiety", "Anxiety", "2021-03-01"),
];

// (学生序号, 班级序号, 措施)，均挂在该班级的第一节课上
const ACCOMMODATIONS: [(usize, usize, &str); 5] = [
    (0, 0, "Allow use of calculator"),
    (1, 0, "Provide extra time for reading assignments"),
    (3, 0, "Use multi-sensory teaching strategies"),
    (6, 1, "Provide additional language support resources"),
    (9, 1, "Provide alternative seating options"),
];

/// 数据库中没有教师时写入演示数据，失败只记录日志
///
/// 写入不在事务中进行：中途失败会留下已写入的行，且教师已存在时不会再次补写，
/// 需要清空数据库后重新启动。
pub async fn seed_demo_data(storage: &Arc<dyn Storage>, argon2: &Argon2Config) {
    match storage.count_teachers().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} teacher(s), skipping demo data", count);
            return;
        }
        Ok(_) => info!("No teachers found in database, seeding demo data..."),
        Err(e) => {
            warn!("Failed to count teachers: {}, skipping demo data", e);
            return;
        }
    }

    if let Err(e) = populate(storage.as_ref(), argon2).await {
        warn!("Demo data seeding stopped early: {}", e);
    }
}

fn demo_date(text: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?)
}

async fn populate(storage: &dyn Storage, argon2: &Argon2Config) -> Result<()> {
    let password_hash = hash_password(DEMO_PASSWORD, argon2)?;

    let mut teacher_ids = Vec::with_capacity(TEACHERS.len());
    for (first_name, last_name, email) in TEACHERS {
        let teacher = storage
            .create_teacher(CreateTeacherRequest {
                first_name: first_name.into(),
                last_name: last_name.into(),
                email: email.into(),
                password: password_hash.clone(),
            })
            .await?;
        teacher_ids.push(teacher.id);
    }

    let mut student_ids = Vec::with_capacity(STUDENTS.len());
    for (first_name, last_name) in STUDENTS {
        let student = storage
            .create_student(CreateStudentRequest {
                first_name: first_name.into(),
                last_name: last_name.into(),
            })
            .await?;
        student_ids.push(student.id);
    }

    // 每个班级五名学生、三节课
    let per_class = student_ids.len() / CLASSES.len();
    let mut first_lessons = Vec::with_capacity(CLASSES.len());
    for (index, ((name, subject), teacher_id)) in CLASSES.into_iter().zip(&teacher_ids).enumerate()
    {
        let class = storage
            .create_class(CreateClassRequest {
                teacher_id: *teacher_id,
                name: name.into(),
                school_year: DEMO_SCHOOL_YEAR.into(),
            })
            .await?;

        for student_id in &student_ids[index * per_class..(index + 1) * per_class] {
            storage
                .create_enrollment(CreateEnrollmentRequest {
                    student_id: *student_id,
                    class_id: class.id,
                })
                .await?;
        }

        let mut lesson_ids = Vec::with_capacity(LESSON_DATES.len());
        for (number, date) in LESSON_DATES.iter().enumerate() {
            let lesson = number + 1;
            let plan = storage
                .create_lesson_plan(CreateLessonPlanRequest {
                    class_id: class.id,
                    name: format!("Lesson {lesson}"),
                    date: demo_date(date)?,
                    overview: format!("Overview of lesson {lesson}"),
                    objective: format!("Objective of lesson {lesson}"),
                    subject,
                })
                .await?;
            lesson_ids.push(plan.id);
        }
        first_lessons.push(
            lesson_ids
                .first()
                .copied()
                .ok_or_else(|| RecordsError::data_integrity("class seeded without lessons"))?,
        );
    }

    let grade_plan = [
        (GradeType::Test, LESSON_DATES[0], SubjectType::Math),
        (GradeType::Assignment, LESSON_DATES[1], SubjectType::Math),
        (GradeType::Quiz, LESSON_DATES[2], SubjectType::ReadingAndWriting),
    ];
    // 随机分数在 await 之前生成，ThreadRng 不能跨越 await
    let mut grade_values: Vec<f64> = {
        let mut rng = rand::rng();
        (0..student_ids.len() * grade_plan.len())
            .map(|_| f64::from(rng.random_range(50..100u32)))
            .collect()
    };
    for student_id in &student_ids {
        for (grade_type, date, subject) in grade_plan {
            storage
                .create_grade(CreateGradeRequest {
                    student_id: *student_id,
                    grade_type,
                    grade_value: grade_values.pop().unwrap_or(50.0),
                    date: demo_date(date)?,
                    subject,
                })
                .await?;
        }
    }

    for (student, description, disability, start_date) in IEPS {
        storage
            .create_iep(CreateIepRequest {
                student_id: student_ids[student],
                description: description.into(),
                disability: disability.into(),
                start_date: demo_date(start_date)?,
            })
            .await?;
    }

    for (student, class, text) in ACCOMMODATIONS {
        storage
            .create_accommodation(CreateAccommodationRequest {
                student_id: student_ids[student],
                lesson_plan_id: first_lessons[class],
                text: text.into(),
            })
            .await?;
    }

    info!(
        "Demo data seeded: {} teachers, {} students, {} classes",
        teacher_ids.len(),
        student_ids.len(),
        first_lessons.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::storage::create_storage;

    fn fast_argon2() -> Argon2Config {
        Argon2Config {
            memory_cost: 8 * 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    async fn memory_storage() -> Arc<dyn Storage> {
        create_storage(&DatabaseConfig {
            url: "sqlite::memory:".into(),
            pool_size: 1,
            timeout: 30,
        })
        .await
        .unwrap()
    }

    #[actix_web::test]
    async fn test_seed_fills_empty_database() {
        let storage = memory_storage().await;
        seed_demo_data(&storage, &fast_argon2()).await;

        assert_eq!(storage.count_teachers().await.unwrap(), 2);
        assert!(storage.get_student_by_id(10).await.unwrap().is_some());
        assert!(storage.get_class_by_id(2).await.unwrap().is_some());
        assert_eq!(storage.list_students_in_class(1).await.unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_seed_skips_database_with_teachers() {
        let storage = memory_storage().await;
        seed_demo_data(&storage, &fast_argon2()).await;
        seed_demo_data(&storage, &fast_argon2()).await;

        assert_eq!(storage.count_teachers().await.unwrap(), 2);
        assert!(storage.get_student_by_id(11).await.unwrap().is_none());
    }
}
