//! 路由层端到端测试，使用内存 SQLite

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header::ContentType};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use super::configure_routes;
use crate::config::DatabaseConfig;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::storage::{Storage, create_storage};
use crate::utils::json_error_handler;

macro_rules! init_app {
    () => {{
        let storage = create_storage(&DatabaseConfig {
            url: "sqlite::memory:".into(),
            pool_size: 1,
            timeout: 30,
        })
        .await
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_routes),
        )
        .await;
        (app, storage)
    }};
}

macro_rules! call {
    ($app:expr, $method:ident, $uri:expr) => {{
        let req = test::TestRequest::$method().uri($uri).to_request();
        read_response(test::call_service(&$app, req).await).await
    }};
    ($app:expr, $method:ident, $uri:expr, $body:expr) => {{
        let req = test::TestRequest::$method()
            .uri($uri)
            .set_json($body)
            .to_request();
        read_response(test::call_service(&$app, req).await).await
    }};
}

// 教师 1、班级 1、学生 1 和 2（均已选课）
macro_rules! seed_class {
    ($app:expr, $storage:expr) => {{
        $storage
            .create_teacher(CreateTeacherRequest {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@school.test".into(),
                password: "not-a-real-hash".into(),
            })
            .await
            .unwrap();
        let body = json!({ "teacher_id": 1, "name": "English 101", "school_year": "2022-2023" });
        assert_eq!(call!($app, post, "/class", body).0, StatusCode::NO_CONTENT);
        for (first, last) in [("Jane", "Doe"), ("John", "Roe")] {
            let body = json!({ "first_name": first, "last_name": last });
            assert_eq!(call!($app, post, "/student", body).0, StatusCode::NO_CONTENT);
        }
        for student_id in [1, 2] {
            let body = json!({ "class_id": 1, "student_id": student_id });
            assert_eq!(call!($app, post, "/enrollment", body).0, StatusCode::NO_CONTENT);
        }
    }};
}

async fn read_response<B: MessageBody>(resp: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    if bytes.is_empty() {
        (status, Value::Null)
    } else {
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

fn lesson_plan_body(class_id: i64) -> Value {
    json!({
        "class_id": class_id,
        "name": "Lesson 1",
        "date": "2022-09-01",
        "overview": "Intro",
        "objective": "Learn",
        "subject": "Math",
    })
}

#[actix_web::test]
async fn test_root_greeting() {
    let (app, _storage) = init_app!();
    let (status, body) = call!(app, get, "/");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hello": "world" }));
}

#[actix_web::test]
async fn test_create_student_and_missing_field() {
    let (app, storage) = init_app!();

    let (status, body) = call!(app, post, "/student", json!({ "first_name": "Jane", "last_name": "Doe" }));
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    let student = storage.get_student_by_id(1).await.unwrap().unwrap();
    assert_eq!(student.first_name, "Jane");

    let (status, body) = call!(app, post, "/student", json!({ "first_name": "Jane" }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "MissingField");
    assert_eq!(body["data"]["field"], "last_name");
}

#[actix_web::test]
async fn test_malformed_json_is_rejected() {
    let (app, _storage) = init_app!();
    let req = test::TestRequest::post()
        .uri("/student")
        .insert_header(ContentType::json())
        .set_payload("{\"first_name\": ")
        .to_request();
    let (status, body) = read_response(test::call_service(&app, req).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "InvalidJson");
}

#[actix_web::test]
async fn test_class_school_year_validation() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    for bad in ["2022-2024", "1899-1900", "2022/2023", "22-23"] {
        let body = json!({ "teacher_id": 1, "name": "Math", "school_year": bad });
        let (status, body) = call!(app, post, "/class", body);
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(body["data"]["error"], "InvalidSchoolYear", "{bad}");
    }
    assert!(storage.get_class_by_id(2).await.unwrap().is_none());

    let body = json!({ "teacher_id": 1, "name": "Math", "school_year": "2099-2100" });
    assert_eq!(call!(app, post, "/class", body).0, StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_enrollment_requires_existing_references() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    let (status, body) = call!(app, post, "/enrollment", json!({ "class_id": 1, "student_id": 99 }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "ForeignKeyNotFound");
    assert_eq!(body["data"]["entity"], "Student");
    assert_eq!(body["data"]["id"], 99);

    let (status, body) = call!(app, post, "/enrollment", json!({ "class_id": 42, "student_id": 1 }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["entity"], "Class");

    assert!(storage.get_enrollment_by_id(3).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_invalid_grade_type_is_rejected() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    let body = json!({
        "student_id": 1,
        "grade_type": "Essay",
        "grade_value": 90,
        "date": "2022-09-01",
        "subject": "Math",
    });
    let (status, body) = call!(app, post, "/grade", body);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "InvalidEnumValue");
    assert_eq!(body["data"]["enum_name"], "GradeType");
    assert!(storage.get_grade_by_id(1).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_update_student_keeps_untouched_fields() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    let (status, _) = call!(app, put, "/student/1", json!({ "first_name": "Janet" }));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let student = storage.get_student_by_id(1).await.unwrap().unwrap();
    assert_eq!(student.first_name, "Janet");
    assert_eq!(student.last_name, "Doe");

    // 假值字段不会覆盖原值
    let (status, _) = call!(app, put, "/student/1", json!({ "first_name": "", "last_name": null }));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let student = storage.get_student_by_id(1).await.unwrap().unwrap();
    assert_eq!(student.first_name, "Janet");
    assert_eq!(student.last_name, "Doe");
}

#[actix_web::test]
async fn test_update_grade_ignores_zero_value() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    let body = json!({
        "student_id": 1,
        "grade_type": "Quiz",
        "grade_value": 88.5,
        "date": "2022-09-01",
        "subject": "Reading & Writing",
    });
    assert_eq!(call!(app, post, "/grade", body).0, StatusCode::NO_CONTENT);

    let (status, _) = call!(app, put, "/grade/1", json!({ "grade_value": 0, "grade_type": "Test" }));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let grade = storage.get_grade_by_id(1).await.unwrap().unwrap();
    assert_eq!(grade.grade_value, 88.5);
    assert_eq!(grade.grade_type.to_string(), "Test");
}

#[actix_web::test]
async fn test_missing_and_unparsable_ids_are_not_found() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    let (status, body) = call!(app, put, "/student/999", json!({ "first_name": "X" }));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["error"], "ResourceNotFound");

    assert_eq!(call!(app, delete, "/grade/5").0, StatusCode::NOT_FOUND);
    assert_eq!(call!(app, delete, "/class/abc").0, StatusCode::NOT_FOUND);
    assert_eq!(call!(app, get, "/class/9/students").0, StatusCode::NOT_FOUND);
    assert_eq!(call!(app, get, "/class/x/grades").0, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_rejects_unknown_reference() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);
    assert_eq!(call!(app, post, "/lesson_plan", lesson_plan_body(1)).0, StatusCode::NO_CONTENT);

    let (status, body) = call!(app, put, "/lesson_plan/1", json!({ "class_id": 77 }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"]["error"], "ForeignKeyNotFound");
    let plan = storage.get_lesson_plan_by_id(1).await.unwrap().unwrap();
    assert_eq!(plan.class_id, 1);
}

#[actix_web::test]
async fn test_delete_student_cascades() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);
    assert_eq!(call!(app, post, "/lesson_plan", lesson_plan_body(1)).0, StatusCode::NO_CONTENT);

    let grade = json!({
        "student_id": 1,
        "grade_type": "Test",
        "grade_value": 91,
        "date": "2022-10-01",
        "subject": "Math",
    });
    assert_eq!(call!(app, post, "/grade", grade).0, StatusCode::NO_CONTENT);
    let iep = json!({
        "student_id": 1,
        "description": "Reading support",
        "disability": "Dyslexia",
        "start_date": "2022-09-01",
    });
    assert_eq!(call!(app, post, "/IEP", iep).0, StatusCode::NO_CONTENT);
    let accommodation = json!({ "student_id": 1, "lesson_plan_id": 1, "text": "Extra time" });
    assert_eq!(call!(app, post, "/accommodation", accommodation).0, StatusCode::NO_CONTENT);

    assert_eq!(call!(app, delete, "/student/1").0, StatusCode::NO_CONTENT);

    assert!(storage.get_student_by_id(1).await.unwrap().is_none());
    assert!(storage.get_enrollment_by_id(1).await.unwrap().is_none());
    assert!(storage.get_grade_by_id(1).await.unwrap().is_none());
    assert!(storage.get_iep_by_id(1).await.unwrap().is_none());
    assert!(storage.get_accommodation_by_id(1).await.unwrap().is_none());
    // 其他学生与课程计划不受影响
    assert!(storage.get_enrollment_by_id(2).await.unwrap().is_some());
    assert!(storage.get_lesson_plan_by_id(1).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_delete_teacher_keeps_class() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    assert_eq!(call!(app, delete, "/teacher/1").0, StatusCode::NO_CONTENT);
    let class = storage.get_class_by_id(1).await.unwrap().unwrap();
    assert_eq!(class.teacher_id, None);
    assert_eq!(call!(app, get, "/class/1/students").0, StatusCode::OK);
}

#[actix_web::test]
async fn test_delete_class_cascades() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);
    assert_eq!(call!(app, post, "/lesson_plan", lesson_plan_body(1)).0, StatusCode::NO_CONTENT);
    let accommodation = json!({ "student_id": 2, "lesson_plan_id": 1, "text": "Seat near board" });
    assert_eq!(call!(app, post, "/accommodation", accommodation).0, StatusCode::NO_CONTENT);

    assert_eq!(call!(app, delete, "/class/1").0, StatusCode::NO_CONTENT);
    assert!(storage.get_enrollment_by_id(1).await.unwrap().is_none());
    assert!(storage.get_lesson_plan_by_id(1).await.unwrap().is_none());
    assert!(storage.get_accommodation_by_id(1).await.unwrap().is_none());
    assert!(storage.get_student_by_id(2).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_class_roster_shape() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    for (description, date) in [("First plan", "2022-09-01"), ("Second plan", "2023-01-10")] {
        let iep = json!({
            "student_id": 2,
            "description": description,
            "disability": "ADHD",
            "start_date": date,
        });
        assert_eq!(call!(app, post, "/IEP", iep).0, StatusCode::NO_CONTENT);
    }

    let (status, body) = call!(app, get, "/class/1/students");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "Class": {
                "id": 1,
                "students": [
                    { "id": 1, "first_name": "Jane", "last_name": "Doe", "iep": null },
                    {
                        "id": 2,
                        "first_name": "John",
                        "last_name": "Roe",
                        "iep": {
                            "description": "First plan",
                            "disability": "ADHD",
                        },
                    },
                ],
            }
        })
    );
}

#[actix_web::test]
async fn test_class_grades_shape() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);

    let grade = json!({
        "student_id": 2,
        "grade_type": "Assignment",
        "grade_value": 75,
        "date": "2022-11-02",
        "subject": "Reading & Writing",
    });
    assert_eq!(call!(app, post, "/grade", grade).0, StatusCode::NO_CONTENT);

    let (status, body) = call!(app, get, "/class/1/grades");
    assert_eq!(status, StatusCode::OK);
    let students = &body["Class"]["students"];
    assert_eq!(students[0]["grades"], json!([]));
    assert_eq!(students[1]["first_name"], "John");
    assert_eq!(
        students[1]["grades"][0],
        json!({
            "id": 1,
            "subject": "Reading & Writing",
            "grade_type": "Assignment",
            "date": "2022-11-02",
            "grade_value": 75.0,
        })
    );
}

#[actix_web::test]
async fn test_class_lesson_plans_and_accommodations() {
    let (app, storage) = init_app!();
    seed_class!(app, storage);
    assert_eq!(call!(app, post, "/lesson_plan", lesson_plan_body(1)).0, StatusCode::NO_CONTENT);
    let accommodation = json!({ "student_id": 1, "lesson_plan_id": 1, "text": "Extra time" });
    assert_eq!(call!(app, post, "/accommodation", accommodation).0, StatusCode::NO_CONTENT);

    let (status, body) = call!(app, get, "/class/1/lesson_plans");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Class"]["lesson_plans"][0]["subject"], "Math");
    assert_eq!(body["Class"]["lesson_plans"][0]["date"], "2022-09-01");

    let (status, body) = call!(app, get, "/class/1/lesson_plans/1/accommodations");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "Class": {
                "id": 1,
                "lesson_plan": {
                    "id": 1,
                    "student_accommodations": [{
                        "id": 1,
                        "first_name": "Jane",
                        "last_name": "Doe",
                        "iep": null,
                        "accommodation": { "text": "Extra time", "id": 1 },
                    }],
                },
            }
        })
    );

    // 课程计划不属于该班级
    let body = json!({ "teacher_id": 1, "name": "Science", "school_year": "2022-2023" });
    assert_eq!(call!(app, post, "/class", body).0, StatusCode::NO_CONTENT);
    let (status, body) = call!(app, get, "/class/2/lesson_plans/1/accommodations");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["entity"], "LessonPlan");
}

#[actix_web::test]
async fn test_teacher_email_conflict() {
    let (app, storage) = init_app!();

    let ada = json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@school.test",
        "password": "secret",
    });
    assert_eq!(call!(app, post, "/teacher", ada.clone()).0, StatusCode::NO_CONTENT);
    let teacher = storage.get_teacher_by_id(1).await.unwrap().unwrap();
    assert!(teacher.password_hash.starts_with("$argon2id$"));

    let (status, body) = call!(app, post, "/teacher", ada);
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["data"]["error"], "EmailAlreadyExists");

    let grace = json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@school.test",
        "password": "secret",
    });
    assert_eq!(call!(app, post, "/teacher", grace).0, StatusCode::NO_CONTENT);
    let (status, _) = call!(app, put, "/teacher/2", json!({ "email": "ada@school.test" }));
    assert_eq!(status, StatusCode::CONFLICT);

    // 使用自己的邮箱更新不算冲突
    let (status, _) = call!(app, put, "/teacher/2", json!({ "email": "grace@school.test", "last_name": "Murray" }));
    assert_eq!(status, StatusCode::NO_CONTENT);
    let teacher = storage.get_teacher_by_id(2).await.unwrap().unwrap();
    assert_eq!(teacher.last_name, "Murray");
}
