//! 班级花名册查询

use actix_web::{HttpRequest, HttpResponse};
use std::collections::HashMap;

use super::ClassService;
use crate::errors::ApiResult;
use crate::models::classes::responses::{
    ClassEnvelope, ClassGrades, ClassStudents, GradeSummary, IepSummary, RosterStudent,
    StudentGrades,
};
use crate::models::grades::entities::Grade;

pub async fn list_class_students(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    service.require_class(storage.as_ref(), class_id).await?;

    let students = storage.list_students_in_class(class_id).await?;
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let ieps = storage.first_ieps_by_students(&ids).await?;

    let students = students
        .into_iter()
        .map(|student| {
            let iep = ieps.get(&student.id).cloned().map(IepSummary::from);
            RosterStudent::new(student, iep)
        })
        .collect();

    Ok(HttpResponse::Ok().json(ClassEnvelope::new(ClassStudents {
        id: class_id,
        students,
    })))
}

pub async fn list_class_grades(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    service.require_class(storage.as_ref(), class_id).await?;

    let students = storage.list_students_in_class(class_id).await?;
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();

    let mut grades_by_student: HashMap<i64, Vec<Grade>> = HashMap::new();
    for grade in storage.list_grades_by_students(&ids).await? {
        grades_by_student
            .entry(grade.student_id)
            .or_default()
            .push(grade);
    }

    let students = students
        .into_iter()
        .map(|student| StudentGrades {
            grades: grades_by_student
                .get(&student.id)
                .map(|grades| grades.iter().cloned().map(GradeSummary::from).collect())
                .unwrap_or_default(),
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ClassEnvelope::new(ClassGrades {
        id: class_id,
        students,
    })))
}
