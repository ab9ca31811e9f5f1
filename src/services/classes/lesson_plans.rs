//! 班级课程计划与调整措施查询

use actix_web::{HttpRequest, HttpResponse};

use super::ClassService;
use crate::errors::{ApiError, ApiResult};
use crate::models::EntityKind;
use crate::models::classes::responses::{
    AccommodationSummary, ClassEnvelope, ClassLessonPlanAccommodations, ClassLessonPlans,
    IepSummary, LessonPlanAccommodations, LessonPlanSummary, StudentAccommodation,
};

pub async fn list_class_lesson_plans(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    service.require_class(storage.as_ref(), class_id).await?;

    let lesson_plans = storage
        .list_lesson_plans_by_class(class_id)
        .await?
        .into_iter()
        .map(LessonPlanSummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(ClassEnvelope::new(ClassLessonPlans {
        id: class_id,
        lesson_plans,
    })))
}

pub async fn list_lesson_plan_accommodations(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    lesson_plan_id: i64,
) -> ApiResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let class = service.require_class(storage.as_ref(), class_id).await?;

    // 课程计划必须属于该班级
    let lesson_plan = storage
        .get_lesson_plan_by_id(lesson_plan_id)
        .await?
        .filter(|plan| plan.class_id == class.id)
        .ok_or_else(|| ApiError::not_found(EntityKind::LessonPlan, lesson_plan_id))?;

    let accommodations = storage
        .list_accommodations_by_lesson_plan(lesson_plan.id)
        .await?;
    let student_ids: Vec<i64> = accommodations.iter().map(|a| a.student_id).collect();
    let students = storage.list_students_by_ids(&student_ids).await?;
    let ieps = storage.first_ieps_by_students(&student_ids).await?;

    let student_accommodations = accommodations
        .into_iter()
        .filter_map(|accommodation| {
            let student = students.get(&accommodation.student_id)?;
            Some(StudentAccommodation {
                id: student.id,
                first_name: student.first_name.clone(),
                last_name: student.last_name.clone(),
                iep: ieps.get(&student.id).cloned().map(IepSummary::from),
                accommodation: AccommodationSummary {
                    text: accommodation.text,
                    id: accommodation.id,
                },
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ClassEnvelope::new(ClassLessonPlanAccommodations {
        id: class_id,
        lesson_plan: LessonPlanAccommodations {
            id: lesson_plan.id,
            student_accommodations,
        },
    })))
}
