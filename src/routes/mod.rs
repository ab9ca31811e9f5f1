pub mod accommodations;

pub mod classes;

pub mod enrollments;

pub mod grades;

pub mod ieps;

pub mod lesson_plans;

pub mod students;

pub mod system;

pub mod teachers;

#[cfg(test)]
mod tests;

use actix_web::web;

pub use accommodations::configure_accommodations_routes;
pub use classes::configure_classes_routes;
pub use enrollments::configure_enrollments_routes;
pub use grades::configure_grades_routes;
pub use ieps::configure_ieps_routes;
pub use lesson_plans::configure_lesson_plans_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_teachers_routes)
        .configure(configure_students_routes)
        .configure(configure_classes_routes)
        .configure(configure_enrollments_routes)
        .configure(configure_lesson_plans_routes)
        .configure(configure_grades_routes)
        .configure(configure_ieps_routes)
        .configure(configure_accommodations_routes);
}
