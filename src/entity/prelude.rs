//! 预导入模块，方便使用

pub use super::accommodations::{
    ActiveModel as AccommodationActiveModel, Entity as Accommodations,
    Model as AccommodationModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::ieps::{ActiveModel as IepActiveModel, Entity as Ieps, Model as IepModel};
pub use super::lesson_plans::{
    ActiveModel as LessonPlanActiveModel, Entity as LessonPlans, Model as LessonPlanModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
