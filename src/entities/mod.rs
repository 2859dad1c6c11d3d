pub mod batch;
pub mod course;
pub mod faculty;
pub mod faculty_subject;
pub mod lecture;
pub mod room;
pub mod session;
pub mod subject;
pub mod user;
