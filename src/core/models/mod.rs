//! Data models for `CurricuForge`

pub mod document;
pub mod level;
pub mod request;
pub mod topic_set;

pub use document::{CurriculumDocument, WeekEntry};
pub use level::Level;
pub use request::CourseRequest;
pub use topic_set::TopicSet;
