//! Core domain types for StudyQuest

mod exam;
mod profile;
mod subject;
mod task;

pub use exam::{Chapter, ChapterStatus, Exam, ExamSubject};
pub use profile::Profile;
pub use subject::Subject;
pub use task::Task;
