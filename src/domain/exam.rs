use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Completion state of a single chapter inside an exam subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChapterStatus {
    /// Not touched yet
    #[default]
    Pending,
    /// Partially prepared
    Started,
    /// Fully prepared
    Completed,
}

impl ChapterStatus {
    /// The state name as stored in a snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterStatus::Pending => "pending",
            ChapterStatus::Started => "started",
            ChapterStatus::Completed => "completed",
        }
    }

    /// Parse a stored state name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ChapterStatus::Pending),
            "started" => Some(ChapterStatus::Started),
            "completed" => Some(ChapterStatus::Completed),
            _ => None,
        }
    }

    /// The next state in the pending, started, completed cycle
    pub fn next(self) -> Self {
        match self {
            ChapterStatus::Pending => ChapterStatus::Started,
            ChapterStatus::Started => ChapterStatus::Completed,
            ChapterStatus::Completed => ChapterStatus::Pending,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ChapterStatus::Pending => "Pending",
            ChapterStatus::Started => "Started",
            ChapterStatus::Completed => "Completed",
        }
    }
}

// Unknown state names in a snapshot degrade to pending instead of failing
// the whole load.
impl From<String> for ChapterStatus {
    fn from(s: String) -> Self {
        ChapterStatus::from_str(&s).unwrap_or_else(|| {
            warn!("Unknown chapter status '{}', treating as pending", s);
            ChapterStatus::Pending
        })
    }
}

/// A chapter to prepare for one exam subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter title
    pub name: String,
    /// Preparation state; missing on the wire means pending
    #[serde(default)]
    pub status: ChapterStatus,
}

/// One subject inside an exam, with its own date and chapter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSubject {
    /// Subject name
    pub subject: String,
    /// Day the subject is examined (ISO `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Chapters to prepare for this subject
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    /// Free-form revision notes
    #[serde(default)]
    pub key_points: Option<String>,
    /// Result in percent, recorded once graded
    #[serde(default)]
    pub score: Option<u8>,
}

/// An exam spanning one or more subjects
///
/// Multi-subject exams (e.g. "Abitur mocks") have one date per subject; the
/// urgency of the whole exam is driven by the soonest upcoming one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    /// Unique identifier
    pub id: String,
    /// Owning profile
    pub profile_id: String,
    /// Display name
    pub name: String,
    /// The examined subjects with their dates
    #[serde(default)]
    pub subjects: Vec<ExamSubject>,
}

impl Exam {
    /// All chapters pooled across every subject of the exam
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> + '_ {
        self.subjects.iter().flat_map(|s| s.chapters.iter())
    }
}
