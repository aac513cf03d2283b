use serde::{Deserialize, Serialize};

/// A subject a profile studies
///
/// Subjects feed the subject count stat and the per-subject activity
/// breakdown; they carry no score of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique identifier
    pub id: String,
    /// Owning profile
    pub profile_id: String,
    /// Display name (also the key tasks reference via `Task::subject`)
    pub name: String,
    /// Ordered chapter titles of the subject's curriculum
    #[serde(default)]
    pub chapters: Vec<String>,
}
