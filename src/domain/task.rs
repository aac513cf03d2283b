use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single study task on one calendar day
///
/// Completed tasks feed streaks, study-time totals and points. Incomplete
/// tasks only widen the completion-rate denominator. Any missing optional
/// field deserializes to a harmless default so that a hand-edited snapshot
/// still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Owning profile
    pub profile_id: String,
    /// Short label shown in lists
    #[serde(default)]
    pub title: Option<String>,
    /// Calendar day the task belongs to (ISO `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Subject name, if the task is tied to one
    #[serde(default)]
    pub subject: Option<String>,
    /// Studied minutes; absent on the wire means zero
    #[serde(default)]
    pub duration: u32,
    /// Whether the task was completed
    #[serde(default)]
    pub completed: bool,
}
