use serde::{Deserialize, Serialize};

/// A student profile
///
/// Profiles are created and deleted by the storage layer; the engine only
/// ever reads them. All derived figures (streak, points, badges) are scoped
/// to one profile via its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// School class label (e.g. "10b"), if set
    #[serde(default)]
    pub class: Option<String>,
}
