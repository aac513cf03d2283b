//! Snapshot store
//!
//! Reads and writes the single JSON document the app keeps its collections
//! in. The engine never touches this module; it is handed the loaded
//! collections as read-only slices. Loading is deliberately lenient so a
//! hand-edited snapshot still works: missing optional fields fall back to
//! defaults during deserialization, and [`Snapshot::sanitize`] patches the
//! few values serde cannot range-check, with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Exam, Profile, Subject, Task};

/// Errors raised while loading or saving a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full data snapshot handed to the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub profiles: Vec<Profile>,
    pub tasks: Vec<Task>,
    pub subjects: Vec<Subject>,
    pub exams: Vec<Exam>,
}

impl Snapshot {
    /// Load a snapshot from a file
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        debug!(
            "Loaded snapshot from {}: {} profiles, {} tasks, {} subjects, {} exams",
            path.display(),
            snapshot.profiles.len(),
            snapshot.tasks.len(),
            snapshot.subjects.len(),
            snapshot.exams.len()
        );
        Ok(snapshot)
    }

    /// Parse and sanitize a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let mut snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.sanitize();
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Patch values the lenient wire format lets through
    ///
    /// Records are never dropped here; out-of-range fields are clamped and
    /// inconsistencies logged so the engine can stay oblivious to them.
    fn sanitize(&mut self) {
        for exam in &mut self.exams {
            for subject in &mut exam.subjects {
                if let Some(score) = subject.score {
                    if score > 100 {
                        warn!(
                            "Clamping exam score {} to 100 for '{}' / {}",
                            score, exam.name, subject.subject
                        );
                        subject.score = Some(100);
                    }
                }
            }
        }

        let orphaned = self
            .tasks
            .iter()
            .filter(|task| self.profile_by_id(&task.profile_id).is_none())
            .count();
        if orphaned > 0 {
            warn!("Snapshot contains {} tasks for unknown profiles", orphaned);
        }
    }

    fn profile_by_id(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Find a profile by id, or by name ignoring case
    pub fn profile(&self, key: &str) -> Option<&Profile> {
        self.profile_by_id(key)
            .or_else(|| self.profiles.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
    }

    /// All tasks belonging to one profile
    pub fn tasks_for(&self, profile_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.profile_id == profile_id)
            .collect()
    }

    /// All subjects belonging to one profile
    pub fn subjects_for(&self, profile_id: &str) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.profile_id == profile_id)
            .collect()
    }

    /// All exams belonging to one profile
    pub fn exams_for(&self, profile_id: &str) -> Vec<&Exam> {
        self.exams
            .iter()
            .filter(|e| e.profile_id == profile_id)
            .collect()
    }
}
