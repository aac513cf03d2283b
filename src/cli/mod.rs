//! CLI command implementations

pub mod badges;
pub mod exams;
pub mod init;
pub mod leaderboard;
pub mod overview;

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use studyquest::config::Config;
use studyquest::store::Snapshot;
use studyquest::Profile;

/// Load the snapshot from the CLI override or the configured path
pub(crate) fn load_snapshot(config: &Config, data_override: Option<&Path>) -> Result<Snapshot> {
    let path = data_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.data_path());
    Snapshot::load(&path)
        .with_context(|| format!("Failed to load snapshot: {}", path.display()))
}

/// Resolve a profile argument (id or name) against the snapshot
pub(crate) fn resolve_profile<'a>(snapshot: &'a Snapshot, key: &str) -> Result<&'a Profile> {
    snapshot
        .profile(key)
        .ok_or_else(|| anyhow!("No profile with id or name '{}' in snapshot", key))
}
