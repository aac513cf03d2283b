//! Leaderboard ranking
//!
//! Runs the stats, badge and points pipeline for every profile and keeps
//! the top five for the selected mode. The sort is stable, so tied
//! profiles stay in snapshot order.

use serde::Serialize;

use super::badges;
use super::clock::Clock;
use super::points::{self, PointsSummary};
use super::stats;
use crate::domain::{Exam, Profile, Subject, Task};

/// Number of entries the leaderboard keeps
pub const LEADERBOARD_SIZE: usize = 5;

/// Which point total drives the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardMode {
    #[default]
    AllTime,
    Daily,
}

impl LeaderboardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllTime => "all-time",
            Self::Daily => "daily",
        }
    }

    /// Parse a mode name as typed on the command line
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all-time" | "alltime" | "all" => Some(Self::AllTime),
            "daily" | "today" => Some(Self::Daily),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AllTime => "All-time",
            Self::Daily => "Today",
        }
    }
}

/// One ranked row, denormalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position after sorting
    pub rank: u32,
    pub profile_id: String,
    pub name: String,
    pub class: Option<String>,
    /// The total selected by the ranking mode
    pub points: u32,
    /// Both totals, so the other one can be shown as a secondary figure
    pub all_time_points: u32,
    pub daily_points: u32,
    pub streak: u32,
    pub badges_unlocked: u32,
}

/// Rank all profiles and keep the top five
pub fn rank(
    profiles: &[Profile],
    tasks: &[Task],
    subjects: &[Subject],
    exams: &[Exam],
    mode: LeaderboardMode,
    clock: &Clock,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = profiles
        .iter()
        .map(|profile| {
            let own_tasks: Vec<&Task> = tasks
                .iter()
                .filter(|t| t.profile_id == profile.id)
                .collect();
            let own_subjects = subjects
                .iter()
                .filter(|s| s.profile_id == profile.id)
                .count();
            let own_exams: Vec<&Exam> = exams
                .iter()
                .filter(|e| e.profile_id == profile.id)
                .collect();

            let snapshot = stats::collect(&own_tasks, own_subjects, clock);
            let badge_states = badges::evaluate(&snapshot);
            let summary = points::score(&own_tasks, &badge_states, &own_exams, clock);
            let unlocked = badge_states.iter().filter(|b| b.unlocked).count() as u32;

            entry_for(profile, &summary, unlocked, mode)
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries.truncate(LEADERBOARD_SIZE);
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = (index + 1) as u32;
    }
    entries
}

fn entry_for(
    profile: &Profile,
    summary: &PointsSummary,
    badges_unlocked: u32,
    mode: LeaderboardMode,
) -> LeaderboardEntry {
    let points = match mode {
        LeaderboardMode::AllTime => summary.all_time,
        LeaderboardMode::Daily => summary.daily,
    };
    LeaderboardEntry {
        rank: 0,
        profile_id: profile.id.clone(),
        name: profile.name.clone(),
        class: profile.class.clone(),
        points,
        all_time_points: summary.all_time,
        daily_points: summary.daily,
        streak: summary.streak,
        badges_unlocked,
    }
}
