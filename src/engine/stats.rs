//! Per-profile stats snapshot
//!
//! The ephemeral figures the badge predicates and the dashboard run on.
//! Recomputed from the task collection on every pass and never stored, so
//! the numbers cannot drift away from the data they describe.

use std::collections::HashMap;

use chrono::Duration;
use serde::Serialize;

use super::clock::Clock;
use crate::domain::Task;

/// Length of the rolling window behind `study_minutes_week`, in days
const WEEK_WINDOW_DAYS: i64 = 7;

/// Derived study figures for one profile on one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Minutes of completed study dated today
    pub study_minutes_today: u32,
    /// Minutes of completed study in the seven days ending today
    pub study_minutes_week: u32,
    /// Completed tasks dated today
    pub completed_today: u32,
    /// Completed share of all tasks in percent; zero when there are none
    pub completion_rate: f64,
    /// Number of subjects the profile tracks
    pub total_subjects: u32,
}

/// Build the stats snapshot for one profile's tasks
pub fn collect(tasks: &[&Task], total_subjects: usize, clock: &Clock) -> StatsSnapshot {
    let today = clock.today();
    let week_start = today - Duration::days(WEEK_WINDOW_DAYS - 1);

    let mut stats = StatsSnapshot {
        total_subjects: total_subjects as u32,
        ..Default::default()
    };

    let mut total = 0u32;
    let mut completed = 0u32;
    for task in tasks {
        total += 1;
        if !task.completed {
            continue;
        }
        completed += 1;
        if task.date == today {
            stats.study_minutes_today += task.duration;
            stats.completed_today += 1;
        }
        if task.date >= week_start && task.date <= today {
            stats.study_minutes_week += task.duration;
        }
    }

    if total > 0 {
        stats.completion_rate = f64::from(completed) / f64::from(total) * 100.0;
    }

    stats
}

/// Completed minutes grouped by subject name, busiest subject first
///
/// Tasks without a subject are left out. Ties break alphabetically so the
/// ordering is stable across runs.
pub fn minutes_by_subject(tasks: &[&Task]) -> Vec<(String, u32)> {
    let mut minutes: HashMap<&str, u32> = HashMap::new();
    for task in tasks.iter().filter(|t| t.completed) {
        if let Some(subject) = task.subject.as_deref() {
            *minutes.entry(subject).or_default() += task.duration;
        }
    }

    let mut rows: Vec<(String, u32)> = minutes
        .into_iter()
        .map(|(subject, total)| (subject.to_string(), total))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
