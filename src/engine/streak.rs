//! Study streak calculation
//!
//! A day counts toward the streak when at least one task dated that day was
//! completed. The streak is the run of consecutive counting days ending
//! today, with one grace rule: while today has no completed task yet, a run
//! that ended yesterday still counts in full. The value is recomputed from
//! the task collection on every pass; nothing is carried between calls.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use super::clock::Clock;
use crate::domain::Task;

/// Current consecutive-day streak for one profile's tasks
pub fn current_streak(tasks: &[&Task], clock: &Clock) -> u32 {
    let studied: HashSet<NaiveDate> = tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.date)
        .collect();
    if studied.is_empty() {
        return 0;
    }

    let mut day = clock.today();
    // Today not counting yet is not a gap; the run may still end yesterday.
    if !studied.contains(&day) {
        day -= Duration::days(1);
    }

    let mut streak = 0;
    while studied.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed_on(days: &[NaiveDate]) -> Vec<Task> {
        days.iter()
            .enumerate()
            .map(|(i, &day)| Task {
                id: format!("t{}", i),
                profile_id: "p1".to_string(),
                title: None,
                date: day,
                subject: None,
                duration: 30,
                completed: true,
            })
            .collect()
    }

    fn streak_for(tasks: &[Task], today: NaiveDate) -> u32 {
        let refs: Vec<&Task> = tasks.iter().collect();
        current_streak(&refs, &Clock::fixed(today))
    }

    #[test]
    fn test_no_completed_tasks_means_no_streak() {
        assert_eq!(streak_for(&[], date(2026, 3, 10)), 0);

        let mut tasks = completed_on(&[date(2026, 3, 10)]);
        tasks[0].completed = false;
        assert_eq!(streak_for(&tasks, date(2026, 3, 10)), 0);
    }

    #[test]
    fn test_counts_consecutive_days_ending_today() {
        let today = date(2026, 3, 10);
        let tasks = completed_on(&[
            today,
            today - Duration::days(1),
            today - Duration::days(2),
        ]);
        assert_eq!(streak_for(&tasks, today), 3);
    }

    #[test]
    fn test_run_ending_yesterday_still_counts() {
        let today = date(2026, 3, 10);
        let tasks = completed_on(&[today - Duration::days(1), today - Duration::days(2)]);
        assert_eq!(streak_for(&tasks, today), 2);
    }

    #[test]
    fn test_run_ending_before_yesterday_is_broken() {
        let today = date(2026, 3, 10);
        let tasks = completed_on(&[
            today - Duration::days(2),
            today - Duration::days(3),
            today - Duration::days(4),
        ]);
        assert_eq!(streak_for(&tasks, today), 0);
    }

    #[test]
    fn test_gaps_cut_the_run_short() {
        let today = date(2026, 3, 10);
        let tasks = completed_on(&[
            today,
            today - Duration::days(1),
            // gap on day 2
            today - Duration::days(3),
            today - Duration::days(4),
        ]);
        assert_eq!(streak_for(&tasks, today), 2);
    }

    #[test]
    fn test_several_tasks_on_one_day_count_once() {
        let today = date(2026, 3, 10);
        let tasks = completed_on(&[today, today, today - Duration::days(1)]);
        assert_eq!(streak_for(&tasks, today), 2);
    }

    #[test]
    fn test_future_dated_tasks_do_not_extend_the_streak() {
        let today = date(2026, 3, 10);
        let tasks = completed_on(&[today, today + Duration::days(1)]);
        assert_eq!(streak_for(&tasks, today), 1);
    }
}
