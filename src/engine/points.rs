//! Points engine
//!
//! Computes two point totals per profile from the same task collection: the
//! all-time score and a today-only figure. Badges, streak bonuses and the
//! completion and exam bonuses are cumulative achievements and count only
//! toward the all-time score. Everything is recomputed from scratch on
//! every call; no state is carried between invocations.

use serde::Serialize;

use super::badges::BadgeState;
use super::clock::Clock;
use super::streak;
use crate::domain::{Exam, Task};

/// Points for one completed task
const POINTS_PER_COMPLETED_TASK: u32 = 10;
/// Points per studied minute of a completed task
const POINTS_PER_MINUTE: u32 = 1;
/// Points per day of the current streak
const POINTS_PER_STREAK_DAY: u32 = 25;
/// Cumulative streak milestones as (threshold days, bonus points)
const STREAK_MILESTONES: [(u32, u32); 3] = [(7, 200), (14, 400), (30, 1000)];
/// Completion-rate buckets as (minimum percent, bonus points); highest wins
const COMPLETION_BUCKETS: [(f64, u32); 4] = [(100.0, 500), (90.0, 200), (75.0, 100), (50.0, 50)];
/// Tasks a profile needs before the completion-rate bonus applies
const COMPLETION_BONUS_MIN_TASKS: u32 = 10;

/// Itemized composition of the all-time score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    /// 10 points per completed task
    pub task_points: u32,
    /// 1 point per studied minute
    pub duration_points: u32,
    /// Tier points of every unlocked badge
    pub badge_points: u32,
    /// Per-day streak points plus milestone bonuses
    pub streak_points: u32,
    /// Highest completion-rate bucket reached, if eligible
    pub completion_bonus: u32,
    /// Bonuses for recorded exam scores
    pub exam_bonus: u32,
}

/// Both point totals for one profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    /// Sum of every breakdown component
    pub all_time: u32,
    /// Task and minute points for today only
    pub daily: u32,
    /// The streak the streak points were computed from
    pub streak: u32,
    pub breakdown: PointsBreakdown,
}

/// Score one profile from its tasks, evaluated badges and exams
pub fn score(
    tasks: &[&Task],
    badges: &[BadgeState],
    exams: &[&Exam],
    clock: &Clock,
) -> PointsSummary {
    let today = clock.today();
    let mut breakdown = PointsBreakdown::default();
    let mut daily = 0u32;

    let mut total_tasks = 0u32;
    let mut completed_tasks = 0u32;
    for task in tasks {
        total_tasks += 1;
        if !task.completed {
            continue;
        }
        completed_tasks += 1;
        breakdown.task_points += POINTS_PER_COMPLETED_TASK;
        breakdown.duration_points += POINTS_PER_MINUTE * task.duration;
        if task.date == today {
            daily += POINTS_PER_COMPLETED_TASK + POINTS_PER_MINUTE * task.duration;
        }
    }

    breakdown.badge_points = badges.iter().map(BadgeState::points).sum();

    let current = streak::current_streak(tasks, clock);
    breakdown.streak_points = streak_points(current);
    breakdown.completion_bonus = completion_bonus(completed_tasks, total_tasks);
    breakdown.exam_bonus = exams.iter().map(|exam| exam_bonus(exam)).sum();

    PointsSummary {
        all_time: breakdown.task_points
            + breakdown.duration_points
            + breakdown.badge_points
            + breakdown.streak_points
            + breakdown.completion_bonus
            + breakdown.exam_bonus,
        daily,
        streak: current,
        breakdown,
    }
}

/// Per-day streak points plus every milestone the streak has reached
pub fn streak_points(streak: u32) -> u32 {
    let mut points = POINTS_PER_STREAK_DAY * streak;
    for (threshold, bonus) in STREAK_MILESTONES {
        if streak >= threshold {
            points += bonus;
        }
    }
    points
}

/// Single highest completion bucket, only once ten tasks exist
fn completion_bonus(completed: u32, total: u32) -> u32 {
    if total < COMPLETION_BONUS_MIN_TASKS {
        return 0;
    }
    let rate = f64::from(completed) / f64::from(total) * 100.0;
    COMPLETION_BUCKETS
        .iter()
        .find(|(min, _)| rate >= *min)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Bonus across every subject of an exam that has a recorded score
fn exam_bonus(exam: &Exam) -> u32 {
    exam.subjects
        .iter()
        .filter_map(|subject| subject.score)
        .map(score_bonus)
        .sum()
}

/// Bonus for one recorded exam score in percent
fn score_bonus(score: u8) -> u32 {
    match score {
        100.. => 300,
        95..=99 => 200,
        90..=94 => 100,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExamSubject;
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(date: NaiveDate, duration: u32, completed: bool) -> Task {
        Task {
            id: format!("t-{}-{}", date, duration),
            profile_id: "p1".to_string(),
            title: None,
            date,
            subject: None,
            duration,
            completed,
        }
    }

    fn scored_exam(scores: &[Option<u8>]) -> Exam {
        Exam {
            id: "e1".to_string(),
            profile_id: "p1".to_string(),
            name: "Finals".to_string(),
            subjects: scores
                .iter()
                .map(|score| ExamSubject {
                    subject: "Math".to_string(),
                    date: date(2026, 5, 4),
                    chapters: vec![],
                    key_points: None,
                    score: *score,
                })
                .collect(),
        }
    }

    #[test]
    fn test_streak_points_include_all_reached_milestones() {
        assert_eq!(streak_points(0), 0);
        assert_eq!(streak_points(6), 150);
        assert_eq!(streak_points(7), 7 * 25 + 200);
        assert_eq!(streak_points(14), 14 * 25 + 200 + 400);
        assert_eq!(streak_points(30), 2350);
    }

    #[test]
    fn test_completion_bonus_needs_ten_tasks() {
        assert_eq!(completion_bonus(9, 9), 0);
        assert_eq!(completion_bonus(10, 10), 500);
    }

    #[test]
    fn test_completion_bonus_takes_the_single_highest_bucket() {
        assert_eq!(completion_bonus(4, 10), 0);
        assert_eq!(completion_bonus(5, 10), 50);
        assert_eq!(completion_bonus(8, 10), 100);
        assert_eq!(completion_bonus(9, 10), 200);
        assert_eq!(completion_bonus(10, 10), 500);
    }

    #[test]
    fn test_score_bonus_brackets() {
        assert_eq!(score_bonus(89), 0);
        assert_eq!(score_bonus(90), 100);
        assert_eq!(score_bonus(94), 100);
        assert_eq!(score_bonus(95), 200);
        assert_eq!(score_bonus(99), 200);
        assert_eq!(score_bonus(100), 300);
    }

    #[test]
    fn test_daily_points_cover_only_todays_tasks() {
        let today = date(2026, 3, 10);
        let tasks = vec![
            task(today, 60, true),
            task(today, 30, false),
            task(today - Duration::days(1), 45, true),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();

        let summary = score(&refs, &[], &[], &Clock::fixed(today));

        assert_eq!(summary.daily, 10 + 60);
        assert_eq!(summary.breakdown.task_points, 20);
        assert_eq!(summary.breakdown.duration_points, 105);
    }

    #[test]
    fn test_exam_bonus_sums_over_scored_subjects() {
        let today = date(2026, 3, 10);
        let exam = scored_exam(&[Some(92), Some(100), None, Some(40)]);
        let exams = vec![&exam];

        let summary = score(&[], &[], &exams, &Clock::fixed(today));
        assert_eq!(summary.breakdown.exam_bonus, 100 + 300);
        assert_eq!(summary.all_time, 400);
    }

    #[test]
    fn test_no_activity_scores_zero() {
        let summary = score(&[], &[], &[], &Clock::fixed(date(2026, 3, 10)));
        assert_eq!(summary, PointsSummary::default());
    }
}
