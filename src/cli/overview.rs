//! Overview command implementation

use anyhow::Result;
use std::path::Path;

use studyquest::config::Config;
use studyquest::engine::clock::Clock;
use studyquest::engine::{badges, points, stats, urgency};

/// Show one profile's stats, streak, points and badge summary
pub fn overview_command(
    config: &Config,
    data: Option<&Path>,
    profile_key: &str,
    json: bool,
) -> Result<()> {
    let snapshot = super::load_snapshot(config, data)?;
    let profile = super::resolve_profile(&snapshot, profile_key)?;

    let clock = Clock::for_zone(config.home_zone());
    let tasks = snapshot.tasks_for(&profile.id);
    let subjects = snapshot.subjects_for(&profile.id);
    let exams = snapshot.exams_for(&profile.id);

    let profile_stats = stats::collect(&tasks, subjects.len(), &clock);
    let badge_states = badges::evaluate(&profile_stats);
    let summary = points::score(&tasks, &badge_states, &exams, &clock);
    let outlook = urgency::categorize(&exams, &clock);
    let by_subject = stats::minutes_by_subject(&tasks);

    if json {
        let records: Vec<_> = badge_states.iter().map(|b| b.to_record()).collect();
        let value = serde_json::json!({
            "profile": profile,
            "date": clock.today(),
            "stats": profile_stats,
            "points": summary,
            "badges": records,
            "minutesBySubject": by_subject,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &profile.class {
        Some(class) => println!("{} ({}) on {}\n", profile.name, class, clock.today()),
        None => println!("{} on {}\n", profile.name, clock.today()),
    }

    println!(
        "  Today:      {} min studied, {} tasks completed",
        profile_stats.study_minutes_today, profile_stats.completed_today
    );
    println!("  This week:  {} min", profile_stats.study_minutes_week);
    println!(
        "  Completion: {:.0}% ({} subjects tracked)",
        profile_stats.completion_rate, profile_stats.total_subjects
    );
    println!("  Streak:     {} days", summary.streak);
    println!();

    println!(
        "  Points:     {} all-time / {} today",
        summary.all_time, summary.daily
    );
    let b = &summary.breakdown;
    println!("    tasks       {}", b.task_points);
    println!("    minutes     {}", b.duration_points);
    println!("    badges      {}", b.badge_points);
    println!("    streak      {}", b.streak_points);
    if b.completion_bonus > 0 {
        println!("    completion  {}", b.completion_bonus);
    }
    if b.exam_bonus > 0 {
        println!("    exams       {}", b.exam_bonus);
    }
    println!();

    let unlocked = badge_states.iter().filter(|b| b.unlocked).count();
    println!(
        "  Badges:     {} of {} unlocked",
        unlocked,
        badge_states.len()
    );

    if !by_subject.is_empty() {
        println!("  Top subjects:");
        for (subject, minutes) in by_subject.iter().take(3) {
            println!("    {} - {} min", subject, minutes);
        }
    }

    if let Some(next) = outlook
        .urgent
        .first()
        .or_else(|| outlook.soon.first())
        .or_else(|| outlook.future.first())
    {
        match next.days_until {
            0 => println!("  Next exam:  {} today!", next.exam.name),
            1 => println!("  Next exam:  {} tomorrow", next.exam.name),
            days => println!("  Next exam:  {} in {} days", next.exam.name, days),
        }
    }

    Ok(())
}
