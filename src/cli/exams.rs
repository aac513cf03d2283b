//! Exams command implementation

use anyhow::Result;
use std::path::Path;

use studyquest::config::Config;
use studyquest::engine::clock::Clock;
use studyquest::engine::progress;
use studyquest::engine::urgency::{self, UpcomingExam, Urgency};

/// Show a profile's upcoming exams bucketed by urgency
pub fn exams_command(
    config: &Config,
    data: Option<&Path>,
    profile_key: &str,
    json: bool,
) -> Result<()> {
    let snapshot = super::load_snapshot(config, data)?;
    let profile = super::resolve_profile(&snapshot, profile_key)?;

    let clock = Clock::for_zone(config.home_zone());
    let exams = snapshot.exams_for(&profile.id);
    let outlook = urgency::categorize(&exams, &clock);

    if json {
        let value = serde_json::json!({
            "profile": profile.id,
            "date": clock.today(),
            "urgent": bucket_json(&outlook.urgent),
            "soon": bucket_json(&outlook.soon),
            "future": bucket_json(&outlook.future),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if outlook.is_empty() {
        println!("No upcoming exams for {}.", profile.name);
        return Ok(());
    }

    println!("Upcoming exams for {}:\n", profile.name);

    print_bucket(Urgency::Urgent, &outlook.urgent);
    print_bucket(Urgency::Soon, &outlook.soon);
    print_bucket(Urgency::Future, &outlook.future);

    Ok(())
}

fn bucket_json(bucket: &[UpcomingExam<'_>]) -> Vec<serde_json::Value> {
    bucket
        .iter()
        .map(|entry| {
            serde_json::json!({
                "id": entry.exam.id,
                "name": entry.exam.name,
                "daysUntil": entry.days_until,
                "progress": progress::exam_progress(entry.exam),
            })
        })
        .collect()
}

fn print_bucket(urgency: Urgency, bucket: &[UpcomingExam<'_>]) {
    if bucket.is_empty() {
        return;
    }

    let window = match urgency {
        Urgency::Urgent => "under 7 days",
        Urgency::Soon => "7 to 21 days",
        Urgency::Future => "beyond 3 weeks",
    };
    println!("  {} ({})", urgency.label(), window);

    for entry in bucket {
        let when = match entry.days_until {
            0 => "today!".to_string(),
            1 => "tomorrow".to_string(),
            days => format!("in {} days", days),
        };
        let report = progress::exam_progress(entry.exam);
        if report.total > 0 {
            println!(
                "    {:<24} {:<10} {}/{} chapters done ({}%)",
                entry.exam.name, when, report.completed, report.total, report.percentage
            );
        } else {
            println!("    {:<24} {}", entry.exam.name, when);
        }
    }
    println!();
}
