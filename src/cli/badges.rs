//! Badges command implementation

use anyhow::Result;
use std::path::Path;

use studyquest::config::Config;
use studyquest::engine::clock::Clock;
use studyquest::engine::{badges, stats, BadgeCategory};

/// Show the badge wall for a profile
pub fn badges_command(
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

    let profile_stats = stats::collect(&tasks, subjects.len(), &clock);
    let badge_states = badges::evaluate(&profile_stats);

    if json {
        let records: Vec<_> = badge_states.iter().map(|b| b.to_record()).collect();
        let value = serde_json::json!({
            "profile": profile.id,
            "date": clock.today(),
            "badges": records,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let unlocked = badge_states.iter().filter(|b| b.unlocked).count();
    println!(
        "Badges for {} - {} of {} unlocked\n",
        profile.name,
        unlocked,
        badge_states.len()
    );

    for category in [
        BadgeCategory::Daily,
        BadgeCategory::Weekly,
        BadgeCategory::Achievement,
    ] {
        println!("  {}", category.label());
        for state in badge_states.iter().filter(|s| s.badge.category == category) {
            let marker = if state.unlocked { "[x]" } else { "[ ]" };
            println!(
                "    {} {} {:<18} {:<10} {}",
                marker,
                state.badge.icon,
                state.badge.name,
                state.badge.tier.label(),
                state.badge.requirement
            );
        }
        println!();
    }

    Ok(())
}
