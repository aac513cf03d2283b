//! Leaderboard command implementation

use anyhow::Result;
use std::path::Path;

use studyquest::config::Config;
use studyquest::engine::clock::Clock;
use studyquest::engine::leaderboard::{self, LeaderboardMode};

/// Show the top five profiles for the selected mode
pub fn leaderboard_command(
    config: &Config,
    data: Option<&Path>,
    mode_arg: &str,
    json: bool,
) -> Result<()> {
    let Some(mode) = LeaderboardMode::from_str(mode_arg) else {
        eprintln!("Unknown mode: {} (expected all-time or daily)", mode_arg);
        return Ok(());
    };

    let snapshot = super::load_snapshot(config, data)?;
    let clock = Clock::for_zone(config.home_zone());
    let entries = leaderboard::rank(
        &snapshot.profiles,
        &snapshot.tasks,
        &snapshot.subjects,
        &snapshot.exams,
        mode,
        &clock,
    );

    if json {
        let value = serde_json::json!({
            "mode": mode.as_str(),
            "date": clock.today(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No profiles in snapshot.");
        return Ok(());
    }

    println!("Leaderboard ({}):\n", mode.label());

    for entry in &entries {
        let class = entry.class.as_deref().unwrap_or("-");
        println!(
            "  #{} {:<18} {:<6} {:>6} pts   (streak {}d, {} badges)",
            entry.rank, entry.name, class, entry.points, entry.streak, entry.badges_unlocked
        );
        let secondary = match mode {
            LeaderboardMode::AllTime => format!("today: {}", entry.daily_points),
            LeaderboardMode::Daily => format!("all-time: {}", entry.all_time_points),
        };
        println!("      {}", secondary);
    }

    Ok(())
}
