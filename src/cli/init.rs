//! Init command implementation

use anyhow::{bail, Result};
use chrono::Duration;
use std::path::Path;
use uuid::Uuid;

use studyquest::config::Config;
use studyquest::engine::clock::{Clock, DEFAULT_HOME_ZONE};
use studyquest::store::Snapshot;
use studyquest::{Chapter, ChapterStatus, Exam, ExamSubject, Profile, Subject, Task};

/// Default configuration content for studyquest init
pub const DEFAULT_CONFIG: &str = r#"# StudyQuest Configuration
# ========================
#
# All "today" logic (streaks, daily points, exam countdowns) resolves in
# the home time zone configured here, independent of the host clock.

# IANA time zone name, e.g. "Europe/Berlin" or "America/New_York"
timezone = "Europe/Berlin"

# Snapshot file with profiles, tasks, subjects and exams.
# Defaults to ~/.studyquest/data.json when unset.
# data_file = "/path/to/data.json"
"#;

/// Write a starter config and a small sample snapshot
pub fn init_command(
    config_path: Option<&Path>,
    data_path: Option<&Path>,
    force: bool,
) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);
    let data_path = data_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_data_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }
    if data_path.exists() && !force {
        bail!(
            "Snapshot already exists: {}\nUse --force to overwrite.",
            data_path.display()
        );
    }

    for path in [&config_path, &data_path] {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    sample_snapshot().save(&data_path)?;
    println!("Created: {}", data_path.display());
    println!("\nTry: studyquest overview --profile Anna");

    Ok(())
}

/// A small snapshot with two profiles, dated relative to today so streaks
/// and exam countdowns have something to show
fn sample_snapshot() -> Snapshot {
    let today = Clock::for_zone(DEFAULT_HOME_ZONE).today();
    let anna = Uuid::new_v4().to_string();
    let ben = Uuid::new_v4().to_string();

    let profiles = vec![
        Profile {
            id: anna.clone(),
            name: "Anna".to_string(),
            class: Some("10b".to_string()),
        },
        Profile {
            id: ben.clone(),
            name: "Ben".to_string(),
            class: Some("9a".to_string()),
        },
    ];

    let subject = |profile: &str, name: &str, chapters: &[&str]| Subject {
        id: Uuid::new_v4().to_string(),
        profile_id: profile.to_string(),
        name: name.to_string(),
        chapters: chapters.iter().map(|c| c.to_string()).collect(),
    };
    let subjects = vec![
        subject(&anna, "Math", &["Linear functions", "Quadratic equations"]),
        subject(&anna, "English", &["Essay writing"]),
        subject(&anna, "Biology", &["Cell structure"]),
        subject(&ben, "Math", &["Fractions"]),
        subject(&ben, "History", &["Industrial revolution"]),
    ];

    let task = |profile: &str, days_ago: i64, subject: &str, minutes: u32, done: bool| Task {
        id: Uuid::new_v4().to_string(),
        profile_id: profile.to_string(),
        title: Some(format!("Revise {}", subject)),
        date: today - Duration::days(days_ago),
        subject: Some(subject.to_string()),
        duration: minutes,
        completed: done,
    };
    let tasks = vec![
        task(&anna, 0, "Math", 45, true),
        task(&anna, 0, "English", 80, true),
        task(&anna, 1, "Math", 60, true),
        task(&anna, 2, "Biology", 30, true),
        task(&anna, 0, "Biology", 20, false),
        task(&ben, 0, "Math", 35, true),
        task(&ben, 3, "History", 50, true),
    ];

    let chapter = |name: &str, status: ChapterStatus| Chapter {
        name: name.to_string(),
        status,
    };
    let exams = vec![
        Exam {
            id: Uuid::new_v4().to_string(),
            profile_id: anna.clone(),
            name: "Spring finals".to_string(),
            subjects: vec![
                ExamSubject {
                    subject: "Math".to_string(),
                    date: today + Duration::days(5),
                    chapters: vec![
                        chapter("Linear functions", ChapterStatus::Completed),
                        chapter("Quadratic equations", ChapterStatus::Started),
                    ],
                    key_points: Some("Focus on word problems".to_string()),
                    score: None,
                },
                ExamSubject {
                    subject: "English".to_string(),
                    date: today + Duration::days(16),
                    chapters: vec![chapter("Essay writing", ChapterStatus::Pending)],
                    key_points: None,
                    score: None,
                },
            ],
        },
        Exam {
            id: Uuid::new_v4().to_string(),
            profile_id: anna,
            name: "Vocabulary quiz".to_string(),
            subjects: vec![ExamSubject {
                subject: "English".to_string(),
                date: today - Duration::days(10),
                chapters: vec![],
                key_points: None,
                score: Some(92),
            }],
        },
        Exam {
            id: Uuid::new_v4().to_string(),
            profile_id: ben,
            name: "History test".to_string(),
            subjects: vec![ExamSubject {
                subject: "History".to_string(),
                date: today + Duration::days(25),
                chapters: vec![chapter("Industrial revolution", ChapterStatus::Started)],
                key_points: None,
                score: None,
            }],
        },
    ];

    Snapshot {
        profiles,
        tasks,
        subjects,
        exams,
    }
}
