//! Shared test fixtures for engine and snapshot tests

use chrono::NaiveDate;

use studyquest::{Profile, Task};

/// Build a calendar date, panicking on invalid input
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Build a profile without a class label
pub fn profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        class: None,
    }
}

/// Build a task with the given completion state
pub fn task(profile_id: &str, date: NaiveDate, duration: u32, completed: bool) -> Task {
    Task {
        id: format!("t-{}-{}-{}", profile_id, date, duration),
        profile_id: profile_id.to_string(),
        title: None,
        date,
        subject: None,
        duration,
        completed,
    }
}
