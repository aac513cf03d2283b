//! Exam urgency buckets
//!
//! Keys every exam by its soonest upcoming subject date and sorts it into
//! one of three buckets. Exams whose subject dates are all in the past
//! leave the schedule entirely; that is a filter, not an error.

use super::clock::Clock;
use crate::domain::Exam;

/// How soon an exam is, by days until its next subject date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Urgent,
    Soon,
    Future,
}

impl Urgency {
    /// Bucket for a days-until value: under 7 is urgent, 7 to 21 soon,
    /// beyond 21 future
    pub fn for_days(days: i64) -> Self {
        if days < 7 {
            Self::Urgent
        } else if days <= 21 {
            Self::Soon
        } else {
            Self::Future
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Soon => "soon",
            Self::Future => "future",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Soon => "Coming up",
            Self::Future => "Further out",
        }
    }
}

/// An exam keyed by its days-until value, ready for display
#[derive(Debug, Clone)]
pub struct UpcomingExam<'a> {
    pub exam: &'a Exam,
    pub days_until: i64,
}

/// The categorized exam schedule for one profile
#[derive(Debug, Clone, Default)]
pub struct ExamOutlook<'a> {
    /// Exams under 7 days away, soonest first
    pub urgent: Vec<UpcomingExam<'a>>,
    /// Exams 7 to 21 days away, soonest first
    pub soon: Vec<UpcomingExam<'a>>,
    /// Exams more than 21 days away, soonest first
    pub future: Vec<UpcomingExam<'a>>,
}

impl ExamOutlook<'_> {
    /// Total exams across all buckets
    pub fn len(&self) -> usize {
        self.urgent.len() + self.soon.len() + self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Soonest upcoming subject date of an exam, in days from today
///
/// `None` when every subject date is in the past.
pub fn days_until_exam(exam: &Exam, clock: &Clock) -> Option<i64> {
    exam.subjects
        .iter()
        .map(|subject| clock.days_until(subject.date))
        .filter(|days| *days >= 0)
        .min()
}

/// Bucket a profile's exams by urgency
pub fn categorize<'a>(exams: &[&'a Exam], clock: &Clock) -> ExamOutlook<'a> {
    let mut outlook = ExamOutlook::default();
    for &exam in exams {
        let Some(days) = days_until_exam(exam, clock) else {
            continue;
        };
        let entry = UpcomingExam {
            exam,
            days_until: days,
        };
        match Urgency::for_days(days) {
            Urgency::Urgent => outlook.urgent.push(entry),
            Urgency::Soon => outlook.soon.push(entry),
            Urgency::Future => outlook.future.push(entry),
        }
    }

    for bucket in [
        &mut outlook.urgent,
        &mut outlook.soon,
        &mut outlook.future,
    ] {
        bucket.sort_by_key(|entry| entry.days_until);
    }
    outlook
}
