//! Chapter progress aggregation
//!
//! Tallies chapter states per exam subject or across a whole exam. The
//! percentage counts fully completed chapters only; started ones show up in
//! their own tally instead of as a fraction.

use serde::Serialize;

use crate::domain::{Chapter, ChapterStatus, Exam, ExamSubject};

/// Chapter tallies with a 0 to 100 completion percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Chapters in scope
    pub total: u32,
    /// Chapters fully prepared
    pub completed: u32,
    /// Chapters partially prepared
    pub started: u32,
    /// Chapters not touched yet
    pub pending: u32,
    /// Completed share in whole percent, rounded half up; zero when empty
    pub percentage: u8,
}

/// Progress across one exam subject's chapters
pub fn subject_progress(subject: &ExamSubject) -> ProgressReport {
    tally(subject.chapters.iter())
}

/// Progress across every chapter of every subject of an exam
pub fn exam_progress(exam: &Exam) -> ProgressReport {
    tally(exam.chapters())
}

fn tally<'a>(chapters: impl Iterator<Item = &'a Chapter>) -> ProgressReport {
    let mut report = ProgressReport::default();
    for chapter in chapters {
        report.total += 1;
        match chapter.status {
            ChapterStatus::Completed => report.completed += 1,
            ChapterStatus::Started => report.started += 1,
            ChapterStatus::Pending => {}
        }
    }
    report.pending = report.total - report.completed - report.started;
    if report.total > 0 {
        report.percentage =
            (f64::from(report.completed) / f64::from(report.total) * 100.0).round() as u8;
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn chapter(status: ChapterStatus) -> Chapter {
        Chapter {
            name: "Chapter".to_string(),
            status,
        }
    }

    fn subject_with(chapters: Vec<Chapter>) -> ExamSubject {
        ExamSubject {
            subject: "Math".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
            chapters,
            key_points: None,
            score: None,
        }
    }

    #[test]
    fn test_empty_subject_reports_all_zeroes() {
        let report = subject_progress(&subject_with(vec![]));
        assert_eq!(report, ProgressReport::default());
    }

    #[test]
    fn test_tallies_every_state() {
        let report = subject_progress(&subject_with(vec![
            chapter(ChapterStatus::Completed),
            chapter(ChapterStatus::Completed),
            chapter(ChapterStatus::Started),
            chapter(ChapterStatus::Pending),
        ]));

        assert_eq!(report.total, 4);
        assert_eq!(report.completed, 2);
        assert_eq!(report.started, 1);
        assert_eq!(report.pending, 1);
        assert_eq!(report.percentage, 50);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1 of 8 is 12.5 percent
        let mut chapters = vec![chapter(ChapterStatus::Completed)];
        chapters.extend(std::iter::repeat_with(|| chapter(ChapterStatus::Pending)).take(7));

        let report = subject_progress(&subject_with(chapters));
        assert_eq!(report.percentage, 13);
    }

    #[test]
    fn test_started_chapters_do_not_count_toward_percentage() {
        let report = subject_progress(&subject_with(vec![
            chapter(ChapterStatus::Started),
            chapter(ChapterStatus::Started),
        ]));
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_exam_progress_pools_chapters_across_subjects() {
        let exam = Exam {
            id: "e1".to_string(),
            profile_id: "p1".to_string(),
            name: "Finals".to_string(),
            subjects: vec![
                subject_with(vec![
                    chapter(ChapterStatus::Completed),
                    chapter(ChapterStatus::Pending),
                ]),
                subject_with(vec![chapter(ChapterStatus::Completed)]),
            ],
        };

        let report = exam_progress(&exam);
        assert_eq!(report.total, 3);
        assert_eq!(report.completed, 2);
        assert_eq!(report.percentage, 67);
    }
}
