//! StudyQuest - gamified study tracking
//!
//! StudyQuest turns the raw collections of a study tracker (profiles,
//! tasks, subjects, exams) into the signals that keep students going:
//! study streaks, point totals, badge unlocks, a top-five leaderboard and
//! an exam schedule bucketed by urgency.
//!
//! ## Layout
//!
//! 1. **Engine (core)**: pure recomputed-on-demand analytics in
//!    [`engine`]; holds no state and performs no I/O.
//!
//! 2. **Surfaces**: the [`store`] reads the JSON snapshot the engine is
//!    fed, [`config`] resolves the home time zone, and the CLI binary
//!    renders the results.

pub mod config;
pub mod domain;
pub mod engine;
pub mod store;

pub use domain::*;
