//! The analytics and gamification engine
//!
//! Pure, read-only projections from the raw collections (profiles, tasks,
//! subjects, exams) to derived signals: streaks, stats, badges, points,
//! exam urgency and the leaderboard. The engine never raises user-visible
//! errors; empty or odd inputs degrade to zeros and empty buckets. Nothing
//! is cached between calls, and one [`Clock`] per evaluation pass keeps
//! every component on the same calendar day.

pub mod badges;
pub mod clock;
pub mod leaderboard;
pub mod points;
pub mod progress;
pub mod stats;
pub mod streak;
pub mod urgency;

pub use badges::{Badge, BadgeCategory, BadgeId, BadgeRecord, BadgeState, BadgeTier, BADGES};
pub use clock::{Clock, DEFAULT_HOME_ZONE};
pub use leaderboard::{LeaderboardEntry, LeaderboardMode, LEADERBOARD_SIZE};
pub use points::{PointsBreakdown, PointsSummary};
pub use progress::ProgressReport;
pub use stats::StatsSnapshot;
pub use urgency::{ExamOutlook, UpcomingExam, Urgency};
