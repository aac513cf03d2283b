//! Badge catalog and evaluation
//!
//! All badges are defined here with their unlock predicates and tiers. The
//! catalog is immutable and fixed at compile time; evaluation is a pure pass
//! over it. Callers that need a different catalog (tests, seasonal events)
//! inject one via [`evaluate_catalog`].

use serde::Serialize;

use super::stats::StatsSnapshot;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    // Daily badges
    KeepGoing,
    StudyRockstar,

    // Weekly badges
    WeeklyWarrior,
    StudyChampion,
    UltimateScholar,

    // Achievement badges
    KnowledgeSeeker,
    StarStudent,
    TaskMaster,
}

impl BadgeId {
    /// Get the string ID used on the wire and in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeepGoing => "keep-going",
            Self::StudyRockstar => "study-rockstar",
            Self::WeeklyWarrior => "weekly-warrior",
            Self::StudyChampion => "study-champion",
            Self::UltimateScholar => "ultimate-scholar",
            Self::KnowledgeSeeker => "knowledge-seeker",
            Self::StarStudent => "star-student",
            Self::TaskMaster => "task-master",
        }
    }

    /// Parse a badge ID string; unknown IDs yield `None` so callers can
    /// log and show a placeholder instead of failing
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "keep-going" => Some(Self::KeepGoing),
            "study-rockstar" => Some(Self::StudyRockstar),
            "weekly-warrior" => Some(Self::WeeklyWarrior),
            "study-champion" => Some(Self::StudyChampion),
            "ultimate-scholar" => Some(Self::UltimateScholar),
            "knowledge-seeker" => Some(Self::KnowledgeSeeker),
            "star-student" => Some(Self::StarStudent),
            "task-master" => Some(Self::TaskMaster),
            _ => None,
        }
    }

    /// Get all badge IDs
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::KeepGoing,
            Self::StudyRockstar,
            Self::WeeklyWarrior,
            Self::StudyChampion,
            Self::UltimateScholar,
            Self::KnowledgeSeeker,
            Self::StarStudent,
            Self::TaskMaster,
        ]
    }
}

/// Badge rarity; strictly determines the points an unlocked badge is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeTier {
    /// Points awarded for an unlocked badge of this tier
    pub fn points(&self) -> u32 {
        match self {
            Self::Common => 50,
            Self::Rare => 100,
            Self::Epic => 200,
            Self::Legendary => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// Parse a tier name; names outside the table count as `Common`
    pub fn from_str(s: &str) -> Self {
        match s {
            "rare" => Self::Rare,
            "epic" => Self::Epic,
            "legendary" => Self::Legendary,
            _ => Self::Common,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

/// Badge category for grouping in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Daily,
    Weekly,
    Achievement,
}

impl BadgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Achievement => "achievement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Achievement => "Achievements",
        }
    }
}

/// Badge definition with all metadata and its unlock predicate
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    /// Human-readable unlock requirement shown next to locked badges
    pub requirement: &'static str,
    pub icon: &'static str,
    pub tier: BadgeTier,
    pub category: BadgeCategory,
    /// Pure unlock check over a stats snapshot
    pub predicate: fn(&StatsSnapshot) -> bool,
}

/// All badge definitions
///
/// Order is significant for display grouping only; evaluation never depends
/// on it since every predicate is independent.
pub static BADGES: &[Badge] = &[
    // === DAILY ===
    Badge {
        id: BadgeId::KeepGoing,
        name: "Keep Going",
        description: "Two solid hours of studying in a single day",
        requirement: "Study 120 minutes in one day",
        icon: "🔥",
        tier: BadgeTier::Rare,
        category: BadgeCategory::Daily,
        predicate: |stats| stats.study_minutes_today >= 120,
    },
    Badge {
        id: BadgeId::StudyRockstar,
        name: "Study Rockstar",
        description: "Three hours of studying in a single day",
        requirement: "Study 180 minutes in one day",
        icon: "🎸",
        tier: BadgeTier::Legendary,
        category: BadgeCategory::Daily,
        predicate: |stats| stats.study_minutes_today >= 180,
    },
    // === WEEKLY ===
    Badge {
        id: BadgeId::WeeklyWarrior,
        name: "Weekly Warrior",
        description: "Ten hours of studying within one week",
        requirement: "Study 600 minutes in a week",
        icon: "⚔️",
        tier: BadgeTier::Rare,
        category: BadgeCategory::Weekly,
        predicate: |stats| stats.study_minutes_week >= 600,
    },
    Badge {
        id: BadgeId::StudyChampion,
        name: "Study Champion",
        description: "Fifteen hours of studying within one week",
        requirement: "Study 900 minutes in a week",
        icon: "🏆",
        tier: BadgeTier::Epic,
        category: BadgeCategory::Weekly,
        predicate: |stats| stats.study_minutes_week >= 900,
    },
    Badge {
        id: BadgeId::UltimateScholar,
        name: "Ultimate Scholar",
        description: "Twenty-one hours of studying within one week",
        requirement: "Study 1260 minutes in a week",
        icon: "👑",
        tier: BadgeTier::Legendary,
        category: BadgeCategory::Weekly,
        predicate: |stats| stats.study_minutes_week >= 1260,
    },
    // === ACHIEVEMENTS ===
    Badge {
        id: BadgeId::KnowledgeSeeker,
        name: "Knowledge Seeker",
        description: "Study five or more subjects",
        requirement: "Track 5 subjects",
        icon: "📚",
        tier: BadgeTier::Common,
        category: BadgeCategory::Achievement,
        predicate: |stats| stats.total_subjects >= 5,
    },
    Badge {
        id: BadgeId::StarStudent,
        name: "Star Student",
        description: "Keep your completion rate at 80% or higher",
        requirement: "Reach an 80% completion rate",
        icon: "⭐",
        tier: BadgeTier::Common,
        category: BadgeCategory::Achievement,
        predicate: |stats| stats.completion_rate >= 80.0,
    },
    Badge {
        id: BadgeId::TaskMaster,
        name: "Task Master",
        description: "Complete five tasks in a single day",
        requirement: "Complete 5 tasks in one day",
        icon: "✅",
        tier: BadgeTier::Rare,
        category: BadgeCategory::Achievement,
        predicate: |stats| stats.completed_today >= 5,
    },
];

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> &'static Badge {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("All badges should be defined")
    }

    /// Look up a badge by its string ID; `None` for unknown IDs
    pub fn lookup(id: &str) -> Option<&'static Badge> {
        BadgeId::from_str(id).map(Badge::get)
    }

    /// Get total number of badges
    pub fn total_count() -> usize {
        BADGES.len()
    }
}

/// One catalog entry with its unlock state for a stats snapshot
#[derive(Debug, Clone)]
pub struct BadgeState {
    pub badge: &'static Badge,
    pub unlocked: bool,
}

impl BadgeState {
    /// Points this badge contributes; zero while locked
    pub fn points(&self) -> u32 {
        if self.unlocked {
            self.badge.tier.points()
        } else {
            0
        }
    }

    /// Flat serializable row for the presentation layer
    pub fn to_record(&self) -> BadgeRecord {
        BadgeRecord {
            id: self.badge.id.as_str(),
            name: self.badge.name,
            description: self.badge.description,
            requirement: self.badge.requirement,
            icon: self.badge.icon,
            tier: self.badge.tier,
            category: self.badge.category,
            points: self.badge.tier.points(),
            unlocked: self.unlocked,
        }
    }
}

/// Serializable badge row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: &'static str,
    pub icon: &'static str,
    pub tier: BadgeTier,
    pub category: BadgeCategory,
    pub points: u32,
    pub unlocked: bool,
}

/// Evaluate the built-in catalog against a stats snapshot
pub fn evaluate(stats: &StatsSnapshot) -> Vec<BadgeState> {
    evaluate_catalog(BADGES, stats)
}

/// Evaluate an injected catalog against a stats snapshot
pub fn evaluate_catalog(catalog: &'static [Badge], stats: &StatsSnapshot) -> Vec<BadgeState> {
    catalog
        .iter()
        .map(|badge| BadgeState {
            badge,
            unlocked: (badge.predicate)(stats),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_a_definition() {
        for id in BadgeId::all() {
            assert_eq!(Badge::get(*id).id, *id);
        }
        assert_eq!(Badge::total_count(), BadgeId::all().len());
    }

    #[test]
    fn test_ids_round_trip_through_str() {
        for id in BadgeId::all() {
            assert_eq!(BadgeId::from_str(id.as_str()), Some(*id));
        }
        assert_eq!(BadgeId::from_str("midnight-owl"), None);
        assert!(Badge::lookup("midnight-owl").is_none());
    }

    #[test]
    fn test_tier_points_follow_the_fixed_table() {
        assert_eq!(BadgeTier::Common.points(), 50);
        assert_eq!(BadgeTier::Rare.points(), 100);
        assert_eq!(BadgeTier::Epic.points(), 200);
        assert_eq!(BadgeTier::Legendary.points(), 500);
    }

    #[test]
    fn test_unknown_tier_names_default_to_common() {
        assert_eq!(BadgeTier::from_str("mythic"), BadgeTier::Common);
        assert_eq!(BadgeTier::from_str("legendary"), BadgeTier::Legendary);
    }

    #[test]
    fn test_fresh_stats_unlock_nothing() {
        let states = evaluate(&StatsSnapshot::default());
        assert!(states.iter().all(|s| !s.unlocked));
        assert_eq!(states.len(), Badge::total_count());
    }

    #[test]
    fn test_daily_badges_unlock_at_their_thresholds() {
        let stats = StatsSnapshot {
            study_minutes_today: 130,
            ..Default::default()
        };
        let states = evaluate(&stats);

        let unlocked: Vec<BadgeId> = states
            .iter()
            .filter(|s| s.unlocked)
            .map(|s| s.badge.id)
            .collect();
        assert_eq!(unlocked, vec![BadgeId::KeepGoing]);
    }

    #[test]
    fn test_weekly_badges_stack_as_minutes_grow() {
        let stats = StatsSnapshot {
            study_minutes_week: 1260,
            ..Default::default()
        };
        let states = evaluate(&stats);

        for id in [
            BadgeId::WeeklyWarrior,
            BadgeId::StudyChampion,
            BadgeId::UltimateScholar,
        ] {
            assert!(
                states
                    .iter()
                    .any(|s| s.badge.id == id && s.unlocked),
                "{:?} should be unlocked at 1260 weekly minutes",
                id
            );
        }
    }

    #[test]
    fn test_locked_badges_contribute_no_points() {
        let states = evaluate(&StatsSnapshot::default());
        assert_eq!(states.iter().map(BadgeState::points).sum::<u32>(), 0);
    }

    #[test]
    fn test_alternate_catalogs_can_be_injected() {
        static TINY: &[Badge] = &[Badge {
            id: BadgeId::KeepGoing,
            name: "Test Badge",
            description: "For catalog injection",
            requirement: "Always",
            icon: "🧪",
            tier: BadgeTier::Epic,
            category: BadgeCategory::Daily,
            predicate: |_| true,
        }];

        let states = evaluate_catalog(TINY, &StatsSnapshot::default());
        assert_eq!(states.len(), 1);
        assert!(states[0].unlocked);
        assert_eq!(states[0].points(), 200);
    }
}
