//! Fixed achievement rule table.
//!
//! Rules are evaluated against aggregated [`StudentStats`]; whether a
//! badge is *newly* unlocked is decided by the store's conditional
//! insert, not here.

use vocab_types::{AchievementKind, StudentStats};

/// XP granted per unit of requirement when a badge unlocks
pub const XP_PER_REQUIREMENT: i32 = 10;

pub struct AchievementRule {
    /// Stable slug used as the per-student uniqueness key
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AchievementKind,
    pub requirement: i32,
    predicate: fn(&StudentStats) -> bool,
}

impl AchievementRule {
    pub fn qualifies(&self, stats: &StudentStats) -> bool {
        (self.predicate)(stats)
    }

    pub fn xp_reward(&self) -> i32 {
        self.requirement * XP_PER_REQUIREMENT
    }
}

pub const RULES: [AchievementRule; 8] = [
    AchievementRule {
        id: "first_word",
        name: "First Word",
        description: "Practice your first vocabulary word",
        kind: AchievementKind::Milestone,
        requirement: 1,
        predicate: |stats| stats.total_words >= 1,
    },
    AchievementRule {
        id: "ten_words",
        name: "Word Collector",
        description: "Practice 10 different words",
        kind: AchievementKind::Milestone,
        requirement: 10,
        predicate: |stats| stats.total_words >= 10,
    },
    AchievementRule {
        id: "fifty_words",
        name: "Vocabulary Builder",
        description: "Practice 50 different words",
        kind: AchievementKind::Milestone,
        requirement: 50,
        predicate: |stats| stats.total_words >= 50,
    },
    AchievementRule {
        id: "hundred_words",
        name: "Word Master",
        description: "Practice 100 different words",
        kind: AchievementKind::Milestone,
        requirement: 100,
        predicate: |stats| stats.total_words >= 100,
    },
    AchievementRule {
        id: "week_streak",
        name: "Week Warrior",
        description: "Keep a 7-day practice streak",
        kind: AchievementKind::Streak,
        requirement: 7,
        predicate: |stats| stats.streak >= 7,
    },
    AchievementRule {
        id: "month_streak",
        name: "Monthly Devotion",
        description: "Keep a 30-day practice streak",
        kind: AchievementKind::Streak,
        requirement: 30,
        predicate: |stats| stats.streak >= 30,
    },
    AchievementRule {
        id: "perfect_session",
        name: "Perfect Session",
        description: "Finish a practice session with 100% accuracy",
        kind: AchievementKind::Accuracy,
        requirement: 100,
        predicate: |stats| stats.accuracy >= 100.0,
    },
    AchievementRule {
        id: "mastery_10",
        name: "Rising Scholar",
        description: "Fully master 10 words",
        kind: AchievementKind::Mastery,
        requirement: 10,
        predicate: |stats| stats.mastered_words >= 10,
    },
];

/// Rules whose threshold the given stats meet, in table order.
pub fn qualifying_rules(stats: &StudentStats) -> Vec<&'static AchievementRule> {
    RULES.iter().filter(|rule| rule.qualifies(stats)).collect()
}
