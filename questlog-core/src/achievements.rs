//! Achievement catalog and requirement evaluation.
//!
//! Achievements are a fixed catalog of ten entries. Each carries one or
//! more requirement clauses; an achievement unlocks when every clause is
//! satisfied at once (logical AND, `current >= target`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::stats::ProgressStats;
use crate::task::{Difficulty, Recurrence, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    #[serde(rename = "task")]
    Task,
    #[serde(rename = "streak")]
    Streak,
    #[serde(rename = "level")]
    Level,
    #[serde(rename = "special")]
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "common")]
    Common,
    #[serde(rename = "rare")]
    Rare,
    #[serde(rename = "epic")]
    Epic,
    #[serde(rename = "legendary")]
    Legendary,
}

/// One clause of an unlock condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Requirement {
    /// Completed tasks overall.
    #[serde(rename = "task_completion")]
    TaskCompletion { value: u32 },
    /// Completed tasks filtered by recurrence or difficulty.
    #[serde(rename = "task_count")]
    TaskCount {
        value: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recurrence: Option<Recurrence>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        difficulty: Option<Difficulty>,
    },
    /// Current check-in streak length.
    #[serde(rename = "streak_days")]
    StreakDays { value: u32 },
    /// Current player level.
    #[serde(rename = "level_reach")]
    LevelReach { value: u32 },
    /// Completed tasks in one category.
    #[serde(rename = "category_completion")]
    CategoryCompletion { value: u32, category: String },
}

impl Requirement {
    pub fn target(&self) -> u32 {
        match self {
            Requirement::TaskCompletion { value }
            | Requirement::TaskCount { value, .. }
            | Requirement::StreakDays { value }
            | Requirement::LevelReach { value }
            | Requirement::CategoryCompletion { value, .. } => *value,
        }
    }

    /// Current value of this clause against the given state.
    pub fn current(&self, tasks: &[Task], player: &Player, stats: &ProgressStats) -> u32 {
        match self {
            Requirement::TaskCompletion { .. } => completed_matching(tasks, |_| true),
            Requirement::TaskCount {
                recurrence,
                difficulty,
                ..
            } => completed_matching(tasks, |t| {
                recurrence.map_or(true, |r| t.recurrence == r)
                    && difficulty.map_or(true, |d| t.difficulty == d)
            }),
            Requirement::StreakDays { .. } => stats.streak_days,
            Requirement::LevelReach { .. } => player.level,
            Requirement::CategoryCompletion { category, .. } => {
                completed_matching(tasks, |t| t.category == *category)
            }
        }
    }

    pub fn satisfied(&self, tasks: &[Task], player: &Player, stats: &ProgressStats) -> bool {
        self.current(tasks, player, stats) >= self.target()
    }
}

fn completed_matching(tasks: &[Task], pred: impl Fn(&Task) -> bool) -> u32 {
    tasks
        .iter()
        .filter(|t| t.completed)
        .filter(|t| pred(t))
        .count() as u32
}

/// A milestone the player can unlock exactly once.
///
/// Invariant: `unlocked_at` is `Some` exactly when `unlocked` is true, and
/// an unlocked achievement is never re-locked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub experience_reward: u32,
    pub requirements: Vec<Requirement>,
    pub category: AchievementCategory,
    pub rarity: Rarity,
}

impl Achievement {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        experience_reward: u32,
        requirements: Vec<Requirement>,
        category: AchievementCategory,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            unlocked_at: None,
            experience_reward,
            requirements,
            category,
            rarity,
        }
    }

    /// All clauses must pass for the achievement to qualify.
    pub fn qualifies(&self, tasks: &[Task], player: &Player, stats: &ProgressStats) -> bool {
        self.requirements
            .iter()
            .all(|r| r.satisfied(tasks, player, stats))
    }

    /// (current, target) per clause, for progress display.
    pub fn progress(
        &self,
        tasks: &[Task],
        player: &Player,
        stats: &ProgressStats,
    ) -> Vec<(u32, u32)> {
        self.requirements
            .iter()
            .map(|r| (r.current(tasks, player, stats), r.target()))
            .collect()
    }
}

/// The fixed catalog, in evaluation order.
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_task",
            "First Steps",
            "Complete your first task",
            "🎯",
            50,
            vec![Requirement::TaskCompletion { value: 1 }],
            AchievementCategory::Task,
            Rarity::Common,
        ),
        Achievement::new(
            "streak_7",
            "Week Warrior",
            "Keep a 7-day check-in streak",
            "🔥",
            200,
            vec![Requirement::StreakDays { value: 7 }],
            AchievementCategory::Streak,
            Rarity::Rare,
        ),
        Achievement::new(
            "level_10",
            "Rising Star",
            "Reach level 10",
            "⭐",
            500,
            vec![Requirement::LevelReach { value: 10 }],
            AchievementCategory::Level,
            Rarity::Epic,
        ),
        Achievement::new(
            "daily_master",
            "Daily Master",
            "Complete 10 daily tasks",
            "🌅",
            150,
            vec![Requirement::TaskCount {
                value: 10,
                recurrence: Some(Recurrence::Daily),
                difficulty: None,
            }],
            AchievementCategory::Task,
            Rarity::Common,
        ),
        Achievement::new(
            "weekly_champion",
            "Weekly Champion",
            "Complete 5 weekly tasks",
            "📅",
            300,
            vec![Requirement::TaskCount {
                value: 5,
                recurrence: Some(Recurrence::Weekly),
                difficulty: None,
            }],
            AchievementCategory::Task,
            Rarity::Rare,
        ),
        Achievement::new(
            "legendary_hunter",
            "Legendary Hunter",
            "Complete 3 legendary-difficulty tasks",
            "👑",
            1000,
            vec![Requirement::TaskCount {
                value: 3,
                recurrence: None,
                difficulty: Some(Difficulty::Legendary),
            }],
            AchievementCategory::Task,
            Rarity::Legendary,
        ),
        Achievement::new(
            "health_enthusiast",
            "Health Enthusiast",
            "Complete 15 health & fitness tasks",
            "💪",
            400,
            vec![Requirement::CategoryCompletion {
                value: 15,
                category: "health".to_string(),
            }],
            AchievementCategory::Task,
            Rarity::Rare,
        ),
        Achievement::new(
            "knowledge_seeker",
            "Knowledge Seeker",
            "Complete 20 learning & skills tasks",
            "📚",
            600,
            vec![Requirement::CategoryCompletion {
                value: 20,
                category: "learning".to_string(),
            }],
            AchievementCategory::Task,
            Rarity::Epic,
        ),
        Achievement::new(
            "streak_30",
            "Consistency King",
            "Keep a 30-day check-in streak",
            "🔥",
            1000,
            vec![Requirement::StreakDays { value: 30 }],
            AchievementCategory::Streak,
            Rarity::Legendary,
        ),
        Achievement::new(
            "level_50",
            "Elite Hunter",
            "Reach level 50",
            "⭐",
            2000,
            vec![Requirement::LevelReach { value: 50 }],
            AchievementCategory::Level,
            Rarity::Legendary,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn completed(task: Task) -> Task {
        let mut t = task;
        t.completed = true;
        t.completed_at = Some(Utc::now());
        t
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = default_achievements();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.iter().all(|a| !a.unlocked && a.unlocked_at.is_none()));
        assert_eq!(catalog[0].id, "first_task");
        assert_eq!(catalog[9].id, "level_50");
        assert_eq!(catalog[5].experience_reward, 1000);
    }

    #[test]
    fn test_task_completion_requirement() {
        let req = Requirement::TaskCompletion { value: 2 };
        let player = Player::default();
        let stats = ProgressStats::default();

        let one = vec![completed(Task::new("1", "a", Utc::now()))];
        assert_eq!(req.current(&one, &player, &stats), 1);
        assert!(!req.satisfied(&one, &player, &stats));

        let two = vec![
            completed(Task::new("1", "a", Utc::now())),
            completed(Task::new("2", "b", Utc::now())),
            Task::new("3", "pending", Utc::now()),
        ];
        assert!(req.satisfied(&two, &player, &stats));
    }

    #[test]
    fn test_task_count_filters() {
        let player = Player::default();
        let stats = ProgressStats::default();
        let tasks = vec![
            completed(Task::new("1", "a", Utc::now()).with_recurrence(Recurrence::Weekly)),
            completed(Task::new("2", "b", Utc::now()).with_difficulty(Difficulty::Legendary)),
            completed(Task::new("3", "c", Utc::now()).with_recurrence(Recurrence::Weekly)),
        ];

        let weekly = Requirement::TaskCount {
            value: 2,
            recurrence: Some(Recurrence::Weekly),
            difficulty: None,
        };
        assert_eq!(weekly.current(&tasks, &player, &stats), 2);

        let legendary = Requirement::TaskCount {
            value: 3,
            recurrence: None,
            difficulty: Some(Difficulty::Legendary),
        };
        assert_eq!(legendary.current(&tasks, &player, &stats), 1);
        assert!(!legendary.satisfied(&tasks, &player, &stats));
    }

    #[test]
    fn test_level_and_streak_requirements() {
        let mut player = Player::default();
        player.grant_experience(950);
        let mut stats = ProgressStats::default();
        stats.streak_days = 7;

        assert!(Requirement::LevelReach { value: 10 }.satisfied(&[], &player, &stats));
        assert!(!Requirement::LevelReach { value: 11 }.satisfied(&[], &player, &stats));
        assert!(Requirement::StreakDays { value: 7 }.satisfied(&[], &player, &stats));
    }

    #[test]
    fn test_category_requirement_counts_only_completed() {
        let player = Player::default();
        let stats = ProgressStats::default();
        let tasks = vec![
            completed(Task::new("1", "run", Utc::now()).with_category("health")),
            Task::new("2", "swim", Utc::now()).with_category("health"),
            completed(Task::new("3", "read", Utc::now()).with_category("learning")),
        ];
        let req = Requirement::CategoryCompletion {
            value: 1,
            category: "health".to_string(),
        };
        assert_eq!(req.current(&tasks, &player, &stats), 1);
    }

    #[test]
    fn test_requirement_wire_format() {
        let req = Requirement::TaskCount {
            value: 10,
            recurrence: Some(Recurrence::Daily),
            difficulty: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"type":"task_count","value":10,"recurrence":"daily"}"#);
        let back: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
