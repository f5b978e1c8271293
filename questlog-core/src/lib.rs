//! questlog-core: task tracking with RPG-style progression.
//!
//! Tasks recur on a daily/weekly/monthly/yearly cadence; completing one
//! pays experience into the player's progression (levels, ranks) and can
//! unlock achievements from a fixed catalog. `AppState` owns everything
//! and is itself the persisted snapshot.

pub mod achievements;
pub mod category;
pub mod player;
pub mod progression;
pub mod stats;
pub mod state;
pub mod task;

pub use achievements::{
    Achievement, AchievementCategory, Rarity, Requirement, default_achievements,
};
pub use category::{TaskCategory, default_categories};
pub use player::{AttributeScores, Player};
pub use progression::{experience_to_next, level_for, rank_for};
pub use state::{AppState, TaskDraft};
pub use stats::ProgressStats;
pub use task::{Difficulty, Recurrence, Task, TaskPatch};
