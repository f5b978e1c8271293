//! Task model: recurring units of work that pay out experience.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reset cadence of a task, independent of its difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "yearly")]
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "hard")]
    Hard,
    #[serde(rename = "legendary")]
    Legendary,
}

/// Core task type.
///
/// Invariant: `completed_at` is `Some` exactly when `completed` is true.
/// Only the state container's complete/reset operations touch that pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(rename = "type")]
    pub recurrence: Recurrence,

    /// Experience paid out on completion. Always positive.
    pub experience: u32,

    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,

    pub difficulty: Difficulty,

    /// Free text, conventionally one of the fixed category ids.
    pub category: String,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            recurrence: Recurrence::Daily,
            experience: 10,
            completed: false,
            created_at: now,
            completed_at: None,
            difficulty: Difficulty::Easy,
            category: "personal".to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Typed partial update for a task.
///
/// Completion state is deliberately not patchable: marking a task done must
/// go through the completion pathway so experience and achievements apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub experience: Option<u32>,
}

impl TaskPatch {
    /// Merge the set fields into `task`, leaving the rest untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(recurrence) = self.recurrence {
            task.recurrence = recurrence;
        }
        if let Some(difficulty) = self.difficulty {
            task.difficulty = difficulty;
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(experience) = self.experience {
            task.experience = experience;
        }
    }
}
