//! Application state: the single container owning tasks, player,
//! achievements, categories and stats, plus every mutating operation.
//!
//! All operations are total: a missing task id, a repeated completion or a
//! repeated unlock silently no-ops. The container is the serialized
//! snapshot; the host persists it after each mutation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, default_achievements};
use crate::category::{TaskCategory, default_categories};
use crate::player::Player;
use crate::stats::ProgressStats;
use crate::task::{Difficulty, Recurrence, Task, TaskPatch};

/// Fields of a task supplied by the caller at creation; id, timestamps and
/// the completion flag are assigned by `add_task`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub recurrence: Recurrence,
    pub difficulty: Difficulty,
    pub category: String,
    pub experience: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub player: Player,
    pub tasks: Vec<Task>,
    pub achievements: Vec<Achievement>,
    pub categories: Vec<TaskCategory>,
    pub stats: ProgressStats,

    /// Deferred achievement scans requested by mutations. Drained by the
    /// host after the triggering mutation has been persisted. Not part of
    /// the snapshot.
    #[serde(skip)]
    pending_scans: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            player: Player::default(),
            tasks: Vec::new(),
            achievements: default_achievements(),
            categories: default_categories(),
            stats: ProgressStats::default(),
            pending_scans: 0,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest positive integer id not already taken.
    fn fresh_task_id(&self) -> String {
        let max = self
            .tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Create a task from the draft, prepended so the collection stays
    /// most-recent-first. Returns the assigned id.
    pub fn add_task(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> String {
        let id = self.fresh_task_id();
        let task = Task::new(id.clone(), draft.title, now)
            .with_description(draft.description)
            .with_recurrence(draft.recurrence)
            .with_difficulty(draft.difficulty)
            .with_category(draft.category)
            .with_experience(draft.experience);
        self.tasks.insert(0, task);
        id
    }

    /// Mark a task completed and pay out its reward. No-op when the id is
    /// unknown or the task is already completed. Requests a deferred
    /// achievement scan on success.
    pub fn complete_task(&mut self, task_id: &str, now: DateTime<Utc>) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            return;
        };
        if task.completed {
            return;
        }
        task.completed = true;
        task.completed_at = Some(now);

        let reward = task.experience;
        let recurrence = task.recurrence;
        self.player.grant_experience(reward);
        self.stats.record_completion(recurrence);
        self.pending_scans += 1;
    }

    pub fn delete_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
    }

    /// Raw field patch; never touches completion state or progression.
    pub fn update_task(&mut self, task_id: &str, patch: &TaskPatch) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            patch.apply(task);
        }
    }

    /// Clear completion on every task of one recurrence, starting its new
    /// period. Other recurrences are untouched.
    pub fn reset_tasks(&mut self, recurrence: Recurrence) {
        for task in self.tasks.iter_mut().filter(|t| t.recurrence == recurrence) {
            task.completed = false;
            task.completed_at = None;
        }
    }

    pub fn reset_daily_tasks(&mut self) {
        self.reset_tasks(Recurrence::Daily);
    }

    pub fn reset_weekly_tasks(&mut self) {
        self.reset_tasks(Recurrence::Weekly);
    }

    pub fn reset_monthly_tasks(&mut self) {
        self.reset_tasks(Recurrence::Monthly);
    }

    pub fn reset_yearly_tasks(&mut self) {
        self.reset_tasks(Recurrence::Yearly);
    }

    /// Shared progression pathway for task rewards and achievement rewards.
    pub fn add_experience(&mut self, amount: u32) {
        self.player.grant_experience(amount);
    }

    /// Daily check-in driving the streak counter. Requests a deferred scan
    /// when the streak changed.
    pub fn check_in(&mut self, today: NaiveDate) {
        if self.stats.check_in(today) {
            self.pending_scans += 1;
        }
    }

    /// Unlock one achievement and grant its reward. No-op when unknown or
    /// already unlocked, so a reward can never be paid twice.
    pub fn unlock_achievement(&mut self, achievement_id: &str, now: DateTime<Utc>) {
        let Some(a) = self
            .achievements
            .iter_mut()
            .find(|a| a.id == achievement_id)
        else {
            return;
        };
        if a.unlocked {
            return;
        }
        a.unlocked = true;
        a.unlocked_at = Some(now);

        let reward = a.experience_reward;
        self.add_experience(reward);
    }

    /// Full re-scan of the catalog. Qualifiers are collected against the
    /// state as it stands when the scan starts, then unlocked in catalog
    /// order: experience granted by one unlock does not feed later clauses
    /// in the same pass, and no new scan is requested here, so chained
    /// level-based unlocks wait for the next external trigger.
    pub fn check_achievements(&mut self, now: DateTime<Utc>) -> Vec<String> {
        let qualifying: Vec<String> = self
            .achievements
            .iter()
            .filter(|a| !a.unlocked)
            .filter(|a| a.qualifies(&self.tasks, &self.player, &self.stats))
            .map(|a| a.id.clone())
            .collect();

        for id in &qualifying {
            self.unlock_achievement(id, now);
        }
        qualifying
    }

    /// Take one pending deferred-scan request, if any.
    pub fn take_pending_scan(&mut self) -> bool {
        if self.pending_scans > 0 {
            self.pending_scans -= 1;
            true
        } else {
            false
        }
    }
}
