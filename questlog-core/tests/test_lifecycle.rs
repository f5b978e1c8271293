//! End-to-end scenario: a week of usage, snapshot save/load in between.

use chrono::{NaiveDate, Utc};
use questlog_core::{AppState, Difficulty, Recurrence, TaskDraft, TaskPatch};

fn draft(title: &str, recurrence: Recurrence, category: &str, xp: u32) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        recurrence,
        difficulty: Difficulty::Medium,
        category: category.to_string(),
        experience: xp,
    }
}

/// Drain pending deferred scans the way the host does after persisting.
fn run_deferred_scans(state: &mut AppState) {
    while state.take_pending_scan() {
        state.check_achievements(Utc::now());
    }
}

#[test]
fn test_week_of_usage() {
    let mut state = AppState::new();
    let now = Utc::now();

    let run = state.add_task(draft("morning run", Recurrence::Daily, "health", 25), now);
    let review = state.add_task(draft("weekly review", Recurrence::Weekly, "work", 60), now);
    state.add_task(draft("call parents", Recurrence::Weekly, "social", 40), now);

    let mut day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    for _ in 0..7 {
        state.check_in(day);
        state.complete_task(&run, now);
        run_deferred_scans(&mut state);
        state.reset_daily_tasks();
        day = day.succ_opt().unwrap();
    }
    state.complete_task(&review, now);
    run_deferred_scans(&mut state);

    // 7 daily completions + 1 weekly, plus first_task (50) and streak_7 (200).
    assert_eq!(state.stats.daily_completed, 7);
    assert_eq!(state.stats.weekly_completed, 1);
    assert_eq!(state.stats.total_tasks_completed, 8);
    assert_eq!(state.stats.streak_days, 7);
    assert_eq!(state.player.total_experience, 7 * 25 + 60 + 50 + 200);

    let unlocked: Vec<&str> = state
        .achievements
        .iter()
        .filter(|a| a.unlocked)
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(unlocked, ["first_task", "streak_7"]);

    // Snapshot round trip mid-session.
    let json = serde_json::to_string_pretty(&state).unwrap();
    let mut restored: AppState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.player, state.player);
    assert_eq!(restored.tasks, state.tasks);
    assert_eq!(restored.achievements, state.achievements);
    assert_eq!(restored.stats, state.stats);

    // The restored state keeps going: patch, complete, delete.
    let patch = TaskPatch {
        experience: Some(100),
        ..TaskPatch::default()
    };
    restored.update_task(&run, &patch);
    restored.complete_task(&run, now);
    run_deferred_scans(&mut restored);
    assert_eq!(
        restored.player.total_experience,
        state.player.total_experience + 100
    );

    restored.delete_task(&review);
    assert!(restored.tasks.iter().all(|t| t.id != review));
}

#[test]
fn test_daily_master_over_ten_periods() {
    let mut state = AppState::new();
    let now = Utc::now();
    let id = state.add_task(draft("stretch", Recurrence::Daily, "health", 10), now);

    for _ in 0..10 {
        state.complete_task(&id, now);
        run_deferred_scans(&mut state);
        state.reset_daily_tasks();
    }

    assert_eq!(state.stats.daily_completed, 10);
    // The task collection only ever holds one completed daily task at a
    // time, so the count-based clause never sees 10 at once: daily_master
    // reads completed tasks, not the period counters.
    let daily_master = state
        .achievements
        .iter()
        .find(|a| a.id == "daily_master")
        .unwrap();
    assert!(!daily_master.unlocked);
}
