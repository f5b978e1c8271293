//! Aggregate completion counters and the check-in streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Recurrence;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub daily_completed: u32,
    pub weekly_completed: u32,
    pub monthly_completed: u32,
    pub yearly_completed: u32,
    pub streak_days: u32,
    pub total_tasks_completed: u32,
    /// Local calendar date of the most recent check-in, if any.
    #[serde(default)]
    pub last_check_in: Option<NaiveDate>,
}

impl ProgressStats {
    /// Bump the per-recurrence counter and the overall total.
    pub fn record_completion(&mut self, recurrence: Recurrence) {
        match recurrence {
            Recurrence::Daily => self.daily_completed += 1,
            Recurrence::Weekly => self.weekly_completed += 1,
            Recurrence::Monthly => self.monthly_completed += 1,
            Recurrence::Yearly => self.yearly_completed += 1,
        }
        self.total_tasks_completed += 1;
    }

    /// Streak maintenance for an explicit daily check-in.
    ///
    /// Same-day repeats are no-ops; a check-in on the day after the last one
    /// extends the streak; any gap starts over at 1. Returns whether the
    /// streak changed.
    pub fn check_in(&mut self, today: NaiveDate) -> bool {
        match self.last_check_in {
            Some(last) if last == today => false,
            Some(last) if last.succ_opt() == Some(today) => {
                self.streak_days += 1;
                self.last_check_in = Some(today);
                true
            }
            _ => {
                self.streak_days = 1;
                self.last_check_in = Some(today);
                true
            }
        }
    }
}
