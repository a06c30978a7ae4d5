//! Time trigger editor
//!
//! Single screen, no step machine: a time-of-day text field plus seven
//! weekday toggles. Day indices run 0=Mon..6=Sun.

use crate::trigger::TimeTrigger;

/// Weekday labels indexed by day number
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Editable time trigger draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeDraft {
    /// `HH:MM` by placeholder hint; the format is not enforced here
    pub time_of_day: String,
    days: Vec<u8>,
}

impl TimeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the time-of-day text
    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time_of_day = time.into();
    }

    /// Toggle a weekday; returns whether it is now selected
    ///
    /// The selection stays sorted ascending. Indices above 6 are ignored.
    pub fn toggle_day(&mut self, day: u8) -> bool {
        if day > 6 {
            return false;
        }
        match self.days.binary_search(&day) {
            Ok(index) => {
                self.days.remove(index);
                false
            }
            Err(index) => {
                self.days.insert(index, day);
                true
            }
        }
    }

    /// The selected days, sorted ascending
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    pub fn is_selected(&self, day: u8) -> bool {
        self.days.binary_search(&day).is_ok()
    }

    /// Human summary of the selection
    ///
    /// Empty means the trigger fires every day; a full selection reads
    /// "All days"; anything else reports the count.
    pub fn describe_days(&self) -> String {
        match self.days.len() {
            0 => "Every day".to_string(),
            7 => "All days".to_string(),
            1 => "1 day".to_string(),
            n => format!("{n} days"),
        }
    }

    /// Build the trigger, normalizing an empty selection to absent days
    pub fn emit(&self) -> TimeTrigger {
        TimeTrigger {
            time_of_day: self.time_of_day.clone(),
            days_of_week: if self.days.is_empty() {
                None
            } else {
                Some(self.days.clone())
            },
        }
    }
}
