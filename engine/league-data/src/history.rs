//! Season matchup history indexed by week

use crate::models::Matchup;
use serde::{Deserialize, Serialize};

/// Per-week matchup entries for a season, week 1 first
///
/// Weeks without data are stored as empty sets, so `len()` is the schedule
/// length that was fetched rather than the number of weeks played.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonHistory {
    weeks: Vec<Vec<Matchup>>,
}

impl SeasonHistory {
    pub fn new(weeks: Vec<Vec<Matchup>>) -> Self {
        Self { weeks }
    }

    /// Entries for a 1-based week; empty for week 0 or weeks beyond the history
    pub fn week(&self, week: u32) -> &[Matchup] {
        week.checked_sub(1)
            .and_then(|idx| self.weeks.get(idx as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Weeks `1..=current_week` that exist in the history, as `(week, entries)`
    pub fn scored_weeks(&self, current_week: u32) -> impl Iterator<Item = (u32, &[Matchup])> {
        self.weeks
            .iter()
            .take(current_week as usize)
            .enumerate()
            .map(|(idx, entries)| (idx as u32 + 1, entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Number of stored weeks that carry at least one entry
    pub fn weeks_with_data(&self) -> usize {
        self.weeks.iter().filter(|entries| !entries.is_empty()).count()
    }
}

impl From<Vec<Vec<Matchup>>> for SeasonHistory {
    fn from(weeks: Vec<Vec<Matchup>>) -> Self {
        Self::new(weeks)
    }
}
