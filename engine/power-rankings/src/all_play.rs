//! All-play records and actual standings

use crate::models::AllPlayRecord;
use league_data::{Matchup, Roster, SeasonHistory};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// One entry's all-play result against every other team that played that week
fn week_record(entry: &Matchup, entries: &[Matchup]) -> AllPlayRecord {
    let points = entry.effective_points();
    entries
        .iter()
        .filter(|other| other.roster_id != entry.roster_id)
        .map(|other| AllPlayRecord::versus(points, other.effective_points()))
        .sum()
}

/// Cumulative all-play records over weeks `1..=current_week`
///
/// Every listed roster gets a record, zeroed if it never played. Entries for
/// rosters outside `rosters` still count as opponents but keep no record.
pub fn all_play_records(
    rosters: &[Roster],
    history: &SeasonHistory,
    current_week: u32,
) -> HashMap<u32, AllPlayRecord> {
    let initial: HashMap<u32, AllPlayRecord> =
        rosters.iter().map(|roster| (roster.roster_id, AllPlayRecord::default())).collect();

    history
        .scored_weeks(current_week)
        .filter(|(_, entries)| !entries.is_empty())
        .fold(initial, |mut totals, (week, entries)| {
            for entry in entries {
                match totals.get_mut(&entry.roster_id) {
                    Some(total) => *total += week_record(entry, entries),
                    None => debug!("Week {}: roster {} is not in the league", week, entry.roster_id),
                }
            }
            totals
        })
}

/// Actual standings order: wins, then points-for, then roster id
pub fn standings_order(a: &Roster, b: &Roster) -> Ordering {
    b.settings
        .wins
        .cmp(&a.settings.wins)
        .then_with(|| b.points_for().total_cmp(&a.points_for()))
        .then_with(|| a.roster_id.cmp(&b.roster_id))
}

/// 1-based actual standings rank per roster id
pub fn actual_ranks(rosters: &[Roster]) -> HashMap<u32, u32> {
    let mut ordered: Vec<&Roster> = rosters.iter().collect();
    ordered.sort_by(|a, b| standings_order(a, b));

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, roster)| (roster.roster_id, idx as u32 + 1))
        .collect()
}
