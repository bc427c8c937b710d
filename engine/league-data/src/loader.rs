//! Concurrent loading of a full league snapshot

use crate::error::Result;
use crate::history::SeasonHistory;
use crate::models::{BracketMatchup, League, Matchup, NflPlayer, NflState, Roster, TradedPick, User};
use crate::source::LeagueSource;
use crate::DEFAULT_SCHEDULE_WEEKS;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Every record the dashboard needs, fully materialized
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub league: League,
    pub users: Vec<User>,
    pub rosters: Vec<Roster>,
    pub history: SeasonHistory,
    pub winners_bracket: Vec<BracketMatchup>,
    pub traded_picks: Vec<TradedPick>,
    pub players: HashMap<String, NflPlayer>,
    pub nfl_state: NflState,
}

impl LeagueSnapshot {
    pub fn current_week(&self) -> u32 {
        self.league.current_scored_week()
    }

    /// Entries for a 1-based week
    pub fn week(&self, week: u32) -> &[Matchup] {
        self.history.week(week)
    }

    pub fn roster(&self, roster_id: u32) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.roster_id == roster_id)
    }
}

/// Loads a [`LeagueSnapshot`] from a [`LeagueSource`]
pub struct LeagueLoader {
    source: Arc<dyn LeagueSource>,
    schedule_weeks: u32,
}

impl LeagueLoader {
    pub fn new(source: Arc<dyn LeagueSource>) -> Self {
        Self { source, schedule_weeks: DEFAULT_SCHEDULE_WEEKS }
    }

    pub fn with_schedule_weeks(mut self, schedule_weeks: u32) -> Self {
        self.schedule_weeks = schedule_weeks;
        self
    }

    pub fn schedule_weeks(&self) -> u32 {
        self.schedule_weeks
    }

    /// Fetch every record concurrently
    ///
    /// League, users, rosters, bracket, traded picks, players and NFL state
    /// must all succeed. A failing week fetch degrades to an empty week.
    pub async fn load(&self) -> Result<LeagueSnapshot> {
        info!("Loading league snapshot ({} week schedule)", self.schedule_weeks);

        let source = self.source.as_ref();
        let (league, users, rosters, winners_bracket, traded_picks, players, nfl_state) = tokio::try_join!(
            source.league(),
            source.users(),
            source.rosters(),
            source.winners_bracket(),
            source.traded_picks(),
            source.players(),
            source.nfl_state(),
        )?;

        info!(
            "Loaded league '{}' season {}: {} users, {} rosters, {} players",
            league.name,
            league.season,
            users.len(),
            rosters.len(),
            players.len()
        );

        let history = self.load_history().await;
        info!("Loaded {} of {} weeks with matchup data", history.weeks_with_data(), history.len());

        Ok(LeagueSnapshot {
            league,
            users,
            rosters,
            history,
            winners_bracket,
            traded_picks,
            players,
            nfl_state,
        })
    }

    /// Fetch weeks `1..=schedule_weeks` concurrently
    pub async fn load_history(&self) -> SeasonHistory {
        let fetches = (1..=self.schedule_weeks).map(|week| async move {
            match self.source.matchups(week).await {
                Ok(entries) => {
                    debug!("Week {}: {} matchup entries", week, entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Failed to fetch matchups for week {}: {}", week, e);
                    Vec::new()
                }
            }
        });

        SeasonHistory::new(join_all(fetches).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeagueDataError;
    use crate::source::InMemorySource;

    fn test_source() -> InMemorySource {
        let league = League {
            league_id: "L1".to_string(),
            name: "Test League".to_string(),
            season: "2025".to_string(),
            ..Default::default()
        };
        let users = vec![User { user_id: "u1".to_string(), display_name: "alpha".to_string(), ..Default::default() }];
        let rosters = vec![Roster { roster_id: 1, owner_id: Some("u1".to_string()), ..Default::default() }];

        InMemorySource::new(league, users, rosters)
            .with_week(1, vec![Matchup { matchup_id: Some(1), roster_id: 1, points: 101.2, ..Default::default() }])
            .with_week(3, vec![Matchup { matchup_id: Some(1), roster_id: 1, points: 96.0, ..Default::default() }])
    }

    #[tokio::test]
    async fn test_load_full_schedule() {
        let loader = LeagueLoader::new(Arc::new(test_source()));
        let snapshot = loader.load().await.unwrap();

        assert_eq!(snapshot.history.len(), DEFAULT_SCHEDULE_WEEKS as usize);
        assert_eq!(snapshot.history.weeks_with_data(), 2);
        assert_eq!(snapshot.week(1)[0].points, 101.2);
        assert!(snapshot.week(2).is_empty());
        assert_eq!(snapshot.roster(1).and_then(|r| r.owner_id.as_deref()), Some("u1"));
        assert!(snapshot.roster(2).is_none());
    }

    #[tokio::test]
    async fn test_failing_week_degrades_to_empty() {
        let mut source = test_source();
        source.failing_weeks = vec![3];

        let loader = LeagueLoader::new(Arc::new(source)).with_schedule_weeks(4);
        let snapshot = loader.load().await.unwrap();

        assert_eq!(snapshot.history.len(), 4);
        assert!(snapshot.week(3).is_empty());
        assert_eq!(snapshot.history.weeks_with_data(), 1);
    }

    #[tokio::test]
    async fn test_missing_league_aborts_load() {
        let source = InMemorySource::default();
        let loader = LeagueLoader::new(Arc::new(source));
        assert!(matches!(loader.load().await, Err(LeagueDataError::MissingRecord(_))));
    }
}
