//! Upstream data suppliers
//!
//! [`LeagueSource`] is the seam between the dashboard and whatever produces the
//! league records. [`SnapshotSource`] reads a directory laid out like the API's
//! endpoint paths; [`InMemorySource`] holds records directly.

use crate::error::{LeagueDataError, Result};
use crate::models::{BracketMatchup, League, Matchup, NflPlayer, NflState, Roster, TradedPick, User};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Supplier of league records, one method per upstream contract
#[async_trait]
pub trait LeagueSource: Send + Sync {
    async fn league(&self) -> Result<League>;

    async fn users(&self) -> Result<Vec<User>>;

    async fn rosters(&self) -> Result<Vec<Roster>>;

    /// Entries for a 1-based week; empty if the week has no data
    async fn matchups(&self, week: u32) -> Result<Vec<Matchup>>;

    async fn winners_bracket(&self) -> Result<Vec<BracketMatchup>>;

    async fn traded_picks(&self) -> Result<Vec<TradedPick>>;

    /// Player catalogue keyed by player id
    async fn players(&self) -> Result<HashMap<String, NflPlayer>>;

    async fn nfl_state(&self) -> Result<NflState>;
}

/// File-backed source reading a league snapshot directory
///
/// ```text
/// <root>/league.json
/// <root>/users.json
/// <root>/rosters.json
/// <root>/matchups/<week>.json
/// <root>/winners_bracket.json
/// <root>/traded_picks.json
/// <root>/players.json
/// <root>/state.json
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    root: PathBuf,
}

impl SnapshotSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matchup_path(&self, week: u32) -> PathBuf {
        self.root.join("matchups").join(format!("{week}.json"))
    }

    /// Read and parse a file, `Ok(None)` if it does not exist
    async fn read_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Snapshot file not present: {:?}", path);
                return Ok(None);
            }
            Err(source) => return Err(LeagueDataError::Io { path: path.to_path_buf(), source }),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| LeagueDataError::Parse { path: path.to_path_buf(), source })
    }

    async fn read_required<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.root.join(file_name);
        self.read_optional(&path)
            .await?
            .ok_or_else(|| LeagueDataError::MissingRecord(path.display().to_string()))
    }

    async fn read_or_default<T: DeserializeOwned + Default>(&self, file_name: &str) -> Result<T> {
        let path = self.root.join(file_name);
        match self.read_optional(&path).await? {
            Some(value) => Ok(value),
            None => {
                warn!("{} missing from snapshot {:?}, using empty value", file_name, self.root);
                Ok(T::default())
            }
        }
    }
}

#[async_trait]
impl LeagueSource for SnapshotSource {
    async fn league(&self) -> Result<League> {
        self.read_required("league.json").await
    }

    async fn users(&self) -> Result<Vec<User>> {
        self.read_required("users.json").await
    }

    async fn rosters(&self) -> Result<Vec<Roster>> {
        self.read_required("rosters.json").await
    }

    async fn matchups(&self, week: u32) -> Result<Vec<Matchup>> {
        let path = self.matchup_path(week);
        // The API answers null for weeks it has nothing for
        let entries: Option<Option<Vec<Matchup>>> = self.read_optional(&path).await?;
        Ok(entries.flatten().unwrap_or_default())
    }

    async fn winners_bracket(&self) -> Result<Vec<BracketMatchup>> {
        self.read_or_default("winners_bracket.json").await
    }

    async fn traded_picks(&self) -> Result<Vec<TradedPick>> {
        self.read_or_default("traded_picks.json").await
    }

    async fn players(&self) -> Result<HashMap<String, NflPlayer>> {
        self.read_or_default("players.json").await
    }

    async fn nfl_state(&self) -> Result<NflState> {
        self.read_or_default("state.json").await
    }
}

/// Source holding every record in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub league: Option<League>,
    pub users: Vec<User>,
    pub rosters: Vec<Roster>,
    /// Week number -> entries
    pub matchups: HashMap<u32, Vec<Matchup>>,
    pub winners_bracket: Vec<BracketMatchup>,
    pub traded_picks: Vec<TradedPick>,
    pub players: HashMap<String, NflPlayer>,
    pub nfl_state: NflState,
    /// Weeks whose fetch should fail, for exercising degraded loads
    pub failing_weeks: Vec<u32>,
}

impl InMemorySource {
    pub fn new(league: League, users: Vec<User>, rosters: Vec<Roster>) -> Self {
        Self { league: Some(league), users, rosters, ..Default::default() }
    }

    pub fn with_week(mut self, week: u32, entries: Vec<Matchup>) -> Self {
        self.matchups.insert(week, entries);
        self
    }
}

#[async_trait]
impl LeagueSource for InMemorySource {
    async fn league(&self) -> Result<League> {
        self.league.clone().ok_or_else(|| LeagueDataError::MissingRecord("league".to_string()))
    }

    async fn users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn rosters(&self) -> Result<Vec<Roster>> {
        Ok(self.rosters.clone())
    }

    async fn matchups(&self, week: u32) -> Result<Vec<Matchup>> {
        if self.failing_weeks.contains(&week) {
            return Err(LeagueDataError::Source(format!("Failed to fetch matchups for week {week}")));
        }
        Ok(self.matchups.get(&week).cloned().unwrap_or_default())
    }

    async fn winners_bracket(&self) -> Result<Vec<BracketMatchup>> {
        Ok(self.winners_bracket.clone())
    }

    async fn traded_picks(&self) -> Result<Vec<TradedPick>> {
        Ok(self.traded_picks.clone())
    }

    async fn players(&self) -> Result<HashMap<String, NflPlayer>> {
        Ok(self.players.clone())
    }

    async fn nfl_state(&self) -> Result<NflState> {
        Ok(self.nfl_state.clone())
    }
}
