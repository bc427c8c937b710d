//! Serializable dashboard report

use chrono::{DateTime, Utc};
use power_rankings::{
    DraftBoard, MatchupSummary, PlayoffForecast, PowerRanking, SeasonHigh, TopPerformer,
};
use serde::{Deserialize, Serialize};

/// An upcoming head-to-head game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub matchup_id: u32,
    pub home_roster_id: u32,
    pub home: String,
    pub away_roster_id: u32,
    pub away: String,
}

impl From<&MatchupSummary> for Pairing {
    fn from(summary: &MatchupSummary) -> Self {
        Self {
            matchup_id: summary.matchup_id,
            home_roster_id: summary.team1.roster_id,
            home: summary.team1.team_name.clone(),
            away_roster_id: summary.team2.roster_id,
            away: summary.team2.team_name.clone(),
        }
    }
}

/// Everything the dashboard shows for one scored week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub league_name: String,
    pub season: String,
    /// Week the rankings were computed for; 0 before anything is scored
    pub current_week: u32,
    /// Week shown on the scoreboard, never below 1
    pub scoreboard_week: u32,
    pub generated_at: DateTime<Utc>,
    pub trade_deadline_passed: bool,
    pub rankings: Vec<PowerRanking>,
    pub scoreboard: Vec<MatchupSummary>,
    pub upcoming: Vec<Pairing>,
    pub headline: Option<MatchupSummary>,
    /// Head-to-head results handed to the recap writer
    pub recap_context: String,
    pub top_performers: Vec<TopPerformer>,
    pub season_high: SeasonHigh,
    pub playoffs: PlayoffForecast,
    pub draft: DraftBoard,
}

impl DashboardReport {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
