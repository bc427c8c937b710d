//! Upstream record shapes
//!
//! Field names follow the fantasy-sports API's JSON. Unknown fields are ignored
//! and nullable collections deserialize to their empty value.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Combine an integer field and its hundredths field (`whole + fractional/100`)
pub fn combine_points(whole: i64, hundredths: i64) -> f64 {
    whole as f64 + hundredths as f64 / 100.0
}

/// League metadata and settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    #[serde(alias = "id")]
    pub league_id: String,

    pub name: String,

    pub season: String,

    /// pre_draft | drafting | in_season | complete
    #[serde(default)]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: LeagueSettings,

    #[serde(default, deserialize_with = "null_as_default")]
    pub scoring_settings: HashMap<String, f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub roster_positions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub leg: u32,

    /// Number of weeks with finalized results
    #[serde(default)]
    pub last_scored_leg: u32,

    #[serde(default, alias = "playoff_start_week")]
    pub playoff_week_start: u32,

    #[serde(default)]
    pub playoff_teams: Option<u32>,

    #[serde(default)]
    pub playoff_type: Option<u32>,

    #[serde(default)]
    pub trade_deadline: u32,

    #[serde(default)]
    pub num_teams: u32,

    #[serde(default, rename = "type")]
    pub league_type: u32,
}

impl League {
    /// Weeks officially scored so far (0 in the preseason)
    pub fn current_scored_week(&self) -> u32 {
        self.settings.last_scored_leg
    }

    pub fn is_trade_deadline_passed(&self) -> bool {
        self.current_scored_week() > self.settings.trade_deadline
    }

    /// Draft order is final once the season is over or has not started
    pub fn is_off_season(&self) -> bool {
        matches!(self.status.as_str(), "pre_draft" | "complete")
    }

    pub fn next_season(&self) -> Option<String> {
        self.season.trim().parse::<i32>().ok().map(|year| (year + 1).to_string())
    }
}

/// League member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

impl User {
    /// Custom team name, ignoring blank values
    pub fn team_name(&self) -> Option<&str> {
        self.metadata.team_name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }

    pub fn display_name(&self) -> Option<&str> {
        Some(self.display_name.trim()).filter(|name| !name.is_empty())
    }
}

/// A team in the league, keyed by a per-season roster id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,

    /// None for orphaned rosters
    #[serde(default)]
    pub owner_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: RosterSettings,
}

/// Running record as maintained by the league
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,

    #[serde(default)]
    pub losses: u32,

    #[serde(default)]
    pub ties: u32,

    #[serde(default)]
    pub fpts: i64,

    #[serde(default)]
    pub fpts_decimal: i64,

    #[serde(default)]
    pub fpts_against: i64,

    #[serde(default)]
    pub fpts_against_decimal: i64,

    #[serde(default)]
    pub ppts: Option<i64>,

    #[serde(default)]
    pub ppts_decimal: Option<i64>,
}

impl Roster {
    pub fn points_for(&self) -> f64 {
        combine_points(self.settings.fpts, self.settings.fpts_decimal)
    }

    pub fn points_against(&self) -> f64 {
        combine_points(self.settings.fpts_against, self.settings.fpts_against_decimal)
    }

    /// Optimal-lineup points, when the league tracks them
    pub fn potential_points(&self) -> Option<f64> {
        self.settings
            .ppts
            .map(|whole| combine_points(whole, self.settings.ppts_decimal.unwrap_or(0)))
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id.as_deref() == Some(user_id)
    }
}

/// One roster's entry in a week's matchups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    /// Entries sharing this id played each other; None on a bye
    #[serde(default)]
    pub matchup_id: Option<u32>,

    pub roster_id: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub points: f64,

    /// Commissioner override of `points`
    #[serde(default)]
    pub custom_points: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,

    #[serde(default)]
    pub players_points: Option<HashMap<String, f64>>,
}

impl Matchup {
    /// Authoritative point total for the week
    pub fn effective_points(&self) -> f64 {
        self.custom_points.unwrap_or(self.points)
    }

    pub fn player_points(&self, player_id: &str) -> Option<f64> {
        self.players_points.as_ref().and_then(|points| points.get(player_id).copied())
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|id| id == player_id)
    }
}

/// Winners bracket entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BracketMatchup {
    /// Round
    pub r: u32,

    /// Match id within the bracket
    #[serde(default)]
    pub m: u32,

    #[serde(default)]
    pub t1: Option<u32>,

    #[serde(default)]
    pub t2: Option<u32>,

    /// Winning roster id
    #[serde(default)]
    pub w: Option<u32>,

    /// Losing roster id
    #[serde(default)]
    pub l: Option<u32>,

    /// Placement decided by this game (1 = championship)
    #[serde(default)]
    pub p: Option<u32>,
}

/// Future draft pick that changed hands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradedPick {
    pub season: String,

    pub round: u32,

    /// Original owner
    pub roster_id: u32,

    #[serde(default)]
    pub previous_owner_id: Option<u32>,

    /// Current owner
    pub owner_id: u32,
}

/// Player catalogue entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NflPlayer {
    pub player_id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub position: Option<String>,

    #[serde(default)]
    pub team: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub injury_status: Option<String>,

    #[serde(default)]
    pub active: Option<bool>,
}

impl NflPlayer {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn plays(&self, position: &str) -> bool {
        self.position.as_deref() == Some(position)
    }
}

/// Current NFL calendar state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NflState {
    #[serde(default)]
    pub week: u32,

    #[serde(default)]
    pub display_week: u32,

    #[serde(default)]
    pub season: String,

    #[serde(default)]
    pub season_type: String,

    #[serde(default)]
    pub leg: u32,
}
