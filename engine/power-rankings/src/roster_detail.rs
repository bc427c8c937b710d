//! Per-team roster breakdown and player game logs

use crate::names::NameResolver;
use league_data::{NflPlayer, Roster, SeasonHistory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Positions shown on a roster page, in display order
const POSITION_GROUPS: [(&str, &[&str]); 5] = [
    ("Quarterbacks", &["QB"]),
    ("Running Backs", &["RB"]),
    ("Wide Receivers", &["WR"]),
    ("Tight Ends", &["TE"]),
    ("Kickers & Special Teams", &["K", "DEF"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionGroup {
    pub label: String,
    pub positions: Vec<String>,
    pub players: Vec<NflPlayer>,
}

/// Rostered players grouped by position, each position sorted by last name
///
/// Players missing from the catalogue or at other positions are left out.
pub fn position_groups(roster: &Roster, players: &HashMap<String, NflPlayer>) -> Vec<PositionGroup> {
    let rostered: Vec<&NflPlayer> = roster.players.iter().filter_map(|id| players.get(id)).collect();

    POSITION_GROUPS
        .iter()
        .map(|(label, positions)| {
            let players = positions
                .iter()
                .flat_map(|position| {
                    let mut at_position: Vec<&NflPlayer> =
                        rostered.iter().copied().filter(|player| player.plays(position)).collect();
                    at_position.sort_by(|a, b| a.last_name.cmp(&b.last_name));
                    at_position
                })
                .cloned()
                .collect();

            PositionGroup {
                label: label.to_string(),
                positions: positions.iter().map(|p| p.to_string()).collect(),
                players,
            }
        })
        .collect()
}

/// Availability label shown next to a rostered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAvailability {
    FreeAgent,
    Inactive,
    Injured(String),
    ByeWeek,
    Active,
}

impl PlayerAvailability {
    pub fn of(player: &NflPlayer) -> Self {
        if player.team.as_deref().map_or(true, str::is_empty) {
            return PlayerAvailability::FreeAgent;
        }
        match (player.status.as_deref(), player.injury_status.as_deref()) {
            (Some("Inactive"), _) => PlayerAvailability::Inactive,
            (_, Some(injury)) if !injury.is_empty() => PlayerAvailability::Injured(injury.to_string()),
            (Some("Bye"), _) => PlayerAvailability::ByeWeek,
            _ => PlayerAvailability::Active,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlayerAvailability::FreeAgent => "Free Agent",
            PlayerAvailability::Inactive => "Inactive",
            PlayerAvailability::Injured(status) => status,
            PlayerAvailability::ByeWeek => "Bye Week",
            PlayerAvailability::Active => "In Active Roster",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Scored points that week
    Active,
    /// Rostered but scored nothing
    DidNotPlay,
    /// Not on any roster that played that week
    ByeOrBench,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub week: u32,
    pub status: GameStatus,
    pub points: f64,
    /// Opposing team name; None on a bye
    pub opponent: Option<String>,
    /// Whether the player's fantasy team won; None on a bye
    pub is_win: Option<bool>,
}

/// A player's week-by-week log for weeks `1..=through_week`
pub fn player_game_log(
    player_id: &str,
    history: &SeasonHistory,
    names: &NameResolver<'_>,
    through_week: u32,
) -> Vec<GameLogEntry> {
    history
        .scored_weeks(through_week)
        .map(|(week, entries)| {
            let Some(entry) = entries.iter().find(|entry| entry.has_player(player_id)) else {
                return GameLogEntry {
                    week,
                    status: GameStatus::ByeOrBench,
                    points: 0.0,
                    opponent: None,
                    is_win: None,
                };
            };

            let points = entry.player_points(player_id).unwrap_or(0.0);
            let opponent = entry.matchup_id.and_then(|matchup_id| {
                entries
                    .iter()
                    .find(|other| other.matchup_id == Some(matchup_id) && other.roster_id != entry.roster_id)
            });
            let opponent_points = opponent.map_or(0.0, |other| other.effective_points());

            GameLogEntry {
                week,
                status: if points > 0.0 { GameStatus::Active } else { GameStatus::DidNotPlay },
                points,
                opponent: opponent.map(|other| names.team_name(other.roster_id)),
                is_win: Some(entry.effective_points() > opponent_points),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub total: f64,
    /// Average over weeks with points
    pub average: f64,
    pub max: f64,
    pub games_scored: u32,
}

/// Season totals from a game log; None for an empty log
pub fn season_stats(log: &[GameLogEntry]) -> Option<PlayerSeasonStats> {
    if log.is_empty() {
        return None;
    }

    let scored: Vec<f64> = log.iter().map(|g| g.points).filter(|points| *points > 0.0).collect();
    let total: f64 = scored.iter().sum();
    let games_scored = scored.len() as u32;

    Some(PlayerSeasonStats {
        total,
        average: total / games_scored.max(1) as f64,
        max: log.iter().map(|g| g.points).fold(f64::NEG_INFINITY, f64::max),
        games_scored,
    })
}
