//! Rookie draft order and pick inventory

use crate::models::PowerRanking;
use league_data::TradedPick;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl DraftGrade {
    pub fn from_value(value_score: u32) -> Self {
        match value_score {
            v if v > 150 => DraftGrade::APlus,
            v if v > 120 => DraftGrade::A,
            v if v > 90 => DraftGrade::B,
            v if v > 70 => DraftGrade::C,
            _ => DraftGrade::D,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftGrade::APlus => "A+",
            DraftGrade::A => "A",
            DraftGrade::B => "B",
            DraftGrade::C => "C",
            DraftGrade::D => "D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub season: String,
    pub round: u32,
    /// Team the pick originally belonged to
    pub original_roster_id: u32,
    pub label: String,
    pub weight: u32,
}

/// Picks a team currently owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftCapital {
    pub picks: Vec<DraftPick>,
    pub value_score: u32,
    pub grade: DraftGrade,
}

impl Default for DraftCapital {
    fn default() -> Self {
        Self { picks: Vec::new(), value_score: 0, grade: DraftGrade::D }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSlot {
    /// 1-based draft position
    pub pick: u32,
    pub roster_id: u32,
    pub team_name: String,
    pub power_score: f64,
    pub capital: DraftCapital,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftBoard {
    pub season: Option<String>,
    /// Locked order (off-season) rather than a projection
    pub official: bool,
    pub slots: Vec<DraftSlot>,
}

/// Weight of a pick; earlier rounds are worth more
pub fn pick_weight(round: u32, rounds: u32) -> u32 {
    (rounds + 1).saturating_sub(round) * 10
}

/// Assign every team's own picks for `season` to their current owners
pub fn draft_capital(
    rankings: &[PowerRanking],
    traded_picks: &[TradedPick],
    season: &str,
    rounds: u32,
) -> HashMap<u32, DraftCapital> {
    let mut capital: HashMap<u32, DraftCapital> =
        rankings.iter().map(|team| (team.roster_id, DraftCapital::default())).collect();

    for team in rankings {
        for round in 1..=rounds {
            let owner = traded_picks
                .iter()
                .find(|p| p.season == season && p.round == round && p.roster_id == team.roster_id)
                .map(|p| p.owner_id)
                .unwrap_or(team.roster_id);

            let Some(entry) = capital.get_mut(&owner) else {
                warn!("{} round {} pick of roster {} owned by unknown roster {}", season, round, team.roster_id, owner);
                continue;
            };

            let weight = pick_weight(round, rounds);
            entry.value_score += weight;
            entry.picks.push(DraftPick {
                season: season.to_string(),
                round,
                original_roster_id: team.roster_id,
                label: format!("{season} Round {round} ({})", team.team_name),
                weight,
            });
        }
    }

    for entry in capital.values_mut() {
        entry.grade = DraftGrade::from_value(entry.value_score);
    }
    capital
}

/// Draft order (weakest power score first) with each team's pick inventory
///
/// `rankings` must be in power-rank order; equal power scores keep that order.
pub fn build_draft_board(
    rankings: &[PowerRanking],
    traded_picks: &[TradedPick],
    season: Option<&str>,
    official: bool,
    rounds: u32,
) -> DraftBoard {
    let mut order: Vec<&PowerRanking> = rankings.iter().collect();
    order.sort_by(|a, b| a.power_score.total_cmp(&b.power_score));

    let mut capital = match season {
        Some(season) => draft_capital(rankings, traded_picks, season, rounds),
        None => {
            warn!("League season is not numeric; draft capital not assigned");
            HashMap::new()
        }
    };

    let slots = order
        .into_iter()
        .enumerate()
        .map(|(idx, team)| DraftSlot {
            pick: idx as u32 + 1,
            roster_id: team.roster_id,
            team_name: team.team_name.clone(),
            power_score: team.power_score,
            capital: capital.remove(&team.roster_id).unwrap_or_default(),
        })
        .collect();

    DraftBoard { season: season.map(str::to_string), official, slots }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(roster_id: u32, power_score: f64) -> PowerRanking {
        PowerRanking {
            roster_id,
            team_name: format!("Team {roster_id}"),
            owner_name: String::new(),
            avatar: None,
            wins: 0,
            losses: 0,
            ties: 0,
            fpts: 0.0,
            fpts_against: 0.0,
            all_play_wins: 0,
            all_play_losses: 0,
            all_play_ties: 0,
            power_score,
            actual_rank: 0,
            rank: 0,
        }
    }

    fn traded(round: u32, roster_id: u32, owner_id: u32) -> TradedPick {
        TradedPick {
            season: "2026".to_string(),
            round,
            roster_id,
            previous_owner_id: Some(roster_id),
            owner_id,
        }
    }

    #[test]
    fn test_grades() {
        assert_eq!(DraftGrade::from_value(151), DraftGrade::APlus);
        assert_eq!(DraftGrade::from_value(150), DraftGrade::A);
        assert_eq!(DraftGrade::from_value(100), DraftGrade::B);
        assert_eq!(DraftGrade::from_value(90), DraftGrade::C);
        assert_eq!(DraftGrade::from_value(70), DraftGrade::D);
        assert_eq!(DraftGrade::APlus.label(), "A+");
    }

    #[test]
    fn test_pick_weights() {
        assert_eq!(pick_weight(1, 4), 40);
        assert_eq!(pick_weight(4, 4), 10);
        assert_eq!(pick_weight(5, 4), 0);
    }

    #[test]
    fn test_untraded_board() {
        let rankings = vec![ranking(1, 90.0), ranking(2, 50.0), ranking(3, 10.0)];
        let board = build_draft_board(&rankings, &[], Some("2026"), false, 4);

        let order: Vec<u32> = board.slots.iter().map(|s| s.roster_id).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert_eq!(board.slots[0].pick, 1);

        let capital = &board.slots[0].capital;
        assert_eq!(capital.picks.len(), 4);
        assert_eq!(capital.value_score, 100);
        assert_eq!(capital.grade, DraftGrade::B);
        assert_eq!(capital.picks[0].label, "2026 Round 1 (Team 3)");
    }

    #[test]
    fn test_traded_picks_move_to_owner() {
        let rankings = vec![ranking(1, 90.0), ranking(2, 10.0)];
        let picks = vec![traded(1, 2, 1), traded(2, 2, 1), traded(1, 1, 42), traded(3, 2, 2)];

        let capital = draft_capital(&rankings, &picks, "2026", 4);

        // Team 1: own R2-R4 plus team 2's R1 and R2; own R1 went to an unknown roster
        assert_eq!(capital[&1].picks.len(), 5);
        assert_eq!(capital[&1].value_score, 30 + 20 + 10 + 40 + 30);
        assert_eq!(capital[&1].grade, DraftGrade::A);
        assert_eq!(capital[&2].picks.len(), 2);
        assert_eq!(capital[&2].value_score, 30);
        assert_eq!(capital[&2].grade, DraftGrade::D);
    }

    #[test]
    fn test_other_season_trades_ignored() {
        let rankings = vec![ranking(1, 90.0), ranking(2, 10.0)];
        let mut pick = traded(1, 2, 1);
        pick.season = "2027".to_string();

        let capital = draft_capital(&rankings, &[pick], "2026", 4);
        assert_eq!(capital[&1].picks.len(), 4);
        assert_eq!(capital[&2].picks.len(), 4);
    }

    #[test]
    fn test_board_without_season() {
        let rankings = vec![ranking(1, 90.0)];
        let board = build_draft_board(&rankings, &[], None, true, 4);
        assert!(board.official);
        assert_eq!(board.season, None);
        assert!(board.slots[0].capital.picks.is_empty());
    }
}
