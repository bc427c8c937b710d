//! Championship forecast over the playoff field

use crate::models::PowerRanking;
use league_data::BracketMatchup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const CHAMPION_WEIGHT: f64 = 1000.0;
const SEED_SHARE: f64 = 0.4;
const POWER_SHARE: f64 = 0.6;
const SURVIVOR_BOOST: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContenderStatus {
    Champion,
    Eliminated,
    InTheHunt,
}

/// One qualified team's chance to win it all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipOdds {
    pub roster_id: u32,
    pub team_name: String,
    /// 1-based seed by power rank
    pub seed: u32,
    pub actual_rank: u32,
    pub power_score: f64,
    pub raw_weight: f64,
    /// Rounded percentage of the field's total weight
    pub win_probability: u32,
    pub status: ContenderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffForecast {
    pub playoff_spots: u32,
    pub playoff_start_week: u32,
    pub started: bool,
    /// Current playoff round once the playoffs have begun
    pub live_round: Option<u32>,
    pub champion: Option<u32>,
    /// Champion first, eliminated teams last, otherwise by win probability
    pub contenders: Vec<ChampionshipOdds>,
    /// Best teams below the playoff line
    pub in_the_hunt: Vec<PowerRanking>,
}

/// Inputs taken from league settings, already defaulted
#[derive(Debug, Clone, Copy)]
pub struct PlayoffParams {
    pub playoff_spots: u32,
    pub playoff_start_week: u32,
    pub last_scored_week: u32,
    pub in_the_hunt_count: usize,
}

impl PlayoffParams {
    pub fn started(&self) -> bool {
        self.last_scored_week >= self.playoff_start_week
    }
}

/// Roster ids that have lost a bracket game
pub fn eliminated_rosters(bracket: &[BracketMatchup]) -> HashSet<u32> {
    bracket.iter().filter_map(|game| game.l).collect()
}

/// Winner of the championship game
///
/// Uses the placement marker when the bracket carries one, otherwise the first
/// decided game in the final round.
pub fn bracket_champion(bracket: &[BracketMatchup]) -> Option<u32> {
    if bracket.iter().any(|game| game.p.is_some()) {
        return bracket.iter().find(|game| game.p == Some(1)).and_then(|game| game.w);
    }
    let final_round = bracket.iter().map(|game| game.r).max()?;
    bracket.iter().filter(|game| game.r == final_round).find_map(|game| game.w)
}

/// Forecast title odds for the teams above the playoff line
///
/// `rankings` must be in power-rank order.
pub fn forecast_playoffs(
    rankings: &[PowerRanking],
    bracket: &[BracketMatchup],
    params: PlayoffParams,
) -> PlayoffForecast {
    let spots = params.playoff_spots.max(1);
    let started = params.started();
    let eliminated = eliminated_rosters(bracket);
    let champion = bracket_champion(bracket);
    let boost = if started { SURVIVOR_BOOST } else { 1.0 };

    let weighted: Vec<(ContenderStatus, f64)> = rankings
        .iter()
        .take(spots as usize)
        .enumerate()
        .map(|(idx, team)| {
            if champion == Some(team.roster_id) {
                (ContenderStatus::Champion, CHAMPION_WEIGHT)
            } else if eliminated.contains(&team.roster_id) {
                (ContenderStatus::Eliminated, 0.0)
            } else {
                let seed_weight = (spots as f64 - idx as f64) / spots as f64;
                let power_weight = team.power_score / 100.0;
                (ContenderStatus::InTheHunt, (seed_weight * SEED_SHARE + power_weight * POWER_SHARE) * boost)
            }
        })
        .collect();

    let total: f64 = weighted.iter().map(|(_, raw)| raw).sum();

    let mut contenders: Vec<ChampionshipOdds> = rankings
        .iter()
        .zip(weighted)
        .enumerate()
        .map(|(idx, (team, (status, raw_weight)))| ChampionshipOdds {
            roster_id: team.roster_id,
            team_name: team.team_name.clone(),
            seed: idx as u32 + 1,
            actual_rank: team.actual_rank,
            power_score: team.power_score,
            raw_weight,
            win_probability: if total > 0.0 { (raw_weight / total * 100.0).round() as u32 } else { 0 },
            status,
        })
        .collect();

    contenders.sort_by(|a, b| {
        let tier = |status: ContenderStatus| match status {
            ContenderStatus::Champion => 0,
            ContenderStatus::InTheHunt => 1,
            ContenderStatus::Eliminated => 2,
        };
        tier(a.status).cmp(&tier(b.status)).then_with(|| b.win_probability.cmp(&a.win_probability))
    });

    let in_the_hunt = rankings
        .iter()
        .skip(spots as usize)
        .take(params.in_the_hunt_count)
        .cloned()
        .collect();

    PlayoffForecast {
        playoff_spots: spots,
        playoff_start_week: params.playoff_start_week,
        started,
        live_round: started.then(|| params.last_scored_week - params.playoff_start_week + 1),
        champion,
        contenders,
        in_the_hunt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(roster_id: u32, rank: u32, power_score: f64) -> PowerRanking {
        PowerRanking {
            roster_id,
            team_name: format!("Team {roster_id}"),
            owner_name: format!("owner{roster_id}"),
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
            actual_rank: rank,
            rank,
        }
    }

    fn field() -> Vec<PowerRanking> {
        vec![
            ranking(1, 1, 80.0),
            ranking(2, 2, 70.0),
            ranking(3, 3, 60.0),
            ranking(4, 4, 50.0),
            ranking(5, 5, 40.0),
        ]
    }

    fn params(last_scored_week: u32) -> PlayoffParams {
        PlayoffParams { playoff_spots: 4, playoff_start_week: 15, last_scored_week, in_the_hunt_count: 4 }
    }

    #[test]
    fn test_regular_season_forecast() {
        let forecast = forecast_playoffs(&field(), &[], params(10));

        assert!(!forecast.started);
        assert_eq!(forecast.live_round, None);
        assert_eq!(forecast.contenders.len(), 4);
        assert_eq!(forecast.contenders[0].roster_id, 1);
        assert!(forecast.contenders.iter().all(|c| c.status == ContenderStatus::InTheHunt));

        // seed 1: 1.0*0.4 + 0.8*0.6 = 0.88 of a 2.56 total
        assert_eq!(forecast.contenders[0].win_probability, 34);
        assert_eq!(forecast.in_the_hunt.len(), 1);
        assert_eq!(forecast.in_the_hunt[0].roster_id, 5);
    }

    #[test]
    fn test_eliminated_teams_sink() {
        let bracket = vec![
            BracketMatchup { r: 1, m: 1, t1: Some(1), t2: Some(4), w: Some(4), l: Some(1), p: None },
            BracketMatchup { r: 1, m: 2, t1: Some(2), t2: Some(3), w: None, l: None, p: None },
            BracketMatchup { r: 2, m: 3, t1: None, t2: None, w: None, l: None, p: Some(1) },
        ];
        let forecast = forecast_playoffs(&field(), &bracket, params(15));

        assert!(forecast.started);
        assert_eq!(forecast.live_round, Some(1));
        assert_eq!(forecast.champion, None);

        let last = forecast.contenders.last().unwrap();
        assert_eq!(last.roster_id, 1);
        assert_eq!(last.status, ContenderStatus::Eliminated);
        assert_eq!(last.win_probability, 0);
    }

    #[test]
    fn test_champion_first() {
        let bracket = vec![
            BracketMatchup { r: 1, m: 1, t1: Some(1), t2: Some(4), w: Some(1), l: Some(4), p: None },
            BracketMatchup { r: 1, m: 2, t1: Some(2), t2: Some(3), w: Some(3), l: Some(2), p: None },
            BracketMatchup { r: 2, m: 3, t1: Some(1), t2: Some(3), w: Some(3), l: Some(1), p: Some(1) },
        ];
        let forecast = forecast_playoffs(&field(), &bracket, params(17));

        assert_eq!(forecast.champion, Some(3));
        assert_eq!(forecast.contenders[0].roster_id, 3);
        assert_eq!(forecast.contenders[0].status, ContenderStatus::Champion);
        assert_eq!(forecast.contenders[0].win_probability, 100);
        assert_eq!(forecast.live_round, Some(3));
    }

    #[test]
    fn test_champion_without_placement_marker() {
        let bracket = vec![
            BracketMatchup { r: 1, m: 1, t1: Some(1), t2: Some(2), w: Some(2), l: Some(1), p: None },
            BracketMatchup { r: 2, m: 2, t1: Some(2), t2: Some(3), w: Some(2), l: Some(3), p: None },
        ];
        assert_eq!(bracket_champion(&bracket), Some(2));
        assert_eq!(bracket_champion(&[]), None);
    }

    #[test]
    fn test_empty_rankings() {
        let forecast = forecast_playoffs(&[], &[], params(3));
        assert!(forecast.contenders.is_empty());
        assert!(forecast.in_the_hunt.is_empty());
    }
}
