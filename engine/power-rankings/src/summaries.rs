//! Head-to-head summaries and weekly top performers

use crate::names::NameResolver;
use league_data::{Matchup, NflPlayer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const FREE_AGENT: &str = "Free Agent";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScore {
    pub roster_id: u32,
    pub team_name: String,
    pub points: f64,
}

/// A scheduled head-to-head game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSummary {
    pub matchup_id: u32,
    pub team1: TeamScore,
    pub team2: TeamScore,
    /// None on an exact tie
    pub winner: Option<u32>,
    pub margin: f64,
}

impl MatchupSummary {
    fn new(matchup_id: u32, team1: TeamScore, team2: TeamScore) -> Self {
        let winner = if team1.points > team2.points {
            Some(team1.roster_id)
        } else if team2.points > team1.points {
            Some(team2.roster_id)
        } else {
            None
        };
        let margin = (team1.points - team2.points).abs();
        Self { matchup_id, team1, team2, winner, margin }
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self.winner {
            Some(id) if id == self.team1.roster_id => Some(&self.team1.team_name),
            Some(_) => Some(&self.team2.team_name),
            None => None,
        }
    }

    /// One line of narrative context, e.g. `A (120.4) vs B (99.0) - Result: A Won`
    pub fn result_line(&self) -> String {
        let result = match self.winner_name() {
            Some(name) => format!("{name} Won"),
            None => "Tie".to_string(),
        };
        format!(
            "{} ({:.1}) vs {} ({:.1}) - Result: {}",
            self.team1.team_name, self.team1.points, self.team2.team_name, self.team2.points, result
        )
    }
}

/// Pair a week's entries into head-to-head games, ordered by matchup id
///
/// Byes (no matchup id) and groups that are not exactly two entries are skipped.
pub fn summarize_week(entries: &[Matchup], names: &NameResolver<'_>) -> Vec<MatchupSummary> {
    let mut groups: BTreeMap<u32, Vec<&Matchup>> = BTreeMap::new();
    for entry in entries {
        if let Some(matchup_id) = entry.matchup_id {
            groups.entry(matchup_id).or_default().push(entry);
        }
    }

    groups
        .into_iter()
        .filter_map(|(matchup_id, games)| match games.as_slice() {
            [first, second] => Some(MatchupSummary::new(
                matchup_id,
                team_score(first, names),
                team_score(second, names),
            )),
            _ => None,
        })
        .collect()
}

fn team_score(entry: &Matchup, names: &NameResolver<'_>) -> TeamScore {
    TeamScore {
        roster_id: entry.roster_id,
        team_name: names.team_name(entry.roster_id),
        points: entry.effective_points(),
    }
}

/// The closest game of the week (first one on equal margins)
pub fn headline_matchup(summaries: &[MatchupSummary]) -> Option<&MatchupSummary> {
    summaries.iter().min_by(|a, b| a.margin.total_cmp(&b.margin))
}

/// Structured head-to-head context handed to the narrative writer
pub fn recap_context(summaries: &[MatchupSummary]) -> String {
    summaries.iter().map(MatchupSummary::result_line).collect::<Vec<_>>().join("; ")
}

/// A standout individual performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub player_id: String,
    pub player_name: String,
    pub points: f64,
    pub owner_name: String,
}

/// Players scoring strictly more than `min_points` in a week, best first
pub fn top_performers(
    entries: &[Matchup],
    players: &HashMap<String, NflPlayer>,
    names: &NameResolver<'_>,
    min_points: f64,
    limit: usize,
) -> Vec<TopPerformer> {
    let mut performers: Vec<TopPerformer> = entries
        .iter()
        .flat_map(|entry| {
            let owner_name = names
                .owner(entry.roster_id)
                .and_then(|user| user.display_name())
                .unwrap_or(FREE_AGENT)
                .to_string();
            entry
                .players_points
                .iter()
                .flatten()
                .filter(move |(_, points)| **points > min_points)
                .filter_map(move |(player_id, &points)| {
                    let player = players.get(player_id)?;
                    Some(TopPerformer {
                        player_id: player_id.clone(),
                        player_name: player.display_name(),
                        points,
                        owner_name: owner_name.clone(),
                    })
                })
        })
        .collect();

    performers.sort_by(|a, b| b.points.total_cmp(&a.points).then_with(|| a.player_id.cmp(&b.player_id)));
    performers.truncate(limit);
    performers
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_data::{Roster, User, UserMetadata};

    fn league() -> (Vec<Roster>, Vec<User>) {
        let rosters = (1..=4)
            .map(|id| Roster { roster_id: id, owner_id: Some(format!("u{id}")), ..Default::default() })
            .collect();
        let users = (1..=3)
            .map(|id| User {
                user_id: format!("u{id}"),
                display_name: format!("owner{id}"),
                avatar: None,
                metadata: UserMetadata { team_name: Some(format!("Squad {id}")) },
            })
            .collect();
        (rosters, users)
    }

    fn entry(roster_id: u32, matchup_id: Option<u32>, points: f64) -> Matchup {
        Matchup { matchup_id, roster_id, points, ..Default::default() }
    }

    #[test]
    fn test_summaries_pair_by_matchup_id() {
        let (rosters, users) = league();
        let names = NameResolver::new(&rosters, &users);
        let week = vec![
            entry(3, Some(2), 88.0),
            entry(1, Some(1), 120.5),
            entry(4, Some(2), 91.25),
            entry(2, Some(1), 99.0),
            entry(5, None, 70.0),
        ];

        let summaries = summarize_week(&week, &names);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].matchup_id, 1);
        assert_eq!(summaries[0].winner, Some(1));
        assert_eq!(summaries[0].winner_name(), Some("Squad 1"));
        assert!((summaries[0].margin - 21.5).abs() < 1e-9);
        assert_eq!(summaries[1].winner, Some(4));
        assert_eq!(summaries[1].team2.team_name, "Team 4");
    }

    #[test]
    fn test_incomplete_group_skipped() {
        let (rosters, users) = league();
        let names = NameResolver::new(&rosters, &users);
        let week = vec![entry(1, Some(1), 100.0), entry(2, Some(2), 90.0), entry(3, Some(2), 80.0), entry(4, Some(2), 70.0)];
        assert!(summarize_week(&week, &names).is_empty());
    }

    #[test]
    fn test_headline_is_closest_game() {
        let (rosters, users) = league();
        let names = NameResolver::new(&rosters, &users);
        let week = vec![
            entry(1, Some(1), 140.0),
            entry(2, Some(1), 80.0),
            entry(3, Some(2), 101.0),
            entry(4, Some(2), 100.5),
        ];

        let summaries = summarize_week(&week, &names);
        assert_eq!(headline_matchup(&summaries).map(|s| s.matchup_id), Some(2));
        assert!(headline_matchup(&[]).is_none());
    }

    #[test]
    fn test_recap_context_lines() {
        let (rosters, users) = league();
        let names = NameResolver::new(&rosters, &users);
        let week = vec![
            entry(1, Some(1), 120.44),
            entry(2, Some(1), 99.0),
            entry(3, Some(2), 100.0),
            entry(4, Some(2), 100.0),
        ];

        let context = recap_context(&summarize_week(&week, &names));
        assert_eq!(
            context,
            "Squad 1 (120.4) vs Squad 2 (99.0) - Result: Squad 1 Won; \
             Squad 3 (100.0) vs Team 4 (100.0) - Result: Tie"
        );
    }

    #[test]
    fn test_top_performers_threshold_and_limit() {
        let (rosters, users) = league();
        let names = NameResolver::new(&rosters, &users);

        let mut players = HashMap::new();
        for (id, first, last) in [("10", "Josh", "Allen"), ("20", "Bijan", "Robinson"), ("30", "Puka", "Nacua"), ("40", "Ja'Marr", "Chase")] {
            players.insert(
                id.to_string(),
                NflPlayer {
                    player_id: id.to_string(),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    ..Default::default()
                },
            );
        }

        let mut first = entry(1, Some(1), 120.0);
        first.players_points = Some(HashMap::from([
            ("10".to_string(), 31.2),
            ("20".to_string(), 15.0),
            ("99".to_string(), 40.0),
        ]));
        let mut second = entry(4, Some(1), 110.0);
        second.players_points = Some(HashMap::from([
            ("30".to_string(), 22.4),
            ("40".to_string(), 18.9),
        ]));

        let top = top_performers(&[first, second], &players, &names, 15.0, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].player_name, "Josh Allen");
        assert_eq!(top[0].owner_name, "owner1");
        assert_eq!(top[1].player_name, "Puka Nacua");
        // Roster 4's owner is not a league member
        assert_eq!(top[1].owner_name, FREE_AGENT);
    }
}
