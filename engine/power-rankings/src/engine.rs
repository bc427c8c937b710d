use crate::all_play::{actual_ranks, all_play_records};
use crate::config::RankingConfig;
use crate::draft::{build_draft_board, DraftBoard};
use crate::error::RankingError;
use crate::models::{AllPlayRecord, PowerRanking};
use crate::names::{find_owner, owner_name, team_name, NameResolver};
use crate::playoffs::{forecast_playoffs, PlayoffForecast, PlayoffParams};
use crate::records::{season_high, SeasonHigh};
use crate::roster_detail::{
    player_game_log, position_groups, season_stats, GameLogEntry, PlayerAvailability,
    PlayerSeasonStats, PositionGroup,
};
use crate::summaries::{summarize_week, top_performers, MatchupSummary, TopPerformer};
use league_data::{LeagueSnapshot, Roster, SeasonHistory, User};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

/// One team's roster page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterDetail {
    pub roster_id: u32,
    pub team_name: String,
    pub owner_name: String,
    pub points_for: f64,
    /// Optimal-lineup points, when the league tracks them
    pub potential_points: Option<f64>,
    pub groups: Vec<PositionGroup>,
}

/// One player's season on a roster page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub player_id: String,
    pub player_name: String,
    pub availability: PlayerAvailability,
    pub game_log: Vec<GameLogEntry>,
    pub stats: Option<PlayerSeasonStats>,
}

/// Power ranking engine
///
/// Stateless apart from its configuration; every call recomputes from the
/// inputs it is given.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankingConfig,
}

/// Power order: power score, then points-for, then roster id
fn power_order(a: &PowerRanking, b: &PowerRanking) -> Ordering {
    b.power_score
        .total_cmp(&a.power_score)
        .then_with(|| b.fpts.total_cmp(&a.fpts))
        .then_with(|| a.roster_id.cmp(&b.roster_id))
}

impl RankingEngine {
    pub fn new(config: RankingConfig) -> Result<Self, RankingError> {
        info!("Creating ranking engine ({} week schedule)", config.schedule_weeks);
        config.validate()?;
        info!("Ranking engine created successfully");
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Rank every roster by all-play strength through `current_week`
    ///
    /// Returns an empty list while data is still missing: no rosters, no
    /// users, no history, or nothing scored yet.
    pub fn compute(
        &self,
        rosters: &[Roster],
        users: &[User],
        history: &SeasonHistory,
        current_week: u32,
    ) -> Vec<PowerRanking> {
        if rosters.is_empty() || users.is_empty() || history.is_empty() || current_week == 0 {
            debug!(
                "Skipping rankings: {} rosters, {} users, {} weeks, current week {}",
                rosters.len(),
                users.len(),
                history.len(),
                current_week
            );
            return Vec::new();
        }

        let scored_through = current_week.min(self.config.schedule_weeks);
        info!(
            "Computing power rankings for {} teams through week {}...",
            rosters.len(),
            scored_through
        );

        let records = all_play_records(rosters, history, scored_through);
        let standings = actual_ranks(rosters);

        let mut rankings: Vec<PowerRanking> = rosters
            .iter()
            .map(|roster| {
                let record = records.get(&roster.roster_id).copied().unwrap_or_default();
                let actual_rank = standings.get(&roster.roster_id).copied().unwrap_or_default();
                build_ranking(roster, find_owner(roster, users), record, actual_rank)
            })
            .collect();

        rankings.sort_by(power_order);
        for (idx, ranking) in rankings.iter_mut().enumerate() {
            ranking.rank = idx as u32 + 1;
        }

        if let Some(leader) = rankings.first() {
            debug!("Power leader: {} ({:.1})", leader.team_name, leader.power_score);
        }
        info!("Power rankings computed: {} teams ranked", rankings.len());
        rankings
    }

    /// Rankings for a loaded snapshot through `week`
    pub fn rank_snapshot(&self, snapshot: &LeagueSnapshot, week: u32) -> Vec<PowerRanking> {
        self.compute(&snapshot.rosters, &snapshot.users, &snapshot.history, week)
    }

    /// Head-to-head games for one week
    pub fn summarize_week(&self, snapshot: &LeagueSnapshot, week: u32) -> Vec<MatchupSummary> {
        let names = NameResolver::new(&snapshot.rosters, &snapshot.users);
        summarize_week(snapshot.week(week), &names)
    }

    pub fn top_performers(&self, snapshot: &LeagueSnapshot, week: u32) -> Vec<TopPerformer> {
        let names = NameResolver::new(&snapshot.rosters, &snapshot.users);
        top_performers(
            snapshot.week(week),
            &snapshot.players,
            &names,
            self.config.highlight_min_points,
            self.config.highlight_count,
        )
    }

    /// Season points-for leader
    pub fn season_high(&self, snapshot: &LeagueSnapshot) -> SeasonHigh {
        season_high(&snapshot.rosters, &snapshot.users)
    }

    /// Championship odds, using the league's playoff settings where set
    pub fn forecast_playoffs(&self, snapshot: &LeagueSnapshot, rankings: &[PowerRanking]) -> PlayoffForecast {
        let settings = &snapshot.league.settings;
        let params = PlayoffParams {
            playoff_spots: settings
                .playoff_teams
                .filter(|teams| *teams > 0)
                .unwrap_or(self.config.default_playoff_teams),
            playoff_start_week: match settings.playoff_week_start {
                0 => self.config.default_playoff_start_week,
                week => week,
            },
            last_scored_week: snapshot.current_week(),
            in_the_hunt_count: self.config.in_the_hunt_count,
        };
        forecast_playoffs(rankings, &snapshot.winners_bracket, params)
    }

    /// Next season's rookie draft order
    pub fn draft_board(&self, snapshot: &LeagueSnapshot, rankings: &[PowerRanking]) -> DraftBoard {
        let season = snapshot.league.next_season();
        build_draft_board(
            rankings,
            &snapshot.traded_picks,
            season.as_deref(),
            snapshot.league.is_off_season(),
            self.config.draft_rounds,
        )
    }

    pub fn roster_detail(&self, snapshot: &LeagueSnapshot, roster_id: u32) -> Option<RosterDetail> {
        let roster = snapshot.roster(roster_id)?;
        let owner = find_owner(roster, &snapshot.users);
        Some(RosterDetail {
            roster_id,
            team_name: team_name(roster_id, owner),
            owner_name: owner_name(owner),
            points_for: roster.points_for(),
            potential_points: roster.potential_points(),
            groups: position_groups(roster, &snapshot.players),
        })
    }

    /// Game log and season stats up to the NFL display week
    pub fn player_card(&self, snapshot: &LeagueSnapshot, player_id: &str) -> Option<PlayerCard> {
        let player = snapshot.players.get(player_id)?;
        let names = NameResolver::new(&snapshot.rosters, &snapshot.users);
        let through_week = match snapshot.nfl_state.display_week {
            0 => self.config.schedule_weeks,
            week => week,
        };

        let game_log = player_game_log(player_id, &snapshot.history, &names, through_week);
        let stats = season_stats(&game_log);
        Some(PlayerCard {
            player_id: player_id.to_string(),
            player_name: player.display_name(),
            availability: PlayerAvailability::of(player),
            game_log,
            stats,
        })
    }
}

fn build_ranking(roster: &Roster, owner: Option<&User>, record: AllPlayRecord, actual_rank: u32) -> PowerRanking {
    PowerRanking {
        roster_id: roster.roster_id,
        team_name: team_name(roster.roster_id, owner),
        owner_name: owner_name(owner),
        avatar: owner.and_then(|user| user.avatar.clone()),
        wins: roster.settings.wins,
        losses: roster.settings.losses,
        ties: roster.settings.ties,
        fpts: roster.points_for(),
        fpts_against: roster.points_against(),
        all_play_wins: record.wins,
        all_play_losses: record.losses,
        all_play_ties: record.ties,
        power_score: record.power_score(),
        actual_rank,
        rank: 0,
    }
}
