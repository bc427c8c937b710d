//! # Power Rankings
//!
//! Ranks fantasy teams by "true strength": each team's all-play record, the
//! result it would have had playing every other team every scored week, rather
//! than only its scheduled opponent. The actual standings rank is computed
//! independently from the league's running win totals so the two can be
//! compared (the luck index).
//!
//! Alongside the rankings this crate derives the rest of the dashboard's
//! numbers: head-to-head summaries, top performers, league records, the
//! championship forecast, the draft board and roster detail.

pub mod all_play;
pub mod config;
pub mod draft;
pub mod engine;
pub mod error;
pub mod models;
pub mod names;
pub mod playoffs;
pub mod records;
pub mod roster_detail;
pub mod summaries;


pub use all_play::{actual_ranks, all_play_records};
pub use config::RankingConfig;
pub use draft::{DraftBoard, DraftCapital, DraftGrade, DraftPick, DraftSlot};
pub use engine::{PlayerCard, RankingEngine, RosterDetail};
pub use error::RankingError;
pub use models::{AllPlayRecord, PowerRanking};
pub use names::NameResolver;
pub use playoffs::{ChampionshipOdds, ContenderStatus, PlayoffForecast};
pub use records::SeasonHigh;
pub use roster_detail::{GameLogEntry, GameStatus, PlayerAvailability, PlayerSeasonStats, PositionGroup};
pub use summaries::{MatchupSummary, TeamScore, TopPerformer};

/// Current version of the power rankings engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
