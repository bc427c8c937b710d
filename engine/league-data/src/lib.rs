//! # League Data
//!
//! Record shapes consumed from the fantasy-sports API (league, users, rosters,
//! weekly matchups, playoff bracket, traded picks, player catalogue, NFL state),
//! the season history they form, and the supplier seam used to load them.
//!
//! The [`LeagueLoader`] fans out all fetches concurrently and only hands a
//! [`LeagueSnapshot`] to callers once every required record is materialized.

pub mod error;
pub mod history;
pub mod loader;
pub mod models;
pub mod source;

pub use error::{LeagueDataError, Result};
pub use history::SeasonHistory;
pub use loader::{LeagueLoader, LeagueSnapshot};
pub use models::{
    BracketMatchup, League, LeagueSettings, Matchup, NflPlayer, NflState, Roster,
    RosterSettings, TradedPick, User, UserMetadata,
};
pub use source::{InMemorySource, LeagueSource, SnapshotSource};

/// Regular schedule length plus playoffs (weeks 1..=18)
pub const DEFAULT_SCHEDULE_WEEKS: u32 = 18;
