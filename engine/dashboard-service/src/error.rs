//! Error types for the dashboard service

use league_data::LeagueDataError;
use power_rankings::RankingError;
use thiserror::Error;

/// Result type for dashboard service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("League data error: {0}")]
    Data(#[from] LeagueDataError),

    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Week {week} is outside the {schedule_weeks}-week schedule")]
    InvalidWeek { week: u32, schedule_weeks: u32 },
}
