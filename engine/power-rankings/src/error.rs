//! Error types for the ranking engine

use thiserror::Error;

/// Errors raised while setting up the ranking engine
///
/// Ranking itself never fails; insufficient input yields an empty result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error("Invalid ranking configuration: {0}")]
    InvalidConfig(String),
}
