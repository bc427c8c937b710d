//! Configuration for the ranking engine and derived analytics

use crate::error::RankingError;
use league_data::DEFAULT_SCHEDULE_WEEKS;
use serde::{Deserialize, Serialize};

/// Constants used by the ranking engine and the analytics built on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Schedule length; weeks past this never feed the all-play record
    pub schedule_weeks: u32,

    /// Player points must exceed this to count as a top performance
    pub highlight_min_points: f64,

    /// Number of top performances reported per week
    pub highlight_count: usize,

    /// Playoff field size when the league does not set one
    pub default_playoff_teams: u32,

    /// Playoff start week when the league does not set one
    pub default_playoff_start_week: u32,

    /// Teams listed as "in the hunt" after the playoff line
    pub in_the_hunt_count: usize,

    /// Rookie draft rounds tracked on the draft board
    pub draft_rounds: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            schedule_weeks: DEFAULT_SCHEDULE_WEEKS,
            highlight_min_points: 15.0,
            highlight_count: 3,
            default_playoff_teams: 6,
            default_playoff_start_week: 15,
            in_the_hunt_count: 4,
            draft_rounds: 4,
        }
    }
}

impl RankingConfig {
    /// Check the values are usable
    pub fn validate(&self) -> Result<(), RankingError> {
        if self.schedule_weeks == 0 {
            return Err(RankingError::InvalidConfig("schedule_weeks must be at least 1".to_string()));
        }
        if self.default_playoff_teams == 0 {
            return Err(RankingError::InvalidConfig(
                "default_playoff_teams must be at least 1".to_string(),
            ));
        }
        if !self.highlight_min_points.is_finite() {
            return Err(RankingError::InvalidConfig(format!(
                "Invalid highlight_min_points: {}",
                self.highlight_min_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RankingConfig::default();
        assert_eq!(config.schedule_weeks, 18);
        assert_eq!(config.highlight_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: RankingConfig = serde_json::from_str(r#"{"draft_rounds": 3}"#).unwrap();
        assert_eq!(config.draft_rounds, 3);
        assert_eq!(config.default_playoff_teams, 6);
    }

    #[test]
    fn test_zero_schedule_rejected() {
        let config = RankingConfig { schedule_weeks: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(RankingError::InvalidConfig(_))));
    }
}
