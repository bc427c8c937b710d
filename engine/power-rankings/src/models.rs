use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Hypothetical record against the whole field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllPlayRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl AllPlayRecord {
    /// Outcome of one team's score against one other team's score
    pub fn versus(points: f64, opponent_points: f64) -> Self {
        if points > opponent_points {
            Self { wins: 1, ..Self::default() }
        } else if points < opponent_points {
            Self { losses: 1, ..Self::default() }
        } else {
            Self { ties: 1, ..Self::default() }
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Wins over games played, with the denominator floored at 1
    pub fn win_pct(&self) -> f64 {
        self.wins as f64 / self.games().max(1) as f64
    }

    /// Power score in [0, 100]
    pub fn power_score(&self) -> f64 {
        self.win_pct() * 100.0
    }
}

impl Add for AllPlayRecord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            ties: self.ties + other.ties,
        }
    }
}

impl AddAssign for AllPlayRecord {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for AllPlayRecord {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// One team's row in the power rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRanking {
    pub roster_id: u32,
    pub team_name: String,
    pub owner_name: String,
    pub avatar: Option<String>,

    /// Actual record as kept by the league
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,

    pub fpts: f64,
    pub fpts_against: f64,

    pub all_play_wins: u32,
    pub all_play_losses: u32,
    pub all_play_ties: u32,

    /// All-play win percentage x 100
    pub power_score: f64,

    /// Position in the actual standings (wins, then points-for)
    pub actual_rank: u32,

    /// Position by power score (then points-for)
    pub rank: u32,
}

impl PowerRanking {
    pub fn all_play(&self) -> AllPlayRecord {
        AllPlayRecord {
            wins: self.all_play_wins,
            losses: self.all_play_losses,
            ties: self.all_play_ties,
        }
    }

    /// Rank delta between standings and true strength; 0 means balanced
    pub fn luck_index(&self) -> i64 {
        self.actual_rank as i64 - self.rank as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versus_outcomes() {
        assert_eq!(AllPlayRecord::versus(120.0, 100.0).wins, 1);
        assert_eq!(AllPlayRecord::versus(90.5, 100.0).losses, 1);
        assert_eq!(AllPlayRecord::versus(100.0, 100.0).ties, 1);
    }

    #[test]
    fn test_zero_games_power_score_is_zero() {
        let record = AllPlayRecord::default();
        assert_eq!(record.games(), 0);
        assert_eq!(record.win_pct(), 0.0);
        assert_eq!(record.power_score(), 0.0);
    }

    #[test]
    fn test_record_sum() {
        let total: AllPlayRecord = [
            AllPlayRecord::versus(1.0, 0.0),
            AllPlayRecord::versus(1.0, 0.0),
            AllPlayRecord::versus(0.0, 1.0),
            AllPlayRecord::versus(1.0, 1.0),
        ]
        .into_iter()
        .sum();

        assert_eq!(total, AllPlayRecord { wins: 2, losses: 1, ties: 1 });
        assert_eq!(total.power_score(), 50.0);
    }
}
