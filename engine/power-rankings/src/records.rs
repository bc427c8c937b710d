//! League records

use crate::names::find_owner;
use league_data::{Roster, User};
use serde::{Deserialize, Serialize};

pub const NO_RECORD_HOLDER: &str = "N/A";

/// Highest season points-for in the league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonHigh {
    /// None when the league has no rosters
    pub roster_id: Option<u32>,
    pub points_for: f64,
    pub owner_name: String,
}

/// Roster with the most points-for; the earliest listed roster wins ties
pub fn season_high(rosters: &[Roster], users: &[User]) -> SeasonHigh {
    let leader = rosters.iter().fold(None, |best: Option<&Roster>, roster| match best {
        Some(best) if best.points_for() >= roster.points_for() => Some(best),
        _ => Some(roster),
    });

    match leader {
        Some(roster) => SeasonHigh {
            roster_id: Some(roster.roster_id),
            points_for: roster.points_for(),
            owner_name: find_owner(roster, users)
                .and_then(User::display_name)
                .unwrap_or(NO_RECORD_HOLDER)
                .to_string(),
        },
        None => SeasonHigh { roster_id: None, points_for: 0.0, owner_name: NO_RECORD_HOLDER.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_data::RosterSettings;

    fn roster(roster_id: u32, owner_id: Option<&str>, fpts: i64, fpts_decimal: i64) -> Roster {
        Roster {
            roster_id,
            owner_id: owner_id.map(str::to_string),
            settings: RosterSettings { fpts, fpts_decimal, ..Default::default() },
            ..Default::default()
        }
    }

    fn user(user_id: &str, display_name: &str) -> User {
        User { user_id: user_id.to_string(), display_name: display_name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_highest_points_for_wins() {
        let rosters = vec![
            roster(1, Some("u1"), 1402, 10),
            roster(2, Some("u2"), 1402, 38),
            roster(3, Some("u3"), 1390, 99),
        ];
        let users = vec![user("u1", "alpha"), user("u2", "bravo")];

        let high = season_high(&rosters, &users);
        assert_eq!(high.roster_id, Some(2));
        assert!((high.points_for - 1402.38).abs() < 1e-9);
        assert_eq!(high.owner_name, "bravo");
    }

    #[test]
    fn test_tie_keeps_first_roster() {
        let rosters = vec![roster(4, None, 1200, 0), roster(5, Some("u5"), 1200, 0)];
        let high = season_high(&rosters, &[user("u5", "echo")]);
        assert_eq!(high.roster_id, Some(4));
        assert_eq!(high.owner_name, NO_RECORD_HOLDER);
    }

    #[test]
    fn test_empty_league() {
        let high = season_high(&[], &[]);
        assert_eq!(high.roster_id, None);
        assert_eq!(high.points_for, 0.0);
        assert_eq!(high.owner_name, "N/A");
    }
}
