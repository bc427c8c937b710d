//! Display name resolution
//!
//! Team name: custom team name, then the owner's display name, then a
//! `Team <roster_id>` placeholder. Owner name: display name, then `Unknown`.

use league_data::{Roster, User};

pub const UNKNOWN_OWNER: &str = "Unknown";

/// Owner of a roster, if the roster is owned and the user is known
pub fn find_owner<'a>(roster: &Roster, users: &'a [User]) -> Option<&'a User> {
    users.iter().find(|user| roster.is_owned_by(&user.user_id))
}

pub fn team_name(roster_id: u32, owner: Option<&User>) -> String {
    let candidates = [owner.and_then(User::team_name), owner.and_then(User::display_name)];
    candidates
        .into_iter()
        .flatten()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Team {roster_id}"))
}

pub fn owner_name(owner: Option<&User>) -> String {
    owner.and_then(User::display_name).unwrap_or(UNKNOWN_OWNER).to_string()
}

/// Name lookups by roster id over one league's rosters and users
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    rosters: &'a [Roster],
    users: &'a [User],
}

impl<'a> NameResolver<'a> {
    pub fn new(rosters: &'a [Roster], users: &'a [User]) -> Self {
        Self { rosters, users }
    }

    pub fn roster(&self, roster_id: u32) -> Option<&'a Roster> {
        self.rosters.iter().find(|roster| roster.roster_id == roster_id)
    }

    pub fn owner(&self, roster_id: u32) -> Option<&'a User> {
        self.roster(roster_id).and_then(|roster| find_owner(roster, self.users))
    }

    pub fn team_name(&self, roster_id: u32) -> String {
        team_name(roster_id, self.owner(roster_id))
    }

    pub fn owner_name(&self, roster_id: u32) -> String {
        owner_name(self.owner(roster_id))
    }
}
