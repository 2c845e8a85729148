//! Match outcomes and point application.

use serde::{Deserialize, Serialize};

use crate::pairing::{Match, Team};
use crate::roster::Roster;

/// Points awarded to each member of a winning team
pub const WIN_POINTS: u32 = 3;

/// Points awarded to each member of both teams on a draw
pub const DRAW_POINTS: u32 = 1;

/// Valid outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    TeamOneWin,
    TeamTwoWin,
    Draw,
}

impl MatchOutcome {
    /// Map a raw result code to an outcome: 1 team one wins, 2 team two
    /// wins, 3 draw. Any other code is invalid and awards nothing.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::TeamOneWin),
            2 => Some(Self::TeamTwoWin),
            3 => Some(Self::Draw),
            _ => None,
        }
    }
}

/// Apply an outcome's points to the roster. The judge earns points like
/// anyone else when fielded as a one-person team.
pub fn apply_outcome(roster: &mut Roster, fixture: &Match, outcome: MatchOutcome) {
    match outcome {
        MatchOutcome::TeamOneWin => award_team(roster, &fixture.team_one, WIN_POINTS),
        MatchOutcome::TeamTwoWin => award_team(roster, &fixture.team_two, WIN_POINTS),
        MatchOutcome::Draw => {
            award_team(roster, &fixture.team_one, DRAW_POINTS);
            award_team(roster, &fixture.team_two, DRAW_POINTS);
        }
    }
}

fn award_team(roster: &mut Roster, team: &Team, points: u32) {
    for &id in &team.members {
        roster.award(id, points);
    }
}
