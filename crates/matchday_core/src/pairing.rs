//! Team formation and match pairing for a single round.
//!
//! Teams balance a low scorer against a high scorer: after a stable ascending
//! sort by points, the i-th lowest is paired with the i-th highest. An odd
//! competitor count leaves the middle-ranked competitor in a one-person team,
//! placed last. Matches then consume teams two at a time; if exactly one team
//! is left over, the judge steps in and plays it alone.

use serde::{Deserialize, Serialize};

use crate::competitor::CompetitorId;
use crate::roster::Roster;

/// One or two competitors playing together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<CompetitorId>,
}

impl Team {
    pub fn pair(low: CompetitorId, high: CompetitorId) -> Self {
        Self {
            members: vec![low, high],
        }
    }

    pub fn solo(id: CompetitorId) -> Self {
        Self { members: vec![id] }
    }
}

/// A fixture between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub team_one: Team,
    pub team_two: Team,
}

/// Partition the roster's non-judges into teams.
///
/// Produces ⌈n/2⌉ teams for n non-judge competitors, at most one of size 1.
/// The sort is stable: equal points keep their roster order, and the caller's
/// pre-construction shuffle is the only tie-breaking randomness.
pub fn form_teams(roster: &Roster) -> Vec<Team> {
    let mut ids = roster.non_judges();
    ids.sort_by_key(|&id| roster.get(id).points);

    let n = ids.len();
    let mut teams = Vec::with_capacity(n.div_ceil(2));
    for i in 0..n / 2 {
        teams.push(Team::pair(ids[i], ids[n - 1 - i]));
    }
    if n % 2 != 0 {
        teams.push(Team::solo(ids[n / 2]));
    }

    teams
}

/// Pair teams into matches, front to back.
///
/// When an odd team count leaves a single team unpaired, the judge plays it
/// as a one-person team. This applies whatever the leftover team's size is:
/// an odd count of two-person teams ends with the judge against a full pair.
pub fn pair_matches(judge: CompetitorId, teams: Vec<Team>) -> Vec<Match> {
    let mut matches = Vec::with_capacity(teams.len() / 2 + 1);
    let mut teams = teams.into_iter();

    loop {
        match (teams.next(), teams.next()) {
            (Some(team_one), Some(team_two)) => matches.push(Match { team_one, team_two }),
            (Some(leftover), None) => {
                matches.push(Match {
                    team_one: Team::solo(judge),
                    team_two: leftover,
                });
                break;
            }
            _ => break,
        }
    }

    matches
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
