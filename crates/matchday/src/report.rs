//! Standings and fixture reporting.

use matchday_core::{Match, Roster, Team};
use serde::{Deserialize, Serialize};

/// Human-readable team label, e.g. "Georgii & Artem Petrov".
pub fn team_label(roster: &Roster, team: &Team) -> String {
    team.members
        .iter()
        .map(|&id| roster.get(id).name.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Final scoreboard in roster storage order.
pub fn scoreboard(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str("\n=== Current Scores ===\n");
    for competitor in roster.iter() {
        out.push_str(&competitor.to_string());
        out.push('\n');
    }
    out
}

/// Print scoreboard to stdout.
pub fn print_scoreboard(roster: &Roster) {
    print!("{}", scoreboard(roster));
}

/// Machine-readable summary of a completed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub matches: Vec<MatchEntry>,
    pub standings: Vec<StandingEntry>,
}

/// A single fixture, teams by member name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub team_one: Vec<String>,
    pub team_two: Vec<String>,
}

/// One competitor's final line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingEntry {
    pub name: String,
    pub judge: bool,
    pub points: u32,
}

impl RoundReport {
    /// Snapshot the round after results have been applied.
    pub fn from_round(roster: &Roster, matches: &[Match]) -> Self {
        let member_names = |team: &Team| -> Vec<String> {
            team.members
                .iter()
                .map(|&id| roster.get(id).name.clone())
                .collect()
        };

        Self {
            matches: matches
                .iter()
                .map(|m| MatchEntry {
                    team_one: member_names(&m.team_one),
                    team_two: member_names(&m.team_two),
                })
                .collect(),
            standings: roster
                .iter()
                .map(|c| StandingEntry {
                    name: c.name.clone(),
                    judge: c.is_judge,
                    points: c.points,
                })
                .collect(),
        }
    }
}
