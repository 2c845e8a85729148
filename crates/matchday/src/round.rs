//! Round orchestration.
//!
//! One strictly linear pass: form teams, pair matches, collect one result
//! per match, report standings. No state is reused between rounds because
//! there is only ever one round per process.

use matchday_core::{apply_outcome, form_teams, pair_matches, Match, MatchOutcome, Roster};

use crate::input::ResultSource;
use crate::report::{print_scoreboard, team_label};

/// Drives a single round over a roster, pulling results from `source`.
pub struct RoundRunner<S> {
    source: S,
}

impl<S: ResultSource> RoundRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run the round to completion and return the fixtures that were played.
    pub fn run(&mut self, roster: &mut Roster) -> Vec<Match> {
        println!("\n=== Pairing Teams ===");
        let teams = form_teams(roster);
        println!("Formed Teams:");
        for team in &teams {
            println!("  {}", team_label(roster, team));
        }

        let matches = pair_matches(roster.judge(), teams);
        println!("\nMatches:");
        for fixture in &matches {
            println!(
                "  {} vs {}",
                team_label(roster, &fixture.team_one),
                team_label(roster, &fixture.team_two)
            );
        }

        self.collect_results(roster, &matches);
        print_scoreboard(roster);

        matches
    }

    /// One blocking prompt/read per match, in fixture order. Invalid input
    /// skips the match without awarding points.
    fn collect_results(&mut self, roster: &mut Roster, matches: &[Match]) {
        for fixture in matches {
            println!(
                "\nEnter result for match: {} vs {}",
                team_label(roster, &fixture.team_one),
                team_label(roster, &fixture.team_two)
            );
            println!("1 - First team wins, 2 - Second team wins, 3 - Draw");

            match self.source.next_code().and_then(MatchOutcome::from_code) {
                Some(outcome) => apply_outcome(roster, fixture, outcome),
                None => println!("Invalid input, skipping result."),
            }
        }
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
