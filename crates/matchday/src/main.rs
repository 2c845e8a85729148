//! Matchday CLI
//!
//! Pair the built-in roster into teams and matches for one round, read the
//! results from stdin, and print the final scores.

use matchday::{stdin_source, RoundReport, RoundRunner};
use matchday_core::{Competitor, Roster};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::env;
use std::process::ExitCode;

fn print_usage() {
    println!("Matchday Round Runner");
    println!();
    println!("Usage:");
    println!("  matchday [--seed N] [--json]");
    println!();
    println!("Options:");
    println!("  --seed N, -s N   Seed the roster shuffle for a reproducible draw");
    println!("  --json           Also print the final standings as JSON");
    println!();
    println!("One result code is read from stdin per match:");
    println!("  1 - first team wins, 2 - second team wins, 3 - draw");
    println!("Anything else skips the match without awarding points.");
}

/// The fixed roster this round is played with.
fn seed_roster() -> Vec<Competitor> {
    vec![
        Competitor::judge("Kiban"),
        Competitor::new("Artem Malyshev", 9),
        Competitor::new("Artem Petrov", 9),
        Competitor::new("Ivan Stepanov", 6),
        Competitor::new("Yan", 6),
        Competitor::new("Niko", 6),
        Competitor::new("Arto", 6),
        Competitor::new("Dimitri Molokanov", 3),
        Competitor::new("Dimitri", 3),
        Competitor::new("Vasiliy", 3),
        Competitor::new("Timofey", 3),
        Competitor::new("Georgii", 0),
        Competitor::new("Irakli", 0),
        Competitor::new("Valerian", 0),
    ]
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(s) => seed = Some(s),
                        Err(_) => {
                            eprintln!("Error: --seed expects an integer, got {}", args[i + 1]);
                            return ExitCode::FAILURE;
                        }
                    }
                    i += 1;
                }
            }
            "--json" => json = true,
            "help" | "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    // Randomness stays out here; the round itself is deterministic for a
    // fixed roster order.
    let mut competitors = seed_roster();
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    competitors.shuffle(&mut rng);

    let mut roster = match Roster::new(competitors) {
        Ok(roster) => roster,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let matches = RoundRunner::new(stdin_source()).run(&mut roster);

    if json {
        let report = RoundReport::from_round(&roster, &matches);
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize standings: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
