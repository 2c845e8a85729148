use super::*;
use matchday_core::Competitor;
use std::collections::VecDeque;

/// Scripted source for end-to-end round tests. `None` entries model
/// non-integer console input.
struct Scripted(VecDeque<Option<i64>>);

impl Scripted {
    fn new(codes: &[Option<i64>]) -> Self {
        Self(codes.iter().copied().collect())
    }
}

impl ResultSource for Scripted {
    fn next_code(&mut self) -> Option<i64> {
        self.0.pop_front().flatten()
    }
}

fn spec_roster() -> Roster {
    Roster::new(vec![
        Competitor::judge("Judge"),
        Competitor::new("C", 6),
        Competitor::new("D", 6),
        Competitor::new("A", 9),
        Competitor::new("B", 9),
    ])
    .unwrap()
}

fn points_by_name(roster: &Roster, name: &str) -> u32 {
    roster
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.points)
        .unwrap()
}

#[test]
fn test_single_match_first_team_wins() {
    // Teams (C,B) and (D,A); code 1 gives C and B three points each
    let mut roster = spec_roster();
    let matches = RoundRunner::new(Scripted::new(&[Some(1)])).run(&mut roster);

    assert_eq!(matches.len(), 1);
    assert_eq!(points_by_name(&roster, "C"), 9);
    assert_eq!(points_by_name(&roster, "B"), 12);
    assert_eq!(points_by_name(&roster, "D"), 6);
    assert_eq!(points_by_name(&roster, "A"), 9);
    assert_eq!(points_by_name(&roster, "Judge"), 0);
}

#[test]
fn test_single_match_draw() {
    let mut roster = spec_roster();
    RoundRunner::new(Scripted::new(&[Some(3)])).run(&mut roster);

    assert_eq!(points_by_name(&roster, "C"), 7);
    assert_eq!(points_by_name(&roster, "D"), 7);
    assert_eq!(points_by_name(&roster, "A"), 10);
    assert_eq!(points_by_name(&roster, "B"), 10);
}

#[test]
fn test_invalid_code_changes_nothing() {
    for code in [Some(0), Some(4), Some(-1), None] {
        let mut roster = spec_roster();
        RoundRunner::new(Scripted::new(&[code])).run(&mut roster);

        for name in ["C", "D", "A", "B"] {
            assert_eq!(points_by_name(&roster, name), points_by_name(&spec_roster(), name));
        }
    }
}

#[test]
fn test_invalid_code_skips_only_its_match() {
    // 9 competitors -> 4 pairs + 1 solo -> 2 pair matches + judge match
    let mut competitors = vec![Competitor::judge("Judge")];
    competitors.extend((0..9).map(|i| Competitor::new(&format!("P{}", i), i as u32)));
    let mut roster = Roster::new(competitors).unwrap();

    // First match invalid, second a draw, judge match won by the judge's side
    let matches = RoundRunner::new(Scripted::new(&[Some(9), Some(3), Some(1)])).run(&mut roster);
    assert_eq!(matches.len(), 3);

    let total: u32 = roster.iter().map(|c| c.points).sum();
    // Baseline 0..=8 sums to 36; draw adds 4, judge win adds 3
    assert_eq!(total, 36 + 4 + 3);
    assert_eq!(points_by_name(&roster, "Judge"), 3);
}

#[test]
fn test_judge_match_points_follow_result() {
    // 5 competitors -> 2 pairs + solo leftover vs judge
    let mut competitors = vec![Competitor::judge("Judge")];
    competitors.extend((0..5).map(|i| Competitor::new(&format!("P{}", i), i as u32)));
    let mut roster = Roster::new(competitors).unwrap();

    // Judge's team loses the final match: judge stays on zero
    let matches = RoundRunner::new(Scripted::new(&[Some(1), Some(2)])).run(&mut roster);
    assert_eq!(matches.len(), 2);
    assert_eq!(points_by_name(&roster, "Judge"), 0);

    // Leftover competitor (middle rank, P2) took the win
    assert_eq!(points_by_name(&roster, "P2"), 2 + 3);
}
