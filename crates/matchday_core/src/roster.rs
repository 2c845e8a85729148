//! Roster construction and access.
//!
//! A roster is the ordered list of everyone present for the round. Exactly
//! one entry must be flagged as the judge; construction fails otherwise.

use thiserror::Error;

use crate::competitor::{Competitor, CompetitorId};

/// Roster validation failures. Both are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("no judge found in the competitor list")]
    NoJudge,
    #[error("more than one judge found in the competitor list")]
    MultipleJudges,
}

/// Ordered collection of competitors with exactly one judge.
#[derive(Debug, Clone)]
pub struct Roster {
    competitors: Vec<Competitor>,
    judge: CompetitorId,
}

impl Roster {
    /// Validate and store the competitor list, caching the judge's id.
    pub fn new(competitors: Vec<Competitor>) -> Result<Self, RosterError> {
        let mut judges = competitors
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_judge)
            .map(|(i, _)| CompetitorId(i));

        let judge = judges.next().ok_or(RosterError::NoJudge)?;
        if judges.next().is_some() {
            return Err(RosterError::MultipleJudges);
        }

        Ok(Self { competitors, judge })
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Competitors in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.iter()
    }

    pub fn get(&self, id: CompetitorId) -> &Competitor {
        &self.competitors[id.0]
    }

    pub fn judge(&self) -> CompetitorId {
        self.judge
    }

    /// Ids of everyone who actually competes, in storage order.
    pub fn non_judges(&self) -> Vec<CompetitorId> {
        (0..self.competitors.len())
            .map(CompetitorId)
            .filter(|&id| !self.competitors[id.0].is_judge)
            .collect()
    }

    /// Add points to a single competitor.
    pub fn award(&mut self, id: CompetitorId, points: u32) {
        self.competitors[id.0].points += points;
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
