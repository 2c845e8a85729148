use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a competitor within its roster.
///
/// Teams and matches store ids rather than copies, so point updates made
/// through the roster are visible everywhere an id is held. Two competitors
/// may share a name; the id is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetitorId(pub usize);

/// A tournament participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    /// Running point total, only ever increased during a round
    pub points: u32,
    /// Judges do not compete, except when absorbing a leftover team
    pub is_judge: bool,
}

impl Competitor {
    pub fn new(name: &str, points: u32) -> Self {
        Self {
            name: name.to_string(),
            points,
            is_judge: false,
        }
    }

    pub fn judge(name: &str) -> Self {
        Self {
            name: name.to_string(),
            points: 0,
            is_judge: true,
        }
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_judge { " (Judge)" } else { "" };
        write!(f, "{}{} - Points: {}", self.name, marker, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_judge_marker() {
        let judge = Competitor::judge("Kiban");
        assert_eq!(judge.to_string(), "Kiban (Judge) - Points: 0");

        let player = Competitor::new("Yan", 6);
        assert_eq!(player.to_string(), "Yan - Points: 6");
    }
}
