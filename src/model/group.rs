//! Technique groups and per-group score containers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The three candidate MAR technique groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Group {
    /// Intervention on surface water courses
    G1,
    /// Well and borehole recharge
    G2,
    /// Surface infiltration
    G3,
}

impl Group {
    /// Declaration order, which is also the ranking tie-break order.
    pub const ALL: [Group; 3] = [Group::G1, Group::G2, Group::G3];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::G1 => "G1",
            Self::G2 => "G2",
            Self::G3 => "G3",
        }
    }

    /// Human-readable group label
    pub fn label(&self) -> &'static str {
        match self {
            Self::G1 => "Intervención en cauces superficiales",
            Self::G2 => "Recarga por pozos y sondeos",
            Self::G3 => "Infiltración superficial",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One 0–4 ordinal score per technique group.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct GroupScores {
    pub g1: u8,
    pub g2: u8,
    pub g3: u8,
}

impl GroupScores {
    /// All three groups at the same score
    pub const fn uniform(score: u8) -> Self {
        Self {
            g1: score,
            g2: score,
            g3: score,
        }
    }

    pub const fn new(g1: u8, g2: u8, g3: u8) -> Self {
        Self { g1, g2, g3 }
    }

    pub fn get(&self, group: Group) -> u8 {
        match group {
            Group::G1 => self.g1,
            Group::G2 => self.g2,
            Group::G3 => self.g3,
        }
    }

    pub fn set(&mut self, group: Group, score: u8) {
        match group {
            Group::G1 => self.g1 = score,
            Group::G2 => self.g2 = score,
            Group::G3 => self.g3 = score,
        }
    }

    /// Simple mean of the three group scores
    pub fn mean(&self) -> f64 {
        f64::from(u16::from(self.g1) + u16::from(self.g2) + u16::from(self.g3)) / 3.0
    }

    pub fn is_all_zero(&self) -> bool {
        self.g1 == 0 && self.g2 == 0 && self.g3 == 0
    }
}

/// How a per-group triple collapses into a single 0–4 score.
///
/// Fixed per indicator. The catalog mixes Floor and Round; see DESIGN.md
/// open question 1 before unifying anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RoundingPolicy {
    /// Round half-up
    Round,
    /// Truncate toward zero
    Floor,
}

impl RoundingPolicy {
    /// Collapse a per-group triple into a single score under this policy.
    pub fn collapse(&self, scores: &GroupScores) -> u8 {
        let mean = scores.mean();
        let collapsed = match self {
            Self::Round => (mean + 0.5).floor(),
            Self::Floor => mean.floor(),
        };
        collapsed as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_order_is_declaration_order() {
        assert_eq!(Group::ALL[0], Group::G1);
        assert_eq!(Group::ALL[2], Group::G3);
    }

    #[test]
    fn test_rounding_policies_differ() {
        let scores = GroupScores::new(4, 3, 4); // mean 3.67
        assert_eq!(RoundingPolicy::Round.collapse(&scores), 4);
        assert_eq!(RoundingPolicy::Floor.collapse(&scores), 3);

        let half = GroupScores::new(4, 3, 2); // mean 3.0
        assert_eq!(RoundingPolicy::Round.collapse(&half), 3);
        assert_eq!(RoundingPolicy::Floor.collapse(&half), 3);
    }

    #[test]
    fn test_round_half_up() {
        let scores = GroupScores::new(3, 2, 2); // mean 2.33 → 2
        assert_eq!(RoundingPolicy::Round.collapse(&scores), 2);
        let scores = GroupScores::new(3, 3, 2); // mean 2.67 → 3
        assert_eq!(RoundingPolicy::Round.collapse(&scores), 3);
    }
}
