//! Weighted linear combination and ranking.

use super::ahp::AhpOutcome;
use super::criterion::CriterionAggregate;
use crate::model::Group;
use crate::registry::{techniques_for, CriterionId, Technique};
use schemars::JsonSchema;
use serde::Serialize;

/// Identifier of the totals row in exports.
pub const TOTAL_ROW_ID: &str = "TOTAL_IDONEIDAD";

/// One floating value per technique group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, JsonSchema)]
pub struct GroupValues {
    pub g1: f64,
    pub g2: f64,
    pub g3: f64,
}

impl GroupValues {
    pub fn get(&self, group: Group) -> f64 {
        match group {
            Group::G1 => self.g1,
            Group::G2 => self.g2,
            Group::G3 => self.g3,
        }
    }

    fn set(&mut self, group: Group, value: f64) {
        match group {
            Group::G1 => self.g1 = value,
            Group::G2 => self.g2 = value,
            Group::G3 => self.g3 = value,
        }
    }
}

/// One criterion's row of the WLC table.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WlcRow {
    pub criterion: CriterionId,
    pub weight: f64,
    /// Raw Sc per group.
    pub group_scores: GroupValues,
    /// weight × Sc per group.
    pub contributions: GroupValues,
}

/// The full WLC table: five criterion rows plus per-group totals.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct WlcTable {
    pub rows: Vec<WlcRow>,
    /// The `TOTAL_IDONEIDAD` row: summed contributions per group.
    pub totals: GroupValues,
}

/// A ranked group with its suitability index.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PodiumEntry {
    pub group: Group,
    pub total: f64,
    /// 1-based rank.
    pub rank: usize,
}

/// Groups ordered best-first, with the winner's technique recommendations.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Podium {
    pub entries: Vec<PodiumEntry>,
}

impl Podium {
    pub fn winner(&self) -> &PodiumEntry {
        &self.entries[0]
    }

    /// Recommended techniques for the winning group.
    pub fn recommendations(&self) -> &'static [Technique] {
        techniques_for(self.winner().group)
    }
}

/// Combine criterion weights with per-criterion group scores.
///
/// Aggregates must be the five criteria in declaration order (as produced by
/// [`aggregate_all`](super::aggregate_all)).
pub fn compute_wlc(ahp: &AhpOutcome, aggregates: &[CriterionAggregate]) -> WlcTable {
    let mut rows = Vec::with_capacity(aggregates.len());
    let mut totals = GroupValues::default();

    for aggregate in aggregates {
        let weight = ahp.weight_of(aggregate.id);
        let mut group_scores = GroupValues::default();
        let mut contributions = GroupValues::default();

        for group in Group::ALL {
            let sc = aggregate.group(group).sc;
            group_scores.set(group, sc);
            let contribution = weight * sc;
            contributions.set(group, contribution);
            totals.set(group, totals.get(group) + contribution);
        }

        rows.push(WlcRow {
            criterion: aggregate.id,
            weight,
            group_scores,
            contributions,
        });
    }

    WlcTable { rows, totals }
}

/// Rank groups descending by total. Ties keep declaration order (G1, G2,
/// G3): the sort is stable and the input is in declaration order.
pub fn rank(table: &WlcTable) -> Podium {
    let mut entries: Vec<PodiumEntry> = Group::ALL
        .iter()
        .map(|&group| PodiumEntry {
            group,
            total: table.totals.get(group),
            rank: 0,
        })
        .collect();

    entries.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    Podium { entries }
}
