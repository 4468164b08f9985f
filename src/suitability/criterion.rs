//! Per-criterion aggregation of indicator scores.

use super::overrides::{resolve_score, ScoreOverrides};
use crate::model::Group;
use crate::registry::{self, CriterionId, IndicatorId};
use crate::scenario::ScenarioState;
use crate::scoring::IndicatorScore;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;

/// One group's view of a criterion.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GroupAggregate {
    /// Effective per-indicator scores after overrides, blocking and
    /// applicability. Not-relevant indicators are absent entirely.
    pub scores_by_var: IndexMap<IndicatorId, u8>,
    /// Mean of the non-zero included scores; 0 when nothing qualifies.
    pub sc: f64,
    pub observation: String,
}

/// Aggregated scores for one criterion across the three groups.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CriterionAggregate {
    pub id: CriterionId,
    pub label: String,
    pub g1: GroupAggregate,
    pub g2: GroupAggregate,
    pub g3: GroupAggregate,
}

impl CriterionAggregate {
    pub fn group(&self, group: Group) -> &GroupAggregate {
        match group {
            Group::G1 => &self.g1,
            Group::G2 => &self.g2,
            Group::G3 => &self.g3,
        }
    }
}

/// Aggregate one criterion.
///
/// Indicators scoring exactly zero are excluded from the mean's denominator:
/// a zero means no information, while a low nonzero score is real evidence
/// and counts. See DESIGN.md open question 2.
pub fn aggregate_criterion(
    criterion: CriterionId,
    scores: &[IndicatorScore],
    scenario: &ScenarioState,
    overrides: &ScoreOverrides,
) -> CriterionAggregate {
    let g1 = aggregate_group(criterion, Group::G1, scores, scenario, overrides);
    let g2 = aggregate_group(criterion, Group::G2, scores, scenario, overrides);
    let g3 = aggregate_group(criterion, Group::G3, scores, scenario, overrides);
    CriterionAggregate {
        id: criterion,
        label: criterion.label().to_string(),
        g1,
        g2,
        g3,
    }
}

/// Aggregate all five criteria in declaration order.
pub fn aggregate_all(
    scores: &[IndicatorScore],
    scenario: &ScenarioState,
    overrides: &ScoreOverrides,
) -> Vec<CriterionAggregate> {
    CriterionId::ALL
        .iter()
        .map(|criterion| aggregate_criterion(*criterion, scores, scenario, overrides))
        .collect()
}

fn aggregate_group(
    criterion: CriterionId,
    group: Group,
    scores: &[IndicatorScore],
    scenario: &ScenarioState,
    overrides: &ScoreOverrides,
) -> GroupAggregate {
    let mut scores_by_var = IndexMap::new();
    let mut sum = 0u32;
    let mut count = 0u32;
    let mut gaps = 0usize;

    for id in criterion.members() {
        let indicator = registry::get(*id);
        if !indicator.applicability.applies_to(group) {
            continue;
        }
        let Some(computed) = scores.iter().find(|s| s.id == *id) else {
            // Score sets always come from score_all; a hole is a defect.
            unreachable!("no computed score for {id}");
        };

        let resolved = resolve_score(*id, computed.by_group, overrides);
        let blocked = scenario.blocks(*id);
        let score = if blocked { 0 } else { resolved.get(group) };

        scores_by_var.insert(*id, score);
        if score > 0 {
            sum += u32::from(score);
            count += 1;
        }
        if !blocked && !computed.missing.is_empty() {
            gaps += 1;
        }
    }

    let sc = if count > 0 {
        f64::from(sum) / f64::from(count)
    } else {
        0.0
    };

    let observation = if gaps > 0 {
        format!(
            "Confianza reducida: {gaps} variable(s) del criterio sin información completa"
        )
    } else {
        format!("Compatible con el grupo {}", group.id())
    };

    GroupAggregate {
        scores_by_var,
        sc,
        observation,
    }
}
