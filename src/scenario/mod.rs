//! Completeness-tier classification.
//!
//! A case earns one of four tiers depending on how much of the form is
//! genuinely filled. The tier gates which indicators may influence the
//! ranking: outside the active tier's required set, raw scores are forced to
//! zero so accidental partial data cannot sway the podium.

use crate::model::CaseRecord;
use crate::registry::{self, Indicator, IndicatorId, ScoringRule};
use crate::utils::normalize_token;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Progressive completeness tiers. Monotonic: a case satisfying a tier
/// satisfies every lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioTier {
    /// Tier 0: not even the minimum operative set is filled.
    None,
    /// Tier 1, minimum operative: the five anchor fields.
    Minimum,
    /// Tier 2, intermediate verified: models, categories and source detail.
    Intermediate,
    /// Tier 3, complete robust: every registered indicator fully backed.
    Complete,
}

impl ScenarioTier {
    pub fn id(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Minimum => 1,
            Self::Intermediate => 2,
            Self::Complete => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "Sin escenario",
            Self::Minimum => "Mínimo operativo",
            Self::Intermediate => "Intermedio verificado",
            Self::Complete => "Completo robusto",
        }
    }
}

impl std::fmt::Display for ScenarioTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Escenario {} ({})", self.id(), self.name())
    }
}

/// The five tier-1 anchor indicators.
const TIER1_IDS: [IndicatorId; 5] = [
    IndicatorId::V8,
    IndicatorId::V14,
    IndicatorId::V15,
    IndicatorId::V16,
    IndicatorId::V23,
];

/// The tier-2 requirement set. V18/V19 drop out of the effective set when
/// the water source is not superficial.
const TIER2_IDS: [IndicatorId; 16] = [
    IndicatorId::V1,
    IndicatorId::V3,
    IndicatorId::V4,
    IndicatorId::V5,
    IndicatorId::V8,
    IndicatorId::V9,
    IndicatorId::V12,
    IndicatorId::V14,
    IndicatorId::V15,
    IndicatorId::V16,
    IndicatorId::V17,
    IndicatorId::V18,
    IndicatorId::V19,
    IndicatorId::V20,
    IndicatorId::V23,
    IndicatorId::V26,
];

/// Result of classifying a case's completeness.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ScenarioState {
    pub tier: ScenarioTier,
    /// Indicators currently meeting their full input-completeness bar.
    pub completed: usize,
    /// Total registered indicators.
    pub total: usize,
    /// Qualified field paths blocking the next tier (empty at tier 3).
    pub missing: Vec<String>,
    /// Required indicator set of the achieved tier. Empty at tiers 0 and 3,
    /// where no gating applies.
    pub active: Vec<IndicatorId>,
}

impl ScenarioState {
    /// Whether an indicator's score must be forced to zero under the active
    /// tier. Orthogonal to scoring: rules never consult this.
    pub fn blocks(&self, id: IndicatorId) -> bool {
        match self.tier {
            ScenarioTier::None | ScenarioTier::Complete => false,
            ScenarioTier::Minimum | ScenarioTier::Intermediate => !self.active.contains(&id),
        }
    }
}

/// Classify a case top-down, reporting the highest tier satisfied.
pub fn classify(case: &CaseRecord) -> ScenarioState {
    let total = registry::all().len();
    let completed = registry::all()
        .iter()
        .filter(|ind| meets_full_bar(ind, case))
        .count();

    let tier2_set = tier2_required(case);

    let tier3_ok = completed == total;
    let tier2_ok = tier2_set
        .iter()
        .all(|id| meets_minimum_bar(registry::get(*id), case));
    let tier1_ok = TIER1_IDS
        .iter()
        .all(|id| case.is_informative(registry::get(*id).primary_input()));

    if tier3_ok {
        return ScenarioState {
            tier: ScenarioTier::Complete,
            completed,
            total,
            missing: Vec::new(),
            active: Vec::new(),
        };
    }

    if tier2_ok {
        let missing = registry::all()
            .iter()
            .filter(|ind| !meets_full_bar(ind, case))
            .flat_map(|ind| full_bar_gaps(ind, case))
            .collect();
        return ScenarioState {
            tier: ScenarioTier::Intermediate,
            completed,
            total,
            missing,
            active: tier2_set,
        };
    }

    if tier1_ok {
        let missing = tier2_set
            .iter()
            .map(|id| registry::get(*id))
            .filter(|ind| !meets_minimum_bar(ind, case))
            .flat_map(|ind| minimum_bar_gaps(ind, case))
            .collect();
        return ScenarioState {
            tier: ScenarioTier::Minimum,
            completed,
            total,
            missing,
            active: TIER1_IDS.to_vec(),
        };
    }

    let missing = TIER1_IDS
        .iter()
        .map(|id| registry::get(*id).primary_input())
        .filter(|field| !case.is_informative(field))
        .map(|field| field.path())
        .collect();
    ScenarioState {
        tier: ScenarioTier::None,
        completed,
        total,
        missing,
        active: Vec::new(),
    }
}

/// Effective tier-2 requirement set for this case.
fn tier2_required(case: &CaseRecord) -> Vec<IndicatorId> {
    let superficial = case
        .token(crate::model::ModuleId::Fuente, "tipo_fuente")
        .is_some_and(|t| t == "superficial");

    TIER2_IDS
        .iter()
        .copied()
        .filter(|id| {
            superficial || !matches!(id, IndicatorId::V18 | IndicatorId::V19)
        })
        .collect()
}

/// Tier-2 bar: minimum inputs present, with the infiltration-study
/// conditional.
fn meets_minimum_bar(indicator: &Indicator, case: &CaseRecord) -> bool {
    match &indicator.rule {
        ScoringRule::CompositePresence => {
            informative_count(indicator, case) >= indicator.min_inputs
        }
        ScoringRule::ConditionalStudy => conditional_study_satisfied(indicator, case),
        _ => case.is_informative(indicator.primary_input()),
    }
}

/// Tier-3 bar: every declared input present (the study conditional still
/// waives the follow-up after a "no"). Map-upload flags are ignored here.
fn meets_full_bar(indicator: &Indicator, case: &CaseRecord) -> bool {
    match &indicator.rule {
        ScoringRule::ConditionalStudy => conditional_study_satisfied(indicator, case),
        _ => indicator.inputs.iter().all(|input| case.is_informative(input)),
    }
}

fn conditional_study_satisfied(indicator: &Indicator, case: &CaseRecord) -> bool {
    let flag_field = &indicator.inputs[0];
    let category_field = &indicator.inputs[1];
    let Some(flag) = case.informative(flag_field.module, flag_field.key) else {
        return false;
    };
    match normalize_token(&flag.raw_text()).as_str() {
        "no" => true,
        "si" => case.informative(category_field.module, category_field.key).is_some(),
        _ => false,
    }
}

fn informative_count(indicator: &Indicator, case: &CaseRecord) -> usize {
    indicator
        .inputs
        .iter()
        .filter(|input| case.is_informative(input))
        .count()
}

fn minimum_bar_gaps(indicator: &Indicator, case: &CaseRecord) -> Vec<String> {
    match &indicator.rule {
        ScoringRule::ConditionalStudy => conditional_study_gaps(indicator, case),
        _ => absent_input_paths(indicator, case),
    }
}

fn full_bar_gaps(indicator: &Indicator, case: &CaseRecord) -> Vec<String> {
    match &indicator.rule {
        ScoringRule::ConditionalStudy => conditional_study_gaps(indicator, case),
        _ => absent_input_paths(indicator, case),
    }
}

fn conditional_study_gaps(indicator: &Indicator, case: &CaseRecord) -> Vec<String> {
    let flag_field = &indicator.inputs[0];
    let category_field = &indicator.inputs[1];
    match case.informative(flag_field.module, flag_field.key) {
        None => vec![flag_field.path()],
        Some(flag) => match normalize_token(&flag.raw_text()).as_str() {
            "si" if case
                .informative(category_field.module, category_field.key)
                .is_none() =>
            {
                vec![category_field.path()]
            }
            "no" | "si" => Vec::new(),
            _ => vec![flag_field.path()],
        },
    }
}

fn absent_input_paths(indicator: &Indicator, case: &CaseRecord) -> Vec<String> {
    indicator
        .inputs
        .iter()
        .filter(|input| !case.is_informative(input))
        .map(|input| input.path())
        .collect()
}
