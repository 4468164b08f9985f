//! End-to-end case assessment.

use crate::model::CaseRecord;
use crate::registry::Technique;
use crate::scenario::{self, ScenarioState};
use crate::scoring::{self, IndicatorScore};
use crate::suitability::{
    aggregate_all, compute_wlc, derive_weights, rank, AhpOutcome, CriterionAggregate,
    PairwiseMatrix, Podium, ScoreOverrides, WlcTable,
};
use schemars::JsonSchema;
use serde::Serialize;

/// Inputs layered on top of the case record.
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    /// Pairwise judgments over C1…C5; the indifferent matrix when absent.
    pub matrix: PairwiseMatrix,
    /// UI-supplied score overrides.
    pub overrides: ScoreOverrides,
}

/// The complete engine output for one case snapshot.
///
/// Immutable once computed; recomputed in full whenever the case or the
/// judgments change. The fingerprint lets callers skip a recompute for an
/// unchanged snapshot; correctness never depends on that.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Assessment {
    /// Structural fingerprint of the assessed case snapshot.
    pub fingerprint: u64,
    pub scenario: ScenarioState,
    pub indicators: Vec<IndicatorScore>,
    pub criteria: Vec<CriterionAggregate>,
    pub ahp: AhpOutcome,
    pub wlc: WlcTable,
    pub podium: Podium,
    /// Technique recommendations for the winning group.
    pub recommendations: Vec<Technique>,
}

/// Run the full scoring pipeline over one case snapshot.
///
/// Pure and re-entrant: reads the case, mutates nothing, and is
/// deterministic for identical inputs.
pub fn assess(case: &CaseRecord, options: &AssessOptions) -> Assessment {
    let fingerprint = case.fingerprint();
    tracing::debug!(fingerprint, "assessing case snapshot");

    let scenario = scenario::classify(case);
    tracing::info!(
        tier = scenario.tier.id(),
        completed = scenario.completed,
        total = scenario.total,
        "scenario classified"
    );

    let indicators = scoring::score_all(case);
    let criteria = aggregate_all(&indicators, &scenario, &options.overrides);
    let ahp = derive_weights(&options.matrix);
    if !ahp.is_consistent() {
        tracing::warn!(cr = ahp.cr, "pairwise judgments exceed the CR 0.10 bar");
    }

    let wlc = compute_wlc(&ahp, &criteria);
    let podium = rank(&wlc);
    let recommendations = podium.recommendations().to_vec();
    tracing::info!(winner = %podium.winner().group, "ranking complete");

    Assessment {
        fingerprint,
        scenario,
        indicators,
        criteria,
        ahp,
        wlc,
        podium,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleId;

    fn tier1_case() -> CaseRecord {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Libre");
        case.set_text(ModuleId::Fuente, "tipo_fuente", "Superficial");
        case.set_text(ModuleId::Fuente, "calidad_fuente", "Apta");
        case.set_text(ModuleId::Fuente, "cumplimiento_normativo", "Sí");
        case.set_text(ModuleId::Volumen, "uso_final", "Doméstico");
        case
    }

    #[test]
    fn test_assess_is_deterministic() {
        let case = tier1_case();
        let options = AssessOptions::default();
        let first = assess(&case, &options);
        let second = assess(&case, &options);
        assert_eq!(first.fingerprint, second.fingerprint);
        assert_eq!(first.wlc.totals, second.wlc.totals);
        assert_eq!(
            first.podium.winner().group,
            second.podium.winner().group
        );
    }

    #[test]
    fn test_fingerprint_changes_with_case() {
        let options = AssessOptions::default();
        let baseline = assess(&tier1_case(), &options);

        let mut changed = tier1_case();
        changed.set_text(ModuleId::Volumen, "uso_final", "Agrícola");
        let reassessed = assess(&changed, &options);

        assert_ne!(baseline.fingerprint, reassessed.fingerprint);
    }

    #[test]
    fn test_recommendations_track_winner() {
        let assessment = assess(&tier1_case(), &AssessOptions::default());
        let expected = crate::registry::techniques_for(assessment.podium.winner().group);
        assert_eq!(assessment.recommendations.len(), expected.len());
        assert_eq!(assessment.recommendations[0].name, expected[0].name);
    }
}
