//! End-to-end tests over the public API: parse → assess → report.

use mar_tools::model::{CaseRecord, Group, GroupScores, ModuleId};
use mar_tools::pipeline::{assess, AssessOptions};
use mar_tools::registry::IndicatorId;
use mar_tools::reports::{
    AssessmentReporter, JsonReporter, MarkdownReporter, ReportMetadata, SummaryReporter,
};
use mar_tools::scenario::ScenarioTier;
use mar_tools::parsers::parse_case_str;

const TIER1_CASE_JSON: &str = r#"{
    "caracterizacion": {"tipo_acuifero": "Libre"},
    "fuente": {
        "tipo_fuente": "Superficial",
        "calidad_fuente": "Apta",
        "cumplimiento_normativo": "Sí"
    },
    "volumen": {"uso_final": "Doméstico"}
}"#;

fn indicator_groups(assessment: &mar_tools::Assessment, id: IndicatorId) -> GroupScores {
    assessment
        .indicators
        .iter()
        .find(|score| score.id == id)
        .map(|score| score.by_group)
        .expect("indicator evaluated")
}

/// The worked example from the decision scheme: a case holding exactly the
/// five minimum-operative fields.
#[test]
fn test_minimum_operative_example() {
    let case = parse_case_str(TIER1_CASE_JSON).unwrap();
    let assessment = assess(&case, &AssessOptions::default());

    assert_eq!(assessment.scenario.tier, ScenarioTier::Minimum);
    assert_eq!(assessment.scenario.tier.id(), 1);

    assert_eq!(indicator_groups(&assessment, IndicatorId::V8), GroupScores::new(4, 3, 4));
    assert_eq!(indicator_groups(&assessment, IndicatorId::V14), GroupScores::new(4, 3, 3));
    assert_eq!(indicator_groups(&assessment, IndicatorId::V15), GroupScores::new(4, 4, 3));
    assert_eq!(indicator_groups(&assessment, IndicatorId::V16), GroupScores::new(4, 4, 4));
    assert_eq!(indicator_groups(&assessment, IndicatorId::V23), GroupScores::new(4, 3, 2));
}

#[test]
fn test_scenario_gating_zeroes_outside_indicators() {
    let mut case = parse_case_str(TIER1_CASE_JSON).unwrap();
    // Slope data outside the tier-1 set would favor G1; it must not count.
    case.set_text(ModuleId::Relieve, "pendiente_terreno", "Moderada");

    let assessment = assess(&case, &AssessOptions::default());
    assert_eq!(assessment.scenario.tier, ScenarioTier::Minimum);

    // The raw engine score is nonzero...
    let raw = indicator_groups(&assessment, IndicatorId::V29);
    assert_eq!(raw, GroupScores::new(4, 3, 2));

    // ...but the aggregate sees zero in every group column.
    let c2 = assessment
        .criteria
        .iter()
        .find(|c| c.id == mar_tools::CriterionId::C2)
        .unwrap();
    for group in Group::ALL {
        assert_eq!(c2.group(group).scores_by_var.get(&IndicatorId::V29), Some(&0));
    }
}

#[test]
fn test_wlc_totals_match_row_sums() {
    let case = parse_case_str(TIER1_CASE_JSON).unwrap();
    let assessment = assess(&case, &AssessOptions::default());

    for group in Group::ALL {
        let summed: f64 = assessment
            .wlc
            .rows
            .iter()
            .map(|row| row.contributions.get(group))
            .sum();
        assert!((summed - assessment.wlc.totals.get(group)).abs() < 1e-9);
    }
}

#[test]
fn test_assessment_is_reproducible_for_identical_snapshot() {
    let case = parse_case_str(TIER1_CASE_JSON).unwrap();
    let options = AssessOptions::default();

    let first = assess(&case, &options);
    let second = assess(&case, &options);

    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.wlc.totals, second.wlc.totals);
    assert_eq!(first.ahp.weights, second.ahp.weights);

    let order_a: Vec<Group> = first.podium.entries.iter().map(|e| e.group).collect();
    let order_b: Vec<Group> = second.podium.entries.iter().map(|e| e.group).collect();
    assert_eq!(order_a, order_b);
}

#[test]
fn test_all_reporters_render() {
    let case = parse_case_str(TIER1_CASE_JSON).unwrap();
    let assessment = assess(&case, &AssessOptions::default());
    let metadata = ReportMetadata::new(Some("caso.json".to_string()));

    let json = JsonReporter::new().generate(&assessment, &metadata).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());

    let markdown = MarkdownReporter::new().generate(&assessment, &metadata).unwrap();
    assert!(markdown.contains("TOTAL_IDONEIDAD"));

    let summary = SummaryReporter::new().generate(&assessment, &metadata).unwrap();
    assert!(summary.contains("Escenario 1"));
}

#[test]
fn test_evidence_is_truncated_with_marker() {
    let mut case = CaseRecord::new();
    case.set_text(
        ModuleId::Fuente,
        "identificacion_fuente",
        "x".repeat(500),
    );
    let assessment = assess(&case, &AssessOptions::default());
    let v17 = assessment
        .indicators
        .iter()
        .find(|s| s.id == IndicatorId::V17)
        .unwrap();
    let evidence = v17.evidence.as_deref().unwrap();
    assert_eq!(evidence.chars().count(), 141);
    assert!(evidence.ends_with('…'));
}

#[test]
fn test_alias_keys_feed_the_same_indicators() {
    // Legacy spellings must resolve to the same scores as canonical keys.
    let legacy = parse_case_str(
        r#"{
            "caracterizacion": {"tipo_de_acuifero": "Libre"},
            "fuente": {
                "tipo_de_fuente": "Superficial",
                "categoria_calidad": "Apta",
                "cumplimiento_normativa": "Sí"
            },
            "volumen": {"uso_final_agua": "Doméstico"}
        }"#,
    )
    .unwrap();

    let canonical = parse_case_str(TIER1_CASE_JSON).unwrap();

    let legacy_assessment = assess(&legacy, &AssessOptions::default());
    let canonical_assessment = assess(&canonical, &AssessOptions::default());

    assert_eq!(legacy_assessment.scenario.tier, ScenarioTier::Minimum);
    assert_eq!(
        legacy_assessment.wlc.totals,
        canonical_assessment.wlc.totals
    );
}

#[test]
fn test_map_layers_never_gate_the_scenario() {
    let with_maps = parse_case_str(
        r#"{
            "caracterizacion": {"tipo_acuifero": "Libre"},
            "fuente": {
                "tipo_fuente": "Superficial",
                "calidad_fuente": "Apta",
                "cumplimiento_normativo": "Sí"
            },
            "volumen": {"uso_final": "Doméstico"},
            "mapas": {"geologia": false, "pendientes": false}
        }"#,
    )
    .unwrap();

    let assessment = assess(&with_maps, &AssessOptions::default());
    assert_eq!(assessment.scenario.tier, ScenarioTier::Minimum);
}
