//! Rule evaluation for a single indicator.

use crate::model::{CaseRecord, FieldValue, GroupScores};
use crate::registry::{Indicator, IndicatorId, ScoringRule};
use crate::utils::truncate_evidence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Non-fatal conditions noticed while scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFlag {
    /// A numeric-typed field was present but did not parse as a number.
    InvalidNumber,
    /// A categorical field was filled with a value outside its lookup table.
    UnmatchedCategory,
}

/// Result of evaluating one indicator against a case snapshot.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct IndicatorScore {
    pub id: IndicatorId,
    /// Collapsed 0–4 score under the indicator's rounding policy.
    pub score: u8,
    /// Per-group 0–4 scores.
    pub by_group: GroupScores,
    /// Excerpt of the raw value, for audit and export.
    pub evidence: Option<String>,
    /// Qualified paths (`module.key`) of absent backing fields.
    pub missing: Vec<String>,
    pub flags: Vec<ScoreFlag>,
}

/// Evaluate one indicator. Pure: reads the case, mutates nothing.
pub fn score_indicator(indicator: &Indicator, case: &CaseRecord) -> IndicatorScore {
    let mut missing = Vec::new();
    let mut flags = Vec::new();
    let mut evidence = None;

    let by_group = match &indicator.rule {
        ScoringRule::Categorical => {
            score_categorical(indicator, case, &mut missing, &mut evidence)
        }
        ScoringRule::Numeric => score_numeric(indicator, case, &mut missing, &mut flags, &mut evidence),
        ScoringRule::FreeText => score_free_text(indicator, case, &mut missing, &mut evidence),
        ScoringRule::GroupTable(table) => {
            score_group_table(indicator, table, case, &mut missing, &mut flags, &mut evidence)
        }
        ScoringRule::CompositePresence => {
            score_composite(indicator, case, &mut missing, &mut evidence)
        }
        ScoringRule::ConditionalStudy => {
            score_conditional_study(indicator, case, &mut missing, &mut flags, &mut evidence)
        }
    };

    IndicatorScore {
        id: indicator.id,
        score: indicator.rounding.collapse(&by_group),
        by_group,
        evidence,
        missing,
        flags,
    }
}

/// Evaluate the full registry in declaration order.
pub fn score_all(case: &CaseRecord) -> Vec<IndicatorScore> {
    crate::registry::all()
        .iter()
        .map(|indicator| score_indicator(indicator, case))
        .collect()
}

fn record_evidence(evidence: &mut Option<String>, value: &FieldValue) {
    if evidence.is_none() {
        *evidence = Some(truncate_evidence(&value.raw_text()));
    }
}

fn score_categorical(
    indicator: &Indicator,
    case: &CaseRecord,
    missing: &mut Vec<String>,
    evidence: &mut Option<String>,
) -> GroupScores {
    let field = indicator.primary_input();
    match case.informative(field.module, field.key) {
        Some(value) => {
            record_evidence(evidence, value);
            GroupScores::uniform(3)
        }
        None => {
            missing.push(field.path());
            GroupScores::uniform(0)
        }
    }
}

fn score_numeric(
    indicator: &Indicator,
    case: &CaseRecord,
    missing: &mut Vec<String>,
    flags: &mut Vec<ScoreFlag>,
    evidence: &mut Option<String>,
) -> GroupScores {
    let field = indicator.primary_input();
    match case.informative(field.module, field.key) {
        Some(value) => {
            record_evidence(evidence, value);
            if value.as_number().is_some() {
                GroupScores::uniform(3)
            } else {
                // Present but unparseable: flagged, then scored as absent.
                flags.push(ScoreFlag::InvalidNumber);
                missing.push(field.path());
                GroupScores::uniform(0)
            }
        }
        None => {
            missing.push(field.path());
            GroupScores::uniform(0)
        }
    }
}

fn score_free_text(
    indicator: &Indicator,
    case: &CaseRecord,
    missing: &mut Vec<String>,
    evidence: &mut Option<String>,
) -> GroupScores {
    let field = indicator.primary_input();
    match case.informative(field.module, field.key) {
        Some(value) => {
            record_evidence(evidence, value);
            let len = value.raw_text().trim().chars().count();
            let score = if len == 0 {
                0
            } else if len < 10 {
                1
            } else if len < 40 {
                2
            } else {
                3
            };
            if score == 0 {
                missing.push(field.path());
            }
            GroupScores::uniform(score)
        }
        None => {
            missing.push(field.path());
            GroupScores::uniform(0)
        }
    }
}

fn score_group_table(
    indicator: &Indicator,
    table: &crate::registry::GroupTable,
    case: &CaseRecord,
    missing: &mut Vec<String>,
    flags: &mut Vec<ScoreFlag>,
    evidence: &mut Option<String>,
) -> GroupScores {
    let field = indicator.primary_input();
    let Some(value) = case.informative(field.module, field.key) else {
        missing.push(field.path());
        return GroupScores::uniform(0);
    };
    record_evidence(evidence, value);

    let token = crate::utils::normalize_token(&value.raw_text());
    match table.lookup(&token) {
        Some([g1, g2, g3]) => GroupScores::new(g1, g2, g3),
        None => {
            // A value outside the table leaves the indicator unscored.
            flags.push(ScoreFlag::UnmatchedCategory);
            GroupScores::uniform(0)
        }
    }
}

fn score_composite(
    indicator: &Indicator,
    case: &CaseRecord,
    missing: &mut Vec<String>,
    evidence: &mut Option<String>,
) -> GroupScores {
    let total = indicator.inputs.len();
    let mut present = 0usize;

    for input in indicator.inputs {
        match case.informative(input.module, input.key) {
            Some(value) => {
                record_evidence(evidence, value);
                present += 1;
            }
            None => missing.push(input.path()),
        }
    }

    let score = (4.0 * present as f64 / total as f64 + 0.5).floor() as u8;
    GroupScores::uniform(score)
}

fn score_conditional_study(
    indicator: &Indicator,
    case: &CaseRecord,
    missing: &mut Vec<String>,
    flags: &mut Vec<ScoreFlag>,
    evidence: &mut Option<String>,
) -> GroupScores {
    let flag_field = &indicator.inputs[0];
    let category_field = &indicator.inputs[1];

    let Some(flag_value) = case.informative(flag_field.module, flag_field.key) else {
        missing.push(flag_field.path());
        return GroupScores::uniform(0);
    };
    record_evidence(evidence, flag_value);

    match crate::utils::normalize_token(&flag_value.raw_text()).as_str() {
        // Study not performed: the indicator is answered, follow-up waived.
        "no" => GroupScores::uniform(3),
        "si" => {
            if case.informative(category_field.module, category_field.key).is_some() {
                GroupScores::uniform(4)
            } else {
                missing.push(category_field.path());
                GroupScores::uniform(2)
            }
        }
        _ => {
            flags.push(ScoreFlag::UnmatchedCategory);
            GroupScores::uniform(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleId;
    use crate::registry;

    fn case_with(module: ModuleId, key: &str, value: &str) -> CaseRecord {
        let mut case = CaseRecord::new();
        case.set_text(module, key, value);
        case
    }

    #[test]
    fn test_group_table_scores_match_catalog() {
        let case = case_with(ModuleId::Caracterizacion, "tipo_acuifero", "Libre");
        let score = score_indicator(registry::get(IndicatorId::V8), &case);
        assert_eq!(score.by_group, GroupScores::new(4, 3, 4));
        // mean 3.67, Round policy
        assert_eq!(score.score, 4);
        assert!(score.missing.is_empty());
    }

    #[test]
    fn test_accented_value_matches_table() {
        let case = case_with(ModuleId::Volumen, "uso_final", "Doméstico");
        let score = score_indicator(registry::get(IndicatorId::V23), &case);
        assert_eq!(score.by_group, GroupScores::new(4, 3, 2));
        assert_eq!(score.score, 3);
    }

    #[test]
    fn test_unmatched_token_leaves_unscored() {
        let case = case_with(ModuleId::Caracterizacion, "tipo_acuifero", "Costero");
        let score = score_indicator(registry::get(IndicatorId::V8), &case);
        assert!(score.by_group.is_all_zero());
        assert_eq!(score.flags, vec![ScoreFlag::UnmatchedCategory]);
        assert!(score.missing.is_empty());
    }

    #[test]
    fn test_missing_field_tracks_path() {
        let case = CaseRecord::new();
        let score = score_indicator(registry::get(IndicatorId::V8), &case);
        assert_eq!(score.score, 0);
        assert_eq!(score.missing, vec!["caracterizacion.tipo_acuifero".to_string()]);
    }

    #[test]
    fn test_numeric_field_scores_presence() {
        let mut case = CaseRecord::new();
        case.set_number(ModuleId::Hidraulico, "transmisividad", 850.0);
        let score = score_indicator(registry::get(IndicatorId::V11), &case);
        assert_eq!(score.score, 3);
        assert_eq!(score.evidence.as_deref(), Some("850"));
    }

    #[test]
    fn test_invalid_number_flagged_and_scored_absent() {
        let case = case_with(ModuleId::Hidraulico, "transmisividad", "alta");
        let score = score_indicator(registry::get(IndicatorId::V11), &case);
        assert_eq!(score.score, 0);
        assert_eq!(score.flags, vec![ScoreFlag::InvalidNumber]);
        assert_eq!(score.missing, vec!["hidraulico.transmisividad".to_string()]);
    }

    #[test]
    fn test_free_text_length_scaling() {
        let short = case_with(ModuleId::Fuente, "identificacion_fuente", "Río");
        assert_eq!(score_indicator(registry::get(IndicatorId::V17), &short).score, 1);

        let medium = case_with(ModuleId::Fuente, "identificacion_fuente", "Río Cauca, tramo medio");
        assert_eq!(score_indicator(registry::get(IndicatorId::V17), &medium).score, 2);

        let long = case_with(
            ModuleId::Fuente,
            "identificacion_fuente",
            "Río Cauca, tramo medio, aguas abajo de la bocatoma municipal de Santander de Quilichao",
        );
        assert_eq!(score_indicator(registry::get(IndicatorId::V17), &long).score, 3);
    }

    #[test]
    fn test_composite_presence_scales_with_inputs() {
        let mut case = CaseRecord::new();
        let v1 = registry::get(IndicatorId::V1);

        assert_eq!(score_indicator(v1, &case).score, 0);

        case.set_text(ModuleId::Geologico, "unidades_geologicas", "Qal, Kv");
        assert_eq!(score_indicator(v1, &case).score, 1);

        case.set_text(ModuleId::Geologico, "perfiles_geologicos", "3 perfiles E-W");
        case.set_text(ModuleId::Geologico, "fallas_estructuras", "Falla de Romeral");
        case.set_text(ModuleId::Geologico, "columna_estratigrafica", "sí");
        let score = score_indicator(v1, &case);
        assert_eq!(score.score, 4);
        assert!(score.missing.is_empty());
    }

    #[test]
    fn test_conditional_study_waives_followup_on_no() {
        let case = case_with(ModuleId::Hidraulico, "estudio_infiltracion", "No");
        let score = score_indicator(registry::get(IndicatorId::V12), &case);
        assert_eq!(score.score, 3);
        assert!(score.missing.is_empty());
    }

    #[test]
    fn test_conditional_study_requires_category_on_si() {
        let mut case = case_with(ModuleId::Hidraulico, "estudio_infiltracion", "Sí");
        let partial = score_indicator(registry::get(IndicatorId::V12), &case);
        assert_eq!(partial.score, 2);
        assert_eq!(partial.missing, vec!["hidraulico.categoria_infiltracion".to_string()]);

        case.set_text(ModuleId::Hidraulico, "categoria_infiltracion", "Alta");
        let complete = score_indicator(registry::get(IndicatorId::V12), &case);
        assert_eq!(complete.score, 4);
    }

    #[test]
    fn test_all_scores_within_ordinal_range() {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Confinado");
        case.set_text(ModuleId::Fuente, "tipo_fuente", "Pluvial");
        case.set_text(ModuleId::Relieve, "pendiente_terreno", "Fuerte");
        for score in score_all(&case) {
            assert!(score.score <= 4);
            for group in crate::model::Group::ALL {
                assert!(score.by_group.get(group) <= 4);
            }
        }
    }
}
