//! Completeness-tier classification properties.

use mar_tools::model::{CaseRecord, ModuleId};
use mar_tools::registry;
use mar_tools::scenario::{classify, ScenarioTier};

fn anchors(case: &mut CaseRecord) {
    case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Semiconfinado");
    case.set_text(ModuleId::Fuente, "tipo_fuente", "Residual tratada");
    case.set_text(ModuleId::Fuente, "calidad_fuente", "Apta con tratamiento");
    case.set_text(ModuleId::Fuente, "cumplimiento_normativo", "En trámite");
    case.set_text(ModuleId::Volumen, "uso_final", "Agrícola");
}

fn complete_case() -> CaseRecord {
    let mut case = CaseRecord::new();
    for indicator in registry::all() {
        for input in indicator.inputs {
            case.set_text(input.module, input.key, "levantamiento de campo disponible");
        }
    }
    anchors(&mut case);
    case.set_text(ModuleId::Hidraulico, "estudio_infiltracion", "No");
    case
}

#[test]
fn test_monotonicity_complete_case_satisfies_lower_tiers() {
    let full = complete_case();
    assert_eq!(classify(&full).tier, ScenarioTier::Complete);

    // Reduce to the tier-2 requirement set only: still at least tier 2.
    let mut tier2_only = CaseRecord::new();
    anchors(&mut tier2_only);
    for id in [
        "unidades_geologicas",
        "permeabilidad",
        "porosidad",
    ] {
        tier2_only.set_text(ModuleId::Geologico, id, "registrado");
    }
    tier2_only.set_text(ModuleId::Caracterizacion, "unidades_hidrogeologicas", "2 unidades");
    tier2_only.set_text(ModuleId::Caracterizacion, "tipo_medio", "Poroso");
    tier2_only.set_text(ModuleId::Hidraulico, "estudio_infiltracion", "No");
    tier2_only.set_text(ModuleId::Fuente, "identificacion_fuente", "PTAR municipal");
    tier2_only.set_text(ModuleId::Hidrologico, "series_caudal", "2001-2020");
    tier2_only.set_text(ModuleId::Hidrogeoquimico, "linea_base_calidad", "sí");
    let state = classify(&tier2_only);
    assert!(state.tier >= ScenarioTier::Intermediate);

    // Reduce to the anchors only: exactly tier 1.
    let mut tier1_only = CaseRecord::new();
    anchors(&mut tier1_only);
    assert_eq!(classify(&tier1_only).tier, ScenarioTier::Minimum);

    // Drop one anchor: tier 0.
    let mut partial = CaseRecord::new();
    anchors(&mut partial);
    partial
        .modules
        .get_mut(&ModuleId::Volumen)
        .unwrap()
        .shift_remove("uso_final");
    assert_eq!(classify(&partial).tier, ScenarioTier::None);
}

#[test]
fn test_placeholder_anchor_fails_tier1() {
    let placeholders = [
        "No reportado",
        "no reporta",
        "N/A",
        "sin dato",
        "Sin información",
        "Seleccione una opción",
        "select one",
        "  ",
    ];
    for placeholder in placeholders {
        let mut case = CaseRecord::new();
        anchors(&mut case);
        case.set_text(ModuleId::Fuente, "tipo_fuente", placeholder);
        assert_eq!(
            classify(&case).tier,
            ScenarioTier::None,
            "placeholder {placeholder:?} must not count as filled"
        );
    }
}

#[test]
fn test_completed_count_tracks_full_bars() {
    let mut case = CaseRecord::new();
    anchors(&mut case);
    let state = classify(&case);
    // The five anchors are single-input indicators with full bars met.
    assert_eq!(state.completed, 5);
    assert_eq!(state.total, 35);
}

#[test]
fn test_tier3_ignores_map_upload_flags() {
    let mut case = complete_case();
    case.map_layers.insert("geologia".to_string(), false);
    case.map_layers.insert("isopiezas".to_string(), false);
    assert_eq!(classify(&case).tier, ScenarioTier::Complete);
}

#[test]
fn test_blocking_is_uniform_over_the_active_set() {
    let mut case = CaseRecord::new();
    anchors(&mut case);
    let state = classify(&case);
    for indicator in registry::all() {
        let expected_blocked = !state.active.contains(&indicator.id);
        assert_eq!(
            state.blocks(indicator.id),
            expected_blocked,
            "{} blocking mismatch",
            indicator.id
        );
    }
}
