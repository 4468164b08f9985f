//! The V1…V35 indicator catalog and its group lookup tables.
//!
//! Token rows are normalized form (see `utils::text`). Rounding policies are
//! fixed per indicator; see DESIGN.md before unifying the floor/round mix.

use super::indicator::{GroupApplicability, GroupTable, Indicator, IndicatorId, ScoringRule};
use crate::model::{FieldRef, ModuleId, RoundingPolicy};

// ============================================================================
// Group-differentiated lookup tables
// ============================================================================

/// V8, aquifer confinement. Confined aquifers are only reachable by wells.
static TIPO_ACUIFERO: GroupTable = GroupTable {
    rows: &[
        ("libre", [4, 3, 4]),
        ("semiconfinado", [3, 4, 3]),
        ("confinado", [1, 4, 1]),
    ],
};

/// V9, aquifer medium.
static TIPO_MEDIO: GroupTable = GroupTable {
    rows: &[
        ("poroso", [3, 4, 4]),
        ("fracturado", [4, 3, 2]),
        ("karstico", [4, 2, 2]),
    ],
};

/// V14, water-source type.
static TIPO_FUENTE: GroupTable = GroupTable {
    rows: &[
        ("superficial", [4, 3, 3]),
        ("subterranea", [2, 4, 2]),
        ("residual_tratada", [2, 3, 4]),
        ("pluvial", [3, 2, 4]),
    ],
};

/// V15, source water-quality category.
static CALIDAD_FUENTE: GroupTable = GroupTable {
    rows: &[
        ("apta", [4, 4, 3]),
        ("apta_con_tratamiento", [3, 2, 3]),
        ("no_apta", [1, 1, 2]),
    ],
};

/// V16, regulatory compliance status.
static CUMPLIMIENTO: GroupTable = GroupTable {
    rows: &[
        ("si", [4, 4, 4]),
        ("parcial", [2, 2, 2]),
        ("en_tramite", [2, 2, 2]),
        ("no", [1, 1, 1]),
    ],
};

/// V18, superficial-source subtype.
static SUBTIPO_SUPERFICIAL: GroupTable = GroupTable {
    rows: &[
        ("rio", [4, 3, 3]),
        ("quebrada", [3, 2, 3]),
        ("embalse", [3, 4, 3]),
        ("laguna", [3, 4, 3]),
        ("canal", [2, 3, 4]),
    ],
};

/// V23, final water use.
static USO_FINAL: GroupTable = GroupTable {
    rows: &[
        ("domestico", [4, 3, 2]),
        ("agricola", [3, 3, 4]),
        ("industrial", [2, 4, 3]),
        ("ambiental", [4, 2, 3]),
    ],
};

/// V28, clogging risk.
static RIESGO_COLMATACION: GroupTable = GroupTable {
    rows: &[
        ("bajo", [4, 4, 4]),
        ("medio", [3, 2, 3]),
        ("alto", [2, 1, 2]),
    ],
};

/// V29, terrain slope class.
static PENDIENTE: GroupTable = GroupTable {
    rows: &[
        ("plana", [2, 4, 4]),
        ("suave", [3, 3, 4]),
        ("moderada", [4, 3, 2]),
        ("fuerte", [3, 2, 1]),
    ],
};

// ============================================================================
// Catalog
// ============================================================================

const fn field(module: ModuleId, key: &'static str) -> FieldRef {
    FieldRef::new(module, key)
}

static INDICATORS: [Indicator; IndicatorId::COUNT] = [
    Indicator {
        id: IndicatorId::V1,
        label: "¿Cuenta con un modelo geológico del área de estudio?",
        inputs: &[
            field(ModuleId::Geologico, "unidades_geologicas"),
            field(ModuleId::Geologico, "perfiles_geologicos"),
            field(ModuleId::Geologico, "fallas_estructuras"),
            field(ModuleId::Geologico, "columna_estratigrafica"),
        ],
        rule: ScoringRule::CompositePresence,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V2,
        label: "¿Cuál es la litología predominante?",
        inputs: &[field(ModuleId::Geologico, "litologia_predominante")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V3,
        label: "¿Cuál es la categoría de permeabilidad del medio?",
        inputs: &[field(ModuleId::Geologico, "permeabilidad")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V4,
        label: "¿Cuál es la categoría de porosidad del medio?",
        inputs: &[field(ModuleId::Geologico, "porosidad")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V5,
        label: "¿Cuenta con un modelo hidrogeológico conceptual?",
        inputs: &[
            field(ModuleId::Caracterizacion, "unidades_hidrogeologicas"),
            field(ModuleId::Caracterizacion, "direccion_flujo"),
            field(ModuleId::Caracterizacion, "zonas_recarga_descarga"),
        ],
        rule: ScoringRule::CompositePresence,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V6,
        label: "¿Cuál es el espesor del acuífero (m)?",
        inputs: &[field(ModuleId::Caracterizacion, "espesor_acuifero")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V7,
        label: "¿Cuál es la profundidad del nivel freático (m)?",
        inputs: &[field(ModuleId::Caracterizacion, "profundidad_nivel_freatico")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V8,
        label: "¿Qué tipo de acuífero se caracterizó?",
        inputs: &[field(ModuleId::Caracterizacion, "tipo_acuifero")],
        rule: ScoringRule::GroupTable(&TIPO_ACUIFERO),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V9,
        label: "¿Cuál es el tipo de medio del acuífero?",
        inputs: &[field(ModuleId::Caracterizacion, "tipo_medio")],
        rule: ScoringRule::GroupTable(&TIPO_MEDIO),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Floor,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V10,
        label: "¿Cuál es la conductividad hidráulica (m/día)?",
        inputs: &[field(ModuleId::Hidraulico, "conductividad_hidraulica")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V11,
        label: "¿Cuál es la transmisividad (m²/día)?",
        inputs: &[field(ModuleId::Hidraulico, "transmisividad")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V12,
        label: "¿Se realizó un estudio de capacidad de infiltración?",
        inputs: &[
            field(ModuleId::Hidraulico, "estudio_infiltracion"),
            field(ModuleId::Hidraulico, "categoria_infiltracion"),
        ],
        rule: ScoringRule::ConditionalStudy,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V13,
        label: "¿Cuál es el caudal de explotación actual (l/s)?",
        inputs: &[field(ModuleId::Hidraulico, "caudal_explotacion")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V14,
        label: "¿Qué tipo de fuente de agua alimentará la recarga?",
        inputs: &[field(ModuleId::Fuente, "tipo_fuente")],
        rule: ScoringRule::GroupTable(&TIPO_FUENTE),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V15,
        label: "¿Cuál es la categoría de calidad del agua de la fuente?",
        inputs: &[field(ModuleId::Fuente, "calidad_fuente")],
        rule: ScoringRule::GroupTable(&CALIDAD_FUENTE),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V16,
        label: "¿La fuente cumple la normativa de uso vigente?",
        inputs: &[field(ModuleId::Fuente, "cumplimiento_normativo")],
        rule: ScoringRule::GroupTable(&CUMPLIMIENTO),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V17,
        label: "Describa e identifique la fuente de agua",
        inputs: &[field(ModuleId::Fuente, "identificacion_fuente")],
        rule: ScoringRule::FreeText,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V18,
        label: "¿Qué subtipo de fuente superficial es?",
        inputs: &[field(ModuleId::Fuente, "subtipo_superficial")],
        rule: ScoringRule::GroupTable(&SUBTIPO_SUPERFICIAL),
        applicability: GroupApplicability::EXCEPT_G2,
        rounding: RoundingPolicy::Floor,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V19,
        label: "¿Cuál es la variabilidad estacional de la fuente?",
        inputs: &[field(ModuleId::Fuente, "variabilidad_estacional")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::EXCEPT_G2,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V20,
        label: "¿Cuenta con un modelo hidrológico de la cuenca?",
        inputs: &[
            field(ModuleId::Hidrologico, "balance_hidrico"),
            field(ModuleId::Hidrologico, "series_caudal"),
            field(ModuleId::Hidrologico, "delimitacion_cuenca"),
        ],
        rule: ScoringRule::CompositePresence,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V21,
        label: "¿Cuál es la precipitación media anual (mm)?",
        inputs: &[field(ModuleId::Hidrologico, "precipitacion_media_anual")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V22,
        label: "¿Cuál es la oferta hídrica disponible (hm³/año)?",
        inputs: &[field(ModuleId::Hidrologico, "oferta_hidrica")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V23,
        label: "¿Cuál será el uso final del agua recargada?",
        inputs: &[field(ModuleId::Volumen, "uso_final")],
        rule: ScoringRule::GroupTable(&USO_FINAL),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V24,
        label: "¿Qué volumen anual se planea recargar (hm³)?",
        inputs: &[field(ModuleId::Volumen, "volumen_anual_recarga")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V25,
        label: "¿Cuál es la demanda hídrica a cubrir (hm³/año)?",
        inputs: &[field(ModuleId::Volumen, "demanda_hidrica")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V26,
        label: "¿Cuenta con un modelo hidrogeoquímico?",
        inputs: &[
            field(ModuleId::Hidrogeoquimico, "parametros_fisicoquimicos"),
            field(ModuleId::Hidrogeoquimico, "analisis_compatibilidad"),
            field(ModuleId::Hidrogeoquimico, "linea_base_calidad"),
        ],
        rule: ScoringRule::CompositePresence,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V27,
        label: "¿Cuál es la calidad del agua subterránea nativa?",
        inputs: &[field(ModuleId::Hidrogeoquimico, "calidad_agua_subterranea")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V28,
        label: "¿Cuál es el riesgo de colmatación estimado?",
        inputs: &[field(ModuleId::Hidrogeoquimico, "riesgo_colmatacion")],
        rule: ScoringRule::GroupTable(&RIESGO_COLMATACION),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Floor,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V29,
        label: "¿Cuál es la clase de pendiente del terreno?",
        inputs: &[field(ModuleId::Relieve, "pendiente_terreno")],
        rule: ScoringRule::GroupTable(&PENDIENTE),
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V30,
        label: "Describa las geoformas del área de emplazamiento",
        inputs: &[field(ModuleId::Relieve, "geoformas")],
        rule: ScoringRule::FreeText,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V31,
        label: "¿Existe infraestructura aprovechable para la recarga?",
        inputs: &[field(ModuleId::Infraestructura, "infraestructura_existente")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V32,
        label: "¿Cuál es la distancia de la fuente al sitio de recarga (km)?",
        inputs: &[field(ModuleId::Infraestructura, "distancia_fuente_sitio")],
        rule: ScoringRule::Numeric,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V33,
        label: "¿El sitio cuenta con acceso vial y energía?",
        inputs: &[field(ModuleId::Infraestructura, "acceso_energia")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V34,
        label: "¿Cuál es el nivel de aceptación social del proyecto?",
        inputs: &[field(ModuleId::Comunidad, "aceptacion_social")],
        rule: ScoringRule::Categorical,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
    Indicator {
        id: IndicatorId::V35,
        label: "Describa los actores involucrados y el esquema de gobernanza",
        inputs: &[field(ModuleId::Comunidad, "actores_gobernanza")],
        rule: ScoringRule::FreeText,
        applicability: GroupApplicability::ALL,
        rounding: RoundingPolicy::Round,
        min_inputs: 1,
    },
];

/// The full registry in declaration order.
pub fn all() -> &'static [Indicator] {
    &INDICATORS
}

/// Fetch a registered indicator. Referencing an unregistered ID is a
/// programming defect, so this panics rather than returning an Option.
pub fn get(id: IndicatorId) -> &'static Indicator {
    INDICATORS
        .iter()
        .find(|ind| ind.id == id)
        .unwrap_or_else(|| unreachable!("indicator {id} missing from catalog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_ids_in_order() {
        assert_eq!(INDICATORS.len(), IndicatorId::COUNT);
        for (i, ind) in INDICATORS.iter().enumerate() {
            assert_eq!(ind.id.as_str(), format!("V{}", i + 1));
        }
    }

    #[test]
    fn test_anchor_table_rows() {
        assert_eq!(TIPO_ACUIFERO.lookup("libre"), Some([4, 3, 4]));
        assert_eq!(TIPO_FUENTE.lookup("superficial"), Some([4, 3, 3]));
        assert_eq!(CALIDAD_FUENTE.lookup("apta"), Some([4, 4, 3]));
        assert_eq!(CUMPLIMIENTO.lookup("si"), Some([4, 4, 4]));
        assert_eq!(USO_FINAL.lookup("domestico"), Some([4, 3, 2]));
    }

    #[test]
    fn test_unmatched_token_has_no_row() {
        assert_eq!(TIPO_ACUIFERO.lookup("costero"), None);
        assert_eq!(TIPO_ACUIFERO.lookup(""), None);
    }

    #[test]
    fn test_every_indicator_has_inputs() {
        for ind in all() {
            assert!(!ind.inputs.is_empty(), "{} has no inputs", ind.id);
            assert!(ind.min_inputs >= 1 && ind.min_inputs <= ind.inputs.len());
        }
    }
}
