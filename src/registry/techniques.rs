//! Static catalog of recommended MAR techniques per group.
//!
//! Looked up for the top-ranked group; a data table, not a computation.

use crate::model::Group;
use schemars::JsonSchema;
use serde::Serialize;

/// A recommendable MAR technique.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema)]
pub struct Technique {
    pub name: &'static str,
    pub description: &'static str,
}

const G1_TECHNIQUES: &[Technique] = &[
    Technique {
        name: "Represas y diques de infiltración",
        description: "Estructuras transversales en el cauce que retienen el flujo y fuerzan la infiltración al lecho.",
    },
    Technique {
        name: "Escarificación del lecho",
        description: "Remoción periódica de la capa colmatada del lecho para recuperar la tasa de infiltración natural.",
    },
    Technique {
        name: "Presas subálveas",
        description: "Pantallas enterradas en el aluvión que embalsan el flujo subsuperficial del cauce.",
    },
    Technique {
        name: "Meandros y ensanchamientos artificiales",
        description: "Modificación del trazado para aumentar el tiempo de residencia y la superficie mojada.",
    },
];

const G2_TECHNIQUES: &[Technique] = &[
    Technique {
        name: "Pozos de inyección directa (ASR)",
        description: "Inyección y recuperación por el mismo pozo (aquifer storage and recovery).",
    },
    Technique {
        name: "Inyección con recuperación desplazada (ASTR)",
        description: "Inyección en un pozo y extracción en otro, con tránsito por el acuífero como tratamiento.",
    },
    Technique {
        name: "Pozos secos",
        description: "Pozos someros en la zona no saturada que drenan por gravedad hacia el acuífero libre.",
    },
    Technique {
        name: "Galerías y zanjas profundas de infiltración",
        description: "Obras lineales enterradas que distribuyen el agua por debajo de horizontes poco permeables.",
    },
];

const G3_TECHNIQUES: &[Technique] = &[
    Technique {
        name: "Lagunas y estanques de infiltración",
        description: "Balsas someras de fondo permeable que infiltran por gravedad.",
    },
    Technique {
        name: "Zanjas y surcos de infiltración",
        description: "Excavaciones lineales superficiales siguiendo curvas de nivel.",
    },
    Technique {
        name: "Inundación controlada de parcelas",
        description: "Aplicación extensiva de láminas de agua sobre terrenos permeables.",
    },
    Technique {
        name: "Tratamiento suelo-acuífero (SAT)",
        description: "Infiltración de agua regenerada aprovechando el suelo como filtro biológico.",
    },
];

/// Recommended techniques for a group, in catalog order.
pub fn techniques_for(group: Group) -> &'static [Technique] {
    match group {
        Group::G1 => G1_TECHNIQUES,
        Group::G2 => G2_TECHNIQUES,
        Group::G3 => G3_TECHNIQUES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_has_techniques() {
        for group in Group::ALL {
            assert!(!techniques_for(group).is_empty());
        }
    }
}
