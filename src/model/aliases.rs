//! Legacy field-key aliases.
//!
//! Older exports of the case format used accented or renamed field keys.
//! Lookup resolves the canonical key first, then each alias in the fixed
//! order listed here. New code must only ever add aliases, never reorder.

use super::ModuleId;

type AliasRow = (ModuleId, &'static str, &'static [&'static str]);

const ALIASES: &[AliasRow] = &[
    (
        ModuleId::Caracterizacion,
        "tipo_acuifero",
        &["tipo_de_acuifero", "confinamiento_acuifero"],
    ),
    (
        ModuleId::Caracterizacion,
        "profundidad_nivel_freatico",
        &["nivel_freatico"],
    ),
    (ModuleId::Fuente, "tipo_fuente", &["tipo_de_fuente"]),
    (
        ModuleId::Fuente,
        "calidad_fuente",
        &["categoria_calidad", "calidad_agua_fuente"],
    ),
    (
        ModuleId::Fuente,
        "cumplimiento_normativo",
        &["cumplimiento_normativa", "estado_normativo"],
    ),
    (ModuleId::Volumen, "uso_final", &["uso_final_agua", "uso_del_agua"]),
    (
        ModuleId::Hidraulico,
        "conductividad_hidraulica",
        &["conductividad"],
    ),
    (ModuleId::Relieve, "pendiente_terreno", &["pendiente"]),
];

/// Legacy keys accepted for a canonical key, in priority order.
///
/// Returns an empty slice when the key has no aliases.
pub fn aliases_for(module: ModuleId, canonical: &str) -> &'static [&'static str] {
    ALIASES
        .iter()
        .find(|(m, key, _)| *m == module && *key == canonical)
        .map_or(&[], |(_, _, aliases)| aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup() {
        let aliases = aliases_for(ModuleId::Caracterizacion, "tipo_acuifero");
        assert_eq!(aliases, &["tipo_de_acuifero", "confinamiento_acuifero"]);
    }

    #[test]
    fn test_no_aliases() {
        assert!(aliases_for(ModuleId::Comunidad, "aceptacion_social").is_empty());
    }
}
