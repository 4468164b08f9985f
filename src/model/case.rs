//! The case record: the engine's only input data structure.

use super::aliases_for;
use crate::utils::{content_hash, is_placeholder, normalize_token};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The ten fixed case modules. The set is closed: parsers reject anything
/// outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Geologico,
    Hidraulico,
    Hidrologico,
    Hidrogeoquimico,
    Caracterizacion,
    Fuente,
    Volumen,
    Infraestructura,
    Comunidad,
    Relieve,
}

impl ModuleId {
    pub const ALL: [ModuleId; 10] = [
        ModuleId::Geologico,
        ModuleId::Hidraulico,
        ModuleId::Hidrologico,
        ModuleId::Hidrogeoquimico,
        ModuleId::Caracterizacion,
        ModuleId::Fuente,
        ModuleId::Volumen,
        ModuleId::Infraestructura,
        ModuleId::Comunidad,
        ModuleId::Relieve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Geologico => "geologico",
            Self::Hidraulico => "hidraulico",
            Self::Hidrologico => "hidrologico",
            Self::Hidrogeoquimico => "hidrogeoquimico",
            Self::Caracterizacion => "caracterizacion",
            Self::Fuente => "fuente",
            Self::Volumen => "volumen",
            Self::Infraestructura => "infraestructura",
            Self::Comunidad => "comunidad",
            Self::Relieve => "relieve",
        }
    }

    /// Parse a module key as it appears in case files.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == key)
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw case-field value as entered in the (external) form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The raw surface form, used for evidence excerpts.
    pub fn raw_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
        }
    }

    /// Numeric interpretation: native numbers, or text that parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        }
    }
}

/// A qualified reference to a case field: module + canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FieldRef {
    pub module: ModuleId,
    pub key: &'static str,
}

impl FieldRef {
    pub const fn new(module: ModuleId, key: &'static str) -> Self {
        Self { module, key }
    }

    /// Qualified path used in missing-field reporting: `module.key`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.module.as_str(), self.key)
    }
}

/// Normalized case record: the engine's input snapshot.
///
/// Field maps preserve insertion order for deterministic report output, but
/// the [`fingerprint`](CaseRecord::fingerprint) is order-independent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CaseRecord {
    /// Module → (field key → value)
    pub modules: IndexMap<ModuleId, IndexMap<String, FieldValue>>,
    /// Optional per-layer map-upload presence flags. Reported only; never
    /// consulted by scenario gating.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub map_layers: IndexMap<String, bool>,
}

impl CaseRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, creating the module map on first use.
    pub fn set(&mut self, module: ModuleId, key: impl Into<String>, value: FieldValue) {
        self.modules.entry(module).or_default().insert(key.into(), value);
    }

    /// Convenience for text fields.
    pub fn set_text(&mut self, module: ModuleId, key: impl Into<String>, value: impl Into<String>) {
        self.set(module, key, FieldValue::Text(value.into()));
    }

    /// Convenience for numeric fields.
    pub fn set_number(&mut self, module: ModuleId, key: impl Into<String>, value: f64) {
        self.set(module, key, FieldValue::Number(value));
    }

    /// Exact-key fetch without alias resolution.
    pub fn get_raw(&self, module: ModuleId, key: &str) -> Option<&FieldValue> {
        self.modules.get(&module).and_then(|fields| fields.get(key))
    }

    /// Fetch a field by canonical key, falling back to its legacy aliases in
    /// fixed priority order.
    pub fn lookup(&self, module: ModuleId, canonical: &str) -> Option<&FieldValue> {
        if let Some(value) = self.get_raw(module, canonical) {
            return Some(value);
        }
        for alias in aliases_for(module, canonical) {
            if let Some(value) = self.get_raw(module, alias) {
                return Some(value);
            }
        }
        None
    }

    /// Fetch a field only if it is informative: present and, after
    /// normalization, neither empty nor a placeholder token.
    pub fn informative(&self, module: ModuleId, canonical: &str) -> Option<&FieldValue> {
        let value = self.lookup(module, canonical)?;
        match value {
            FieldValue::Number(_) => Some(value),
            FieldValue::Text(s) => {
                if is_placeholder(&normalize_token(s)) {
                    None
                } else {
                    Some(value)
                }
            }
        }
    }

    /// Whether a field reference resolves to an informative value.
    pub fn is_informative(&self, field: &FieldRef) -> bool {
        self.informative(field.module, field.key).is_some()
    }

    /// Normalized lookup token for a field, if informative.
    pub fn token(&self, module: ModuleId, canonical: &str) -> Option<String> {
        self.informative(module, canonical)
            .map(|v| normalize_token(&v.raw_text()))
    }

    /// Structural fingerprint of the case snapshot.
    ///
    /// Order-independent over modules and fields, so two snapshots holding
    /// the same data hash identically regardless of fill-in order. Used by
    /// callers to skip recomputing an assessment; correctness never depends
    /// on it.
    pub fn fingerprint(&self) -> u64 {
        let mut lines: Vec<String> = Vec::new();
        for (module, fields) in &self.modules {
            for (key, value) in fields {
                lines.push(format!("{}.{}={}", module.as_str(), key, value.raw_text()));
            }
        }
        for (layer, present) in &self.map_layers {
            lines.push(format!("mapas.{layer}={present}"));
        }
        lines.sort_unstable();
        content_hash(lines.join("\n").as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_resolves_aliases_canonical_first() {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Caracterizacion, "tipo_de_acuifero", "Confinado");
        assert_eq!(
            case.lookup(ModuleId::Caracterizacion, "tipo_acuifero")
                .map(FieldValue::raw_text),
            Some("Confinado".to_string())
        );

        // Canonical key wins over the alias when both are present.
        case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Libre");
        assert_eq!(
            case.lookup(ModuleId::Caracterizacion, "tipo_acuifero")
                .map(FieldValue::raw_text),
            Some("Libre".to_string())
        );
    }

    #[test]
    fn test_placeholder_values_are_not_informative() {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Fuente, "tipo_fuente", "No reportado");
        case.set_text(ModuleId::Fuente, "calidad_fuente", "Seleccione...");
        case.set_text(ModuleId::Fuente, "cumplimiento_normativo", "Sí");

        assert!(case.informative(ModuleId::Fuente, "tipo_fuente").is_none());
        assert!(case.informative(ModuleId::Fuente, "calidad_fuente").is_none());
        assert!(case
            .informative(ModuleId::Fuente, "cumplimiento_normativo")
            .is_some());
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let mut a = CaseRecord::new();
        a.set_text(ModuleId::Fuente, "tipo_fuente", "Superficial");
        a.set_number(ModuleId::Volumen, "demanda_hidrica", 1200.0);

        let mut b = CaseRecord::new();
        b.set_number(ModuleId::Volumen, "demanda_hidrica", 1200.0);
        b.set_text(ModuleId::Fuente, "tipo_fuente", "Superficial");

        assert_eq!(a.fingerprint(), b.fingerprint());

        b.set_text(ModuleId::Fuente, "tipo_fuente", "Pluvial");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_numeric_text_parses_with_comma() {
        let value = FieldValue::Text("12,5".to_string());
        assert_eq!(value.as_number(), Some(12.5));
    }
}
