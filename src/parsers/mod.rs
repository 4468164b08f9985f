//! Case-file parsing.
//!
//! Case records travel as a JSON object keyed by module name, each module an
//! object of field → value pairs (strings or numbers). The module set is
//! closed: anything outside the ten registered modules is a parse error, not
//! a warning. An optional top-level `mapas` object carries per-layer
//! map-upload flags.
//!
//! ```no_run
//! use mar_tools::parsers::parse_case;
//! use std::path::Path;
//!
//! let case = parse_case(Path::new("caso.json")).unwrap();
//! println!("{} módulos con datos", case.modules.len());
//! ```

use crate::error::{MarToolsError, ParseErrorKind, Result};
use crate::model::{CaseRecord, FieldValue, ModuleId};
use crate::suitability::PairwiseMatrix;
use serde_json::Value;
use std::path::Path;

/// Top-level key carrying map-upload flags (not a module).
const MAP_LAYERS_KEY: &str = "mapas";

/// Parse a case record from a file.
pub fn parse_case(path: &Path) -> Result<CaseRecord> {
    let content =
        std::fs::read_to_string(path).map_err(|e| MarToolsError::io(path.to_path_buf(), e))?;
    parse_case_str(&content)
}

/// Parse a case record from JSON text.
pub fn parse_case_str(content: &str) -> Result<CaseRecord> {
    let root: Value = serde_json::from_str(content)?;
    let Value::Object(modules) = root else {
        return Err(MarToolsError::parse(
            "top level",
            ParseErrorKind::InvalidJson("expected an object of modules".to_string()),
        ));
    };

    let mut case = CaseRecord::new();

    for (key, body) in modules {
        if key == MAP_LAYERS_KEY {
            parse_map_layers(&body, &mut case)?;
            continue;
        }

        let Some(module) = ModuleId::parse(&key) else {
            return Err(MarToolsError::unknown_module(key));
        };

        let Value::Object(fields) = body else {
            return Err(MarToolsError::parse(
                format!("module '{module}'"),
                ParseErrorKind::InvalidModuleBody {
                    module: module.as_str().to_string(),
                },
            ));
        };

        for (field_key, raw) in fields {
            match field_value(&raw) {
                Ok(Some(value)) => case.set(module, field_key, value),
                // Nulls mean the field was never touched.
                Ok(None) => {}
                Err(message) => {
                    return Err(MarToolsError::parse(
                        format!("module '{module}'"),
                        ParseErrorKind::InvalidValue {
                            field: format!("{module}.{field_key}"),
                            message,
                        },
                    ));
                }
            }
        }
    }

    tracing::debug!(
        modules = case.modules.len(),
        map_layers = case.map_layers.len(),
        "case parsed"
    );
    Ok(case)
}

fn field_value(raw: &Value) -> std::result::Result<Option<FieldValue>, String> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(FieldValue::Text(s.clone()))),
        Value::Number(n) => n
            .as_f64()
            .map(|f| Some(FieldValue::Number(f)))
            .ok_or_else(|| format!("number {n} is out of range")),
        other => Err(format!(
            "expected a string or number, got {}",
            type_name(other)
        )),
    }
}

fn parse_map_layers(body: &Value, case: &mut CaseRecord) -> Result<()> {
    let Value::Object(layers) = body else {
        return Err(MarToolsError::parse(
            "map layers",
            ParseErrorKind::InvalidModuleBody {
                module: MAP_LAYERS_KEY.to_string(),
            },
        ));
    };
    for (layer, flag) in layers {
        let Value::Bool(present) = flag else {
            return Err(MarToolsError::parse(
                "map layers",
                ParseErrorKind::InvalidValue {
                    field: format!("{MAP_LAYERS_KEY}.{layer}"),
                    message: "expected a boolean upload flag".to_string(),
                },
            ));
        };
        case.map_layers.insert(layer.clone(), *present);
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a 5×5 pairwise-comparison matrix from a file: a JSON array of five
/// rows of five positive numbers. The matrix is validated here, at the
/// input boundary the engine relies on.
pub fn parse_matrix(path: &Path) -> Result<PairwiseMatrix> {
    let content =
        std::fs::read_to_string(path).map_err(|e| MarToolsError::io(path.to_path_buf(), e))?;
    parse_matrix_str(&content)
}

/// Parse and validate a pairwise matrix from JSON text.
pub fn parse_matrix_str(content: &str) -> Result<PairwiseMatrix> {
    let entries: [[f64; 5]; 5] = serde_json::from_str(content)?;
    let matrix = PairwiseMatrix(entries);
    matrix.validate().map_err(|message| {
        MarToolsError::parse("pairwise matrix", ParseErrorKind::InvalidMatrix(message))
    })?;
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_case() {
        let case = parse_case_str(
            r#"{
                "caracterizacion": {"tipo_acuifero": "Libre"},
                "fuente": {"tipo_fuente": "Superficial", "calidad_fuente": "Apta"},
                "volumen": {"uso_final": "Doméstico", "demanda_hidrica": 1200.5}
            }"#,
        )
        .unwrap();

        assert_eq!(
            case.token(ModuleId::Caracterizacion, "tipo_acuifero").as_deref(),
            Some("libre")
        );
        assert_eq!(
            case.get_raw(ModuleId::Volumen, "demanda_hidrica")
                .and_then(FieldValue::as_number),
            Some(1200.5)
        );
    }

    #[test]
    fn test_unknown_module_rejected() {
        let err = parse_case_str(r#"{"geotecnia": {}}"#).unwrap_err();
        assert!(err.to_string().contains("parse case file"));
    }

    #[test]
    fn test_null_fields_are_skipped() {
        let case = parse_case_str(r#"{"fuente": {"tipo_fuente": null}}"#).unwrap();
        assert!(case.get_raw(ModuleId::Fuente, "tipo_fuente").is_none());
    }

    #[test]
    fn test_non_scalar_field_rejected() {
        assert!(parse_case_str(r#"{"fuente": {"tipo_fuente": ["Superficial"]}}"#).is_err());
    }

    #[test]
    fn test_map_layers_parsed() {
        let case = parse_case_str(
            r#"{"mapas": {"geologia": true, "pendientes": false}}"#,
        )
        .unwrap();
        assert_eq!(case.map_layers.get("geologia"), Some(&true));
        assert_eq!(case.map_layers.get("pendientes"), Some(&false));
    }

    #[test]
    fn test_matrix_roundtrip_and_validation() {
        let matrix = parse_matrix_str(
            "[[1,5,5,5,5],[0.2,1,1,1,1],[0.2,1,1,1,1],[0.2,1,1,1,1],[0.2,1,1,1,1]]",
        )
        .unwrap();
        assert_eq!(matrix.0[0][1], 5.0);

        let bad = parse_matrix_str(
            "[[1,5,5,5,5],[0.5,1,1,1,1],[0.2,1,1,1,1],[0.2,1,1,1,1],[0.2,1,1,1,1]]",
        );
        assert!(bad.is_err());
    }
}
