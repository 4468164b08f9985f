//! JSON report generator.

use super::{AssessmentReporter, ReportError, ReportMetadata};
use crate::pipeline::Assessment;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    assessment: &'a Assessment,
}

impl AssessmentReporter for JsonReporter {
    fn generate(
        &self,
        assessment: &Assessment,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            metadata,
            assessment,
        };
        let serialize = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        serialize.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseRecord, ModuleId};
    use crate::pipeline::{assess, AssessOptions};

    #[test]
    fn test_json_report_contains_totals_row() {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Libre");
        case.set_text(ModuleId::Fuente, "tipo_fuente", "Superficial");
        case.set_text(ModuleId::Fuente, "calidad_fuente", "Apta");
        case.set_text(ModuleId::Fuente, "cumplimiento_normativo", "Sí");
        case.set_text(ModuleId::Volumen, "uso_final", "Doméstico");

        let assessment = assess(&case, &AssessOptions::default());
        let metadata = ReportMetadata::new(Some("caso.json".to_string()));
        let output = JsonReporter::new().generate(&assessment, &metadata).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["metadata"]["tool"], "mar-tools");
        assert!(parsed["assessment"]["wlc"]["totals"]["g1"].is_number());
        assert!(parsed["assessment"]["podium"]["entries"][0]["rank"].is_number());
    }
}
