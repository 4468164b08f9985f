//! Compact shell-friendly summary output.

use super::{AssessmentReporter, ReportError, ReportMetadata};
use crate::pipeline::Assessment;
use std::fmt::Write as _;

/// Brief summary reporter
#[derive(Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AssessmentReporter for SummaryReporter {
    fn generate(
        &self,
        assessment: &Assessment,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let scenario = &assessment.scenario;

        writeln!(out, "{}", scenario.tier).ok();
        writeln!(
            out,
            "Completitud: {}/{} variables",
            scenario.completed, scenario.total
        )
        .ok();

        let winner = assessment.podium.winner();
        writeln!(out).ok();
        for entry in &assessment.podium.entries {
            let marker = if entry.group == winner.group { "★" } else { " " };
            writeln!(
                out,
                "{marker} {}. {} {:<38} {:.3}",
                entry.rank,
                entry.group.id(),
                entry.group.label(),
                entry.total
            )
            .ok();
        }

        if !assessment.ahp.is_consistent() {
            writeln!(out).ok();
            writeln!(
                out,
                "Atención: CR = {:.3} > 0.10 — revise los juicios de comparación",
                assessment.ahp.cr
            )
            .ok();
        }

        if !scenario.missing.is_empty() {
            writeln!(out).ok();
            writeln!(
                out,
                "Faltan {} campo(s) para el siguiente escenario",
                scenario.missing.len()
            )
            .ok();
        }

        writeln!(out).ok();
        writeln!(out, "Técnicas sugeridas ({}):", winner.group.id()).ok();
        for technique in &assessment.recommendations {
            writeln!(out, "  - {}", technique.name).ok();
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseRecord, ModuleId};
    use crate::pipeline::{assess, AssessOptions};

    #[test]
    fn test_summary_mentions_winner_and_tier() {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Libre");
        case.set_text(ModuleId::Fuente, "tipo_fuente", "Superficial");
        case.set_text(ModuleId::Fuente, "calidad_fuente", "Apta");
        case.set_text(ModuleId::Fuente, "cumplimiento_normativo", "Sí");
        case.set_text(ModuleId::Volumen, "uso_final", "Doméstico");

        let assessment = assess(&case, &AssessOptions::default());
        let output = SummaryReporter::new()
            .generate(&assessment, &ReportMetadata::new(None))
            .unwrap();

        assert!(output.contains("Escenario 1"));
        assert!(output.contains("Técnicas sugeridas"));
        assert!(output.contains('★'));
    }
}
