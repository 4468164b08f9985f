//! Markdown report generator.

use super::{AssessmentReporter, ReportError, ReportMetadata};
use crate::pipeline::Assessment;
use crate::suitability::{CR_ACCEPTABLE, TOTAL_ROW_ID};
use std::fmt::Write as _;

/// Markdown report generator
#[derive(Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AssessmentReporter for MarkdownReporter {
    fn generate(
        &self,
        assessment: &Assessment,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "# Evaluación de idoneidad MAR").ok();
        writeln!(out).ok();
        if let Some(path) = &metadata.case_path {
            writeln!(out, "- **Caso:** `{path}`").ok();
        }
        writeln!(out, "- **Generado:** {}", metadata.generated_at).ok();
        writeln!(
            out,
            "- **Herramienta:** {} v{}",
            metadata.tool, metadata.version
        )
        .ok();
        writeln!(out, "- **Huella del caso:** `{:016x}`", assessment.fingerprint).ok();
        writeln!(out).ok();

        self.write_scenario(&mut out, assessment);
        self.write_podium(&mut out, assessment);
        self.write_wlc(&mut out, assessment);
        self.write_criteria(&mut out, assessment);
        self.write_ahp(&mut out, assessment);
        self.write_missing(&mut out, assessment);
        self.write_recommendations(&mut out, assessment);

        Ok(out)
    }
}

impl MarkdownReporter {
    fn write_scenario(&self, out: &mut String, assessment: &Assessment) {
        let scenario = &assessment.scenario;
        writeln!(out, "## Escenario de completitud").ok();
        writeln!(out).ok();
        writeln!(out, "**{}** — {}/{} variables con información completa.",
            scenario.tier, scenario.completed, scenario.total).ok();
        writeln!(out).ok();
    }

    fn write_podium(&self, out: &mut String, assessment: &Assessment) {
        writeln!(out, "## Podio de grupos de técnicas").ok();
        writeln!(out).ok();
        writeln!(out, "| Puesto | Grupo | Índice de idoneidad |").ok();
        writeln!(out, "|--------|-------|---------------------|").ok();
        for entry in &assessment.podium.entries {
            writeln!(
                out,
                "| {} | {} — {} | {:.3} |",
                entry.rank,
                entry.group.id(),
                entry.group.label(),
                entry.total
            )
            .ok();
        }
        writeln!(out).ok();
    }

    fn write_wlc(&self, out: &mut String, assessment: &Assessment) {
        writeln!(out, "## Combinación lineal ponderada").ok();
        writeln!(out).ok();
        writeln!(out, "| Criterio | Peso | G1 | G2 | G3 |").ok();
        writeln!(out, "|----------|------|----|----|----|").ok();
        for row in &assessment.wlc.rows {
            writeln!(
                out,
                "| {} | {:.3} | {:.3} | {:.3} | {:.3} |",
                row.criterion,
                row.weight,
                row.contributions.g1,
                row.contributions.g2,
                row.contributions.g3
            )
            .ok();
        }
        let totals = &assessment.wlc.totals;
        writeln!(
            out,
            "| **{}** | | **{:.3}** | **{:.3}** | **{:.3}** |",
            TOTAL_ROW_ID, totals.g1, totals.g2, totals.g3
        )
        .ok();
        writeln!(out).ok();
    }

    fn write_criteria(&self, out: &mut String, assessment: &Assessment) {
        writeln!(out, "## Puntajes por criterio (Sc)").ok();
        writeln!(out).ok();
        writeln!(out, "| Criterio | G1 | G2 | G3 |").ok();
        writeln!(out, "|----------|----|----|----|").ok();
        for aggregate in &assessment.criteria {
            writeln!(
                out,
                "| {} — {} | {:.2} | {:.2} | {:.2} |",
                aggregate.id, aggregate.label, aggregate.g1.sc, aggregate.g2.sc, aggregate.g3.sc
            )
            .ok();
        }
        writeln!(out).ok();
    }

    fn write_ahp(&self, out: &mut String, assessment: &Assessment) {
        let ahp = &assessment.ahp;
        writeln!(out, "## Ponderación AHP").ok();
        writeln!(out).ok();
        writeln!(
            out,
            "Pesos: {}",
            ahp.weights
                .iter()
                .enumerate()
                .map(|(i, w)| format!("C{} = {:.3}", i + 1, w))
                .collect::<Vec<_>>()
                .join(", ")
        )
        .ok();
        writeln!(out).ok();
        writeln!(
            out,
            "λmax = {:.4}, CI = {:.4}, CR = {:.4}",
            ahp.lambda_max, ahp.ci, ahp.cr
        )
        .ok();
        writeln!(out).ok();
        if ahp.is_consistent() {
            writeln!(out, "La matriz de comparación es consistente (CR ≤ {CR_ACCEPTABLE}).").ok();
        } else {
            writeln!(
                out,
                "**Atención:** CR > {CR_ACCEPTABLE}; se recomienda revisar los juicios de comparación."
            )
            .ok();
        }
        writeln!(out).ok();
    }

    fn write_missing(&self, out: &mut String, assessment: &Assessment) {
        if assessment.scenario.missing.is_empty() {
            return;
        }
        writeln!(out, "## Información faltante").ok();
        writeln!(out).ok();
        for path in &assessment.scenario.missing {
            writeln!(out, "- `{path}`").ok();
        }
        writeln!(out).ok();
    }

    fn write_recommendations(&self, out: &mut String, assessment: &Assessment) {
        let winner = assessment.podium.winner();
        writeln!(out, "## Técnicas recomendadas").ok();
        writeln!(out).ok();
        writeln!(
            out,
            "Grupo ganador: **{} — {}**",
            winner.group.id(),
            winner.group.label()
        )
        .ok();
        writeln!(out).ok();
        for technique in &assessment.recommendations {
            writeln!(out, "- **{}** — {}", technique.name, technique.description).ok();
        }
        writeln!(out).ok();

        // Per-group observations for the winning group.
        writeln!(out, "### Observaciones por criterio").ok();
        writeln!(out).ok();
        for aggregate in &assessment.criteria {
            writeln!(
                out,
                "- {}: {}",
                aggregate.id,
                aggregate.group(winner.group).observation
            )
            .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseRecord, ModuleId};
    use crate::pipeline::{assess, AssessOptions};

    #[test]
    fn test_markdown_report_sections() {
        let mut case = CaseRecord::new();
        case.set_text(ModuleId::Caracterizacion, "tipo_acuifero", "Libre");
        case.set_text(ModuleId::Fuente, "tipo_fuente", "Superficial");
        case.set_text(ModuleId::Fuente, "calidad_fuente", "Apta");
        case.set_text(ModuleId::Fuente, "cumplimiento_normativo", "Sí");
        case.set_text(ModuleId::Volumen, "uso_final", "Doméstico");

        let assessment = assess(&case, &AssessOptions::default());
        let metadata = ReportMetadata::new(None);
        let output = MarkdownReporter::new().generate(&assessment, &metadata).unwrap();

        assert!(output.contains("# Evaluación de idoneidad MAR"));
        assert!(output.contains("TOTAL_IDONEIDAD"));
        assert!(output.contains("## Podio de grupos de técnicas"));
        assert!(output.contains("CR ="));
        assert!(output.contains("## Técnicas recomendadas"));
    }
}
