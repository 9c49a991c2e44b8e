//! Plain-text Report Sink Adapter
//!
//! Renders every stage of a computation as fixed-width tables. Fuzzy numbers
//! print with 3 decimals, scalars with 4.

use std::fmt::{self, Write};

use crate::domain::foundation::{
    CriterionDirection, DomainError, ErrorCode, TriangularFuzzyNumber,
};
use crate::domain::vikor::{CompromiseResult, FuzzyMatrix, VikorOutcome};
use crate::ports::ReportSink;

const CELL_WIDTH: usize = 24;

/// Human readable report
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportSink;

impl TextReportSink {
    pub fn new() -> Self {
        Self
    }

    fn write_report(&self, out: &mut String, outcome: &VikorOutcome) -> fmt::Result {
        let criteria = outcome.aggregated_weights.len();
        let method = outcome.settings.defuzzification;

        writeln!(
            out,
            "Fuzzy VIKOR ({}, defuzzification={})",
            outcome.settings.strategy_weight, method
        )?;

        writeln!(out, "\nAggregated criteria weights")?;
        for (j, weight) in outcome.aggregated_weights.iter().enumerate() {
            writeln!(out, "  C{:<4}{}", j + 1, weight)?;
        }

        writeln!(out, "\nAggregated performance")?;
        write_matrix(out, &outcome.aggregated_performance, criteria)?;

        writeln!(out, "\nIdeal (f*) and anti-ideal (f-)")?;
        writeln!(out, "  {:<6}{:<9}{:<w$}{}", "Crit", "Type", "f*", "f-", w = CELL_WIDTH)?;
        for j in 0..criteria {
            let ideal = outcome.references.ideal.get(j).copied().unwrap_or_default();
            let anti = outcome.references.anti_ideal.get(j).copied().unwrap_or_default();
            let direction = match outcome.directions.get(j) {
                Some(CriterionDirection::Cost) => "Cost",
                _ => "Benefit",
            };
            writeln!(
                out,
                "  {:<6}{:<9}{:<w$}{}",
                format!("C{}", j + 1),
                direction,
                ideal.to_string(),
                anti,
                w = CELL_WIDTH
            )?;
        }

        writeln!(out, "\nNormalized fuzzy deviations")?;
        write_matrix(out, &outcome.normalized, criteria)?;

        writeln!(out, "\nWeighted normalized deviations (defuzzified)")?;
        for (a, row) in outcome.weighted.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| format!("{:.3}", cell.defuzzify(method)))
                .collect();
            let utility = outcome.utilities.get(a);
            writeln!(
                out,
                "  A{:<4}{}  S={:.4}  R={:.4}",
                a + 1,
                cells.join("  "),
                utility.map(|u| u.s).unwrap_or_default(),
                utility.map(|u| u.r).unwrap_or_default(),
            )?;
        }

        writeln!(out, "\nRanking")?;
        writeln!(
            out,
            "  {:<6}{:>8}{:>8}{:>8}{:>8}{:>8}{:>8}",
            "Alt", "S", "R", "Q", "Q-rank", "S-rank", "R-rank"
        )?;
        for entry in &outcome.ranking {
            writeln!(
                out,
                "  {:<6}{:>8.4}{:>8.4}{:>8.4}{:>8}{:>8}{:>8}",
                format!("A{}", entry.alternative + 1),
                entry.s,
                entry.r,
                entry.q,
                entry.q_rank,
                entry.s_rank,
                entry.r_rank
            )?;
        }

        writeln!(out, "\nCompromise solution")?;
        match &outcome.compromise {
            CompromiseResult::NoAlternatives => {
                writeln!(out, "  Not acceptable: no alternatives")?;
            }
            CompromiseResult::NotApplicable { alternative } => {
                writeln!(out, "  DQ: -")?;
                writeln!(out, "  Conditions not applicable to a single alternative")?;
                writeln!(out, "  Accepted: A{}", alternative + 1)?;
            }
            CompromiseResult::Evaluated(check) => {
                writeln!(out, "  DQ (threshold): {:.4}", check.threshold)?;
                writeln!(out, "  Advantage (Q2 - Q1): {:.4}", check.advantage)?;
                writeln!(
                    out,
                    "  Condition 1 (advantage >= DQ): {}",
                    yes_no(check.acceptable_advantage)
                )?;
                writeln!(
                    out,
                    "  Condition 2 (best by S or R): {}",
                    yes_no(check.acceptable_stability)
                )?;
                let accepted: Vec<String> = check
                    .accepted
                    .iter()
                    .map(|&a| {
                        let q = outcome
                            .compromise_indices
                            .get(a)
                            .map(|i| i.value)
                            .unwrap_or_default();
                        format!("A{} (Q={:.4})", a + 1, q)
                    })
                    .collect();
                writeln!(out, "  Accepted: {}", accepted.join(", "))?;
            }
        }

        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn write_matrix(out: &mut String, matrix: &FuzzyMatrix, criteria: usize) -> fmt::Result {
    write!(out, "  {:<6}", "Alt")?;
    for j in 0..criteria {
        write!(out, "{:<w$}", format!("C{}", j + 1), w = CELL_WIDTH)?;
    }
    writeln!(out)?;

    for (a, row) in matrix.iter().enumerate() {
        write!(out, "  {:<6}", format!("A{}", a + 1))?;
        for j in 0..criteria {
            let cell: TriangularFuzzyNumber = row.get(j).copied().unwrap_or_default();
            write!(out, "{:<w$}", cell.to_string(), w = CELL_WIDTH)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl ReportSink for TextReportSink {
    fn render(&self, outcome: &VikorOutcome) -> Result<String, DomainError> {
        let mut out = String::new();
        self.write_report(&mut out, outcome).map_err(|e| {
            DomainError::new(ErrorCode::RenderFailed, format!("Failed to render report: {}", e))
        })?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Assessment;
    use crate::domain::vikor::{EngineSettings, VikorEngine};

    fn render(assessment: &Assessment) -> String {
        let outcome = VikorEngine::new(EngineSettings::default()).compute(assessment);
        TextReportSink::new().render(&outcome).unwrap()
    }

    #[test]
    fn test_sample_report_has_every_section() {
        let report = render(&Assessment::sample());

        assert!(report.starts_with("Fuzzy VIKOR (v=0.50, defuzzification=centroid)"));
        for heading in [
            "Aggregated criteria weights",
            "Aggregated performance",
            "Ideal (f*) and anti-ideal (f-)",
            "Normalized fuzzy deviations",
            "Weighted normalized deviations (defuzzified)",
            "Ranking",
            "Compromise solution",
        ] {
            assert!(report.contains(heading), "missing section {}", heading);
        }
        assert!(report.contains("DQ (threshold): 0.3333"));
        assert!(report.contains("[0.300, 0.500, 0.700]"));
    }

    #[test]
    fn test_cost_criterion_is_labelled() {
        let report = render(&Assessment::new(2, 2, 1).toggle_direction(1));
        assert!(report.contains("Cost"));
        assert!(report.contains("Benefit"));
    }

    #[test]
    fn test_empty_and_single_alternative_reports() {
        assert!(render(&Assessment::new(0, 2, 1)).contains("Not acceptable: no alternatives"));

        let single = render(&Assessment::new(1, 2, 1));
        assert!(single.contains("not applicable"));
        assert!(single.contains("Accepted: A1"));
    }
}
