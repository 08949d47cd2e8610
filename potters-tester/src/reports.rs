//! Aggregation and output for sweep results.

use colored::Colorize;
use serde::Serialize;

use crate::fairness::FairnessReport;
use crate::simulation::SessionReport;

/// Per-strategy rollup across every seed and iteration.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyAggregate {
    pub strategy: String,
    pub runs: usize,
    pub mean_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub timeouts: usize,
    pub records: usize,
}

#[must_use]
pub fn aggregate(reports: &[SessionReport]) -> Vec<StrategyAggregate> {
    let mut aggregates: Vec<StrategyAggregate> = Vec::new();
    for report in reports {
        let index = aggregates
            .iter()
            .position(|aggregate| aggregate.strategy == report.strategy)
            .unwrap_or_else(|| {
                aggregates.push(StrategyAggregate {
                    strategy: report.strategy.clone(),
                    runs: 0,
                    mean_score: 0.0,
                    min_score: u32::MAX,
                    max_score: 0,
                    timeouts: 0,
                    records: 0,
                });
                aggregates.len() - 1
            });
        let entry = &mut aggregates[index];
        entry.runs += 1;
        entry.mean_score += f64::from(report.score);
        entry.min_score = entry.min_score.min(report.score);
        entry.max_score = entry.max_score.max(report.score);
        entry.timeouts += report.timeouts;
        entry.records += usize::from(report.new_record);
    }
    for entry in &mut aggregates {
        if entry.runs > 0 {
            entry.mean_score /= entry.runs as f64;
        }
    }
    aggregates
}

#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub aggregates: &'a [StrategyAggregate],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fairness: Option<&'a FairnessReport>,
}

pub fn print_console(aggregates: &[StrategyAggregate], fairness: Option<&FairnessReport>) {
    println!("{}", "Potters Quiz logic sweep".bold());
    for entry in aggregates {
        println!(
            "  {:<10} runs {:>4}  score {:>5.2} ({}..{})  timeouts {:>3}  records {}",
            entry.strategy.cyan(),
            entry.runs,
            entry.mean_score,
            entry.min_score,
            entry.max_score,
            entry.timeouts,
            entry.records,
        );
    }
    if let Some(report) = fairness {
        let verdict = if report.passed {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        println!(
            "  fairness {verdict}  drift q {:.4} / c {:.4}  tolerance {:.4}  samples {}",
            report.question_drift, report.choice_drift, report.tolerance, report.samples,
        );
        if let Some(cell) = &report.worst_cell {
            println!(
                "    worst cell: {} at position {} observed {:.4} expected {:.4}",
                cell.subject, cell.position, cell.observed, cell.expected,
            );
        }
    }
}

/// Print the whole run as pretty JSON for machine consumers.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json(
    aggregates: &[StrategyAggregate],
    fairness: Option<&FairnessReport>,
) -> anyhow::Result<()> {
    let summary = RunSummary {
        aggregates,
        fairness,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
