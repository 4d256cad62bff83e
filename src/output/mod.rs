// mod.rs - Run summary formatters

use serde::Serialize;
use std::fmt::Write;

use crate::core::LoadedInputs;
use crate::data::Dataset;

#[derive(Debug, Serialize)]
pub struct TableSummary<'a> {
    pub dataset: Dataset,
    pub columns: &'a [String],
    pub rows: usize,
}

#[derive(Debug, Serialize)]
pub struct FailureSummary<'a> {
    pub dataset: Dataset,
    pub path: String,
    pub reason: &'a str,
}

/// What a run loaded and which assumptions it violated
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub version: &'static str,
    pub output_dir: String,
    pub overwrite: bool,
    pub tables: Vec<TableSummary<'a>>,
    pub assumptions: Vec<&'static str>,
    pub load_failures: Vec<FailureSummary<'a>>,
}

impl<'a> RunSummary<'a> {
    pub fn new(inputs: &'a LoadedInputs, overwrite: bool) -> Self {
        let tables = Dataset::ALL
            .iter()
            .map(|&dataset| {
                let table = inputs.table(dataset);
                TableSummary {
                    dataset,
                    columns: &table.headers,
                    rows: table.len(),
                }
            })
            .collect();

        let load_failures = inputs
            .load_failures
            .iter()
            .map(|failure| FailureSummary {
                dataset: failure.dataset,
                path: failure.path.display().to_string(),
                reason: &failure.reason,
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION"),
            output_dir: inputs.output_dir.display().to_string(),
            overwrite,
            tables,
            assumptions: inputs.report.messages(),
            load_failures,
        }
    }
}

/// Human-readable summary
pub fn render_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📁 Output directory: {}", summary.output_dir);
    let _ = writeln!(out, "📝 Overwrite: {}", summary.overwrite);
    for table in &summary.tables {
        let _ = writeln!(
            out,
            "📊 {}: {} rows × {} columns [{}]",
            table.dataset,
            table.rows,
            table.columns.len(),
            table.columns.join(", ")
        );
    }
    for failure in &summary.load_failures {
        let _ = writeln!(
            out,
            "⚠️  {} replaced by an empty table: {}",
            failure.path, failure.reason
        );
    }

    if summary.assumptions.is_empty() {
        let _ = writeln!(out, "✅ All input assumptions hold");
    } else {
        let _ = writeln!(out, "\n=== VIOLATED ASSUMPTIONS ===");
        for message in &summary.assumptions {
            let _ = writeln!(out, "❌ {}", message);
        }
    }
    out
}

pub fn render_json(summary: &RunSummary) -> Result<String, String> {
    serde_json::to_string_pretty(summary).map_err(|e| format!("Failed to serialize summary: {}", e))
}

/// Print the summary of a finished load to stdout
pub fn print_summary(inputs: &LoadedInputs, overwrite: bool, json: bool) -> Result<(), String> {
    let summary = RunSummary::new(inputs, overwrite);
    if json {
        println!("{}", render_json(&summary)?);
    } else {
        print!("{}", render_text(&summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Assumption, AssumptionReport, LoadFailure};
    use crate::data::Table;
    use std::path::PathBuf;

    fn inputs(report: AssumptionReport, load_failures: Vec<LoadFailure>) -> LoadedInputs {
        LoadedInputs {
            countries: Table::new(
                vec!["id".into(), "countries".into(), "ranking".into()],
                vec![vec!["1".into(), "France".into(), "5".into()]],
            ),
            poule_phase: Table::empty(),
            final_phase: Table::empty(),
            output_dir: PathBuf::from("out"),
            report,
            load_failures,
        }
    }

    #[test]
    fn test_text_summary_clean_run() {
        let inputs = inputs(AssumptionReport::new(), Vec::new());
        let text = render_text(&RunSummary::new(&inputs, false));

        assert!(text.contains("📁 Output directory: out"));
        assert!(text.contains("countries: 1 rows × 3 columns [id, countries, ranking]"));
        assert!(text.contains("✅ All input assumptions hold"));
    }

    #[test]
    fn test_text_summary_lists_violations() {
        let mut report = AssumptionReport::new();
        report.record(Assumption::FilesPresent);
        let inputs = inputs(report, Vec::new());
        let text = render_text(&RunSummary::new(&inputs, true));

        assert!(text.contains("VIOLATED ASSUMPTIONS"));
        assert!(text.contains(Assumption::FilesPresent.message()));
        assert!(!text.contains("All input assumptions hold"));
    }

    #[test]
    fn test_json_summary() {
        let mut report = AssumptionReport::new();
        report.record(Assumption::FilesReadable);
        let failures = vec![LoadFailure {
            dataset: Dataset::FinalPhaseGames,
            path: PathBuf::from("in/final_phase_games.csv"),
            reason: "bad record".to_string(),
        }];
        let inputs = inputs(report, failures);

        let json = render_json(&RunSummary::new(&inputs, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["output_dir"], "out");
        assert_eq!(value["overwrite"], false);
        assert_eq!(value["tables"][0]["dataset"], "countries");
        assert_eq!(value["tables"][0]["rows"], 1);
        assert_eq!(value["tables"][2]["dataset"], "final_phase_games");
        assert_eq!(value["assumptions"][0], Assumption::FilesReadable.message());
        assert_eq!(value["load_failures"][0]["reason"], "bad record");
    }
}
