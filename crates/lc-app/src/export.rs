//! CSV and JSON export of run results.

use std::fmt::Write;
use std::path::Path;
use std::str::FromStr;

use lc_sim::{RunOutcome, Sample, SimulationResult};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::run_service::RunReport;

/// Output formats for exported runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidInput(format!(
                "unknown export format '{other}'"
            ))),
        }
    }
}

pub fn to_csv(result: &SimulationResult) -> String {
    let mut csv = String::from("time,population_a,population_b\n");
    for s in result {
        let _ = writeln!(csv, "{},{},{}", s.t, s.a, s.b);
    }
    csv
}

#[derive(Serialize)]
struct RunExport<'a> {
    scenario: &'a str,
    labels: [&'a str; 2],
    time_unit: &'a str,
    step_size: f64,
    outcome: RunOutcome,
    samples: &'a [Sample],
}

pub fn to_json(report: &RunReport) -> AppResult<String> {
    let scenario = &report.scenario;
    let doc = RunExport {
        scenario: &scenario.name,
        labels: [
            scenario.factions.a.label.as_str(),
            scenario.factions.b.label.as_str(),
        ],
        time_unit: &scenario.display.time_unit,
        step_size: report.result.step_size(),
        outcome: report.result.outcome(),
        samples: report.result.samples(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Render a report in `format`.
pub fn render(report: &RunReport, format: ExportFormat) -> AppResult<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(&report.result)),
        ExportFormat::Json => to_json(report),
    }
}

/// Write rendered output to `path`.
pub fn write_to(path: &Path, content: &str) -> AppResult<()> {
    std::fs::write(path, content).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_service::run_scenario;
    use lc_project::presets;

    fn cut_report() -> RunReport {
        let mut scenario = presets::test_conditions();
        scenario.cutoff.enabled = true;
        run_scenario(&scenario).unwrap()
    }

    #[test]
    fn csv_has_header_and_one_line_per_sample() {
        let report = cut_report();
        let csv = to_csv(&report.result);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("time,population_a,population_b"));
        assert_eq!(lines.next(), Some("0,100,100"));
        assert_eq!(csv.lines().count(), report.result.len() + 1);
    }

    #[test]
    fn json_carries_outcome_and_samples() {
        let report = cut_report();
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["scenario"], "Test conditions");
        assert_eq!(value["labels"][0], "Tanks");
        assert_eq!(value["outcome"]["kind"], "cut_off");
        assert_eq!(value["outcome"]["step"], 151);
        assert_eq!(value["outcome"]["depleted"], "both");
        assert_eq!(
            value["samples"].as_array().map(Vec::len),
            Some(report.result.len())
        );
        assert_eq!(value["samples"][0]["a"], 100.0);
    }

    #[test]
    fn format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn render_dispatches_on_format() {
        let report = cut_report();
        assert!(render(&report, ExportFormat::Csv).unwrap().starts_with("time,"));
        assert!(render(&report, ExportFormat::Json).unwrap().starts_with('{'));
    }

    #[test]
    fn write_to_reports_path_on_failure() {
        let path = std::env::temp_dir()
            .join("lc_app_missing_dir")
            .join("nested")
            .join("out.csv");
        match write_to(&path, "x") {
            Err(AppError::OutputWrite { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
