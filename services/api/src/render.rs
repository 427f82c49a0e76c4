use crate::infra::parse_asking_price;
use clap::Args;
use mot_valuation::config::AppConfig;
use mot_valuation::error::AppError;
use mot_valuation::history::{HistoryImporter, VehicleHistory};
use mot_valuation::repair_costs::{
    catalog, history_summary, CategoryView, HistorySummary, DISCLAIMER, LAST_UPDATED,
};
use mot_valuation::valuation::{ValuationEngine, ValuationReport};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ValuateArgs {
    /// Path to an MOT history JSON document
    #[arg(long)]
    pub(crate) history: PathBuf,
    /// Asking price in GBP
    #[arg(long, value_parser = parse_asking_price)]
    pub(crate) asking_price: f64,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RepairCostsArgs {
    /// Summarise recurring issues from an MOT history JSON document instead
    #[arg(long)]
    pub(crate) history: Option<PathBuf>,
}

pub(crate) fn run_valuate(args: ValuateArgs) -> Result<(), AppError> {
    let ValuateArgs {
        history,
        asking_price,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = ValuationEngine::new(config.valuation)?;
    let history = HistoryImporter::from_path(history)?;
    let report = engine.calculate_valuation(&history.tests, asking_price);

    if json {
        println!("{}", to_pretty_json(&report)?);
    } else {
        print!("{}", render_valuation(&history, &report));
    }
    Ok(())
}

pub(crate) fn run_repair_costs(args: RepairCostsArgs) -> Result<(), AppError> {
    match args.history {
        Some(path) => {
            let history = HistoryImporter::from_path(path)?;
            print!("{}", render_history_summary(&history_summary(&history.tests)));
        }
        None => print!("{}", render_catalog(&catalog())),
    }
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Io(std::io::Error::from(err)))
}

pub(crate) fn render_valuation(history: &VehicleHistory, report: &ValuationReport) -> String {
    let mut out = String::new();
    let vehicle = [
        history.registration.as_deref(),
        history.make.as_deref(),
        history.model.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");
    let vehicle = if vehicle.is_empty() {
        "Unidentified vehicle".to_string()
    } else {
        vehicle
    };

    let _ = writeln!(out, "MOT valuation: {vehicle}");

    let Some(assessment) = report.assessment() else {
        let _ = writeln!(out, "- {}", report.recommendation().label());
        let _ = writeln!(out, "  {}", report.message());
        return out;
    };

    let _ = writeln!(
        out,
        "- {} (score {:.1}/100)",
        assessment.recommendation.label(),
        assessment.overall_score
    );
    let _ = writeln!(out, "  {}", assessment.message);

    let scores = &assessment.scores;
    let _ = writeln!(out, "Scores:");
    for (label, value) in [
        ("MOT history", scores.mot_history),
        ("Recent failures", scores.recent_failures),
        ("Dangerous defects", scores.dangerous_defects),
        ("Mileage consistency", scores.mileage_consistency),
        ("Age", scores.age_factor),
    ] {
        let _ = writeln!(out, "  - {label}: {value:.1}");
    }

    let finance = &assessment.financial_analysis;
    let _ = writeln!(out, "Financials ({}):", finance.currency);
    let _ = writeln!(out, "  - Asking price: £{:.2}", finance.asking_price);
    let _ = writeln!(
        out,
        "  - Immediate repairs: £{:.2} (range £{:.2} to £{:.2})",
        finance.estimated_repairs, finance.estimated_repairs_min, finance.estimated_repairs_max
    );
    let _ = writeln!(out, "  - Total estimated cost: £{:.2}", finance.total_estimated_cost);
    for line in &finance.repair_breakdown {
        let marker = if line.dangerous { " [dangerous]" } else { "" };
        let _ = writeln!(
            out,
            "    * {}{marker}: {} £{:.2}",
            line.issue, line.estimate.category, line.estimate.average_cost
        );
    }

    let summary = &assessment.mot_summary;
    let _ = writeln!(
        out,
        "MOT summary: {} tests | last {} on {} | {} recent failures | {} dangerous defects",
        summary.total_tests,
        summary.last_mot_result,
        summary.last_mot_date,
        summary.recent_failures,
        summary.dangerous_defects_found
    );

    let _ = writeln!(out, "Risk factors:");
    for factor in &assessment.risk_factors {
        let _ = writeln!(out, "  - {factor}");
    }
    let _ = writeln!(out, "Positive factors:");
    for factor in &assessment.positive_factors {
        let _ = writeln!(out, "  - {factor}");
    }

    out
}

pub(crate) fn render_catalog(categories: &[CategoryView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Repair cost reference (GBP, updated {LAST_UPDATED})");
    for category in categories {
        let _ = writeln!(
            out,
            "- {:<20} £{:>5} to £{:>5} (avg £{:>4})  {}",
            category.category,
            category.min_cost,
            category.max_cost,
            category.average_cost,
            category.description
        );
    }
    let _ = writeln!(out, "{DISCLAIMER}");
    out
}

pub(crate) fn render_history_summary(summary: &HistorySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Recurring issues ({} failures, {} advisories across all tests)",
        summary.total_failures, summary.total_advisories
    );
    if summary.recurring_issues.is_empty() {
        let _ = writeln!(out, "- No defects recorded");
    }
    for issue in &summary.recurring_issues {
        let _ = writeln!(
            out,
            "- {} x{}: {}",
            issue.category, issue.count, issue.description
        );
        for example in &issue.examples {
            let _ = writeln!(out, "    * {example}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mot_valuation::history::{DefectItem, DefectKind, InspectionRecord, TestResult};
    use mot_valuation::valuation::calculate_valuation;

    fn sample_history() -> VehicleHistory {
        VehicleHistory {
            registration: Some("AB12CDE".to_string()),
            make: Some("FORD".to_string()),
            model: Some("FOCUS".to_string()),
            tests: vec![InspectionRecord {
                completed_date: Some("2024.03.01".to_string()),
                test_result: TestResult::Failed,
                odometer_value: Some(62_000),
                mot_test_number: "1".to_string(),
                defects: vec![DefectItem::new(
                    "Nearside Front Brake pad worn below 1.5mm",
                    DefectKind::Major,
                )
                .flagged_dangerous()],
                ..InspectionRecord::default()
            }],
        }
    }

    #[test]
    fn valuation_text_lists_scores_and_repairs() {
        let history = sample_history();
        let report = calculate_valuation(&history.tests, 4000.0);

        let text = render_valuation(&history, &report);

        assert!(text.starts_with("MOT valuation: AB12CDE FORD FOCUS"));
        assert!(text.contains("Mileage consistency: 50.0"));
        assert!(text.contains("Nearside Front Brake pad worn below 1.5mm [dangerous]: brake £180.00"));
        assert!(text.contains("Total estimated cost: £4180.00"));
        assert!(text.contains("Risk factors:"));
    }

    #[test]
    fn valuation_text_handles_empty_history() {
        let history = VehicleHistory::default();
        let report = calculate_valuation(&history.tests, 4000.0);

        let text = render_valuation(&history, &report);

        assert!(text.contains("Unidentified vehicle"));
        assert!(text.contains("No MOT history available for assessment"));
        assert!(!text.contains("Scores:"));
    }

    #[test]
    fn json_output_failures_are_internal_errors() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;
        use std::collections::BTreeMap;

        let keyed_by_pair = BTreeMap::from([((1u8, 2u8), "brake")]);
        let error = to_pretty_json(&keyed_by_pair).expect_err("tuple keys are not json objects");

        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let report = calculate_valuation(&sample_history().tests, 4000.0);
        let body = to_pretty_json(&report).expect("report serializes");
        assert!(body.contains("\"recommendation\": \"acceptable_with_caution\""));
    }

    #[test]
    fn catalog_table_lists_categories_in_order() {
        let text = render_catalog(&catalog());
        let brake = text.find("brake").expect("brake row");
        let doors = text.find("doors").expect("doors row");

        assert!(brake < doors);
        assert!(text.ends_with(&format!("{DISCLAIMER}\n")));
    }

    #[test]
    fn history_digest_reports_empty_history() {
        let text = render_history_summary(&history_summary(&[]));

        assert!(text.contains("0 failures, 0 advisories"));
        assert!(text.contains("No defects recorded"));
    }
}
