use super::rules::{recent_failed_results, recent_passed_results};
use crate::history::{DefectKind, InspectionRecord};
use crate::repair_costs::CostBreakdown;

const HIGH_REPAIR_COST: f64 = 1000.0;
const MODERATE_REPAIR_COST: f64 = 500.0;
const EXCELLENT_SCORE: f64 = 80.0;
const CORROSION_WINDOW: usize = 2;

/// Buyer-facing warnings. Presentation only; nothing here feeds the score.
pub(crate) fn risk_factors(history: &[InspectionRecord], costs: &CostBreakdown) -> Vec<String> {
    let mut risks = Vec::new();

    if costs.dangerous_items_count > 0 {
        risks.push(format!(
            "{} dangerous defect(s) found",
            costs.dangerous_items_count
        ));
    }

    if costs.total_average_cost > HIGH_REPAIR_COST {
        risks.push(format!(
            "High estimated repair costs (£{:.2})",
            costs.total_average_cost
        ));
    } else if costs.total_average_cost > MODERATE_REPAIR_COST {
        risks.push(format!(
            "Moderate repair costs expected (£{:.2})",
            costs.total_average_cost
        ));
    }

    if recent_failed_results(history) >= 2 {
        risks.push("Multiple recent MOT failures".to_string());
    }

    if let Some(latest) = history.first() {
        let major_count = latest
            .defects
            .iter()
            .filter(|item| matches!(item.kind, DefectKind::Major | DefectKind::Fail))
            .count();
        if major_count > 0 {
            risks.push(format!("{major_count} major issue(s) in latest MOT"));
        }
    }

    if history
        .iter()
        .take(CORROSION_WINDOW)
        .any(|record| record.has_text("corrosion"))
    {
        risks.push("Corrosion issues detected".to_string());
    }

    if risks.is_empty() {
        risks.push("No major risk factors identified".to_string());
    }

    risks
}

pub(crate) fn positive_factors(history: &[InspectionRecord], overall_score: f64) -> Vec<String> {
    let mut positives = Vec::new();

    if overall_score >= EXCELLENT_SCORE {
        positives.push("Excellent overall condition score".to_string());
    }

    let recent_passes = recent_passed_results(history);
    if recent_passes >= 2 {
        positives.push(format!("{recent_passes} recent MOT passes"));
    }

    if let Some(latest) = history.first() {
        let advisory_count = latest
            .defects
            .iter()
            .filter(|item| matches!(item.kind, DefectKind::Advisory | DefectKind::Minor))
            .count();

        if latest.defects.is_empty() {
            positives.push("Latest MOT passed with no advisories".to_string());
        } else if advisory_count > 0 && advisory_count == latest.defects.len() {
            positives.push(format!(
                "Latest MOT passed with only {advisory_count} minor advisory/advisories"
            ));
        }
    }

    if positives.is_empty() {
        positives.push("Some positive factors found".to_string());
    }

    positives
}
