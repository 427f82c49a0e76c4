//! Purchase scoring over an inspection history.
//!
//! [`ValuationEngine::calculate_valuation`] is a pure function of the
//! history and the asking price. Five sub-scores are blended with
//! [`ValuationWeights`], the latest inspection's defects are priced through
//! the repair-cost catalog, and the pair is mapped to a [`Recommendation`].

mod config;
mod insights;
mod policy;
mod rules;
mod views;

#[cfg(test)]
mod tests;

pub use config::{UnbalancedWeights, ValuationWeights};
pub use policy::{recommend, Recommendation};
pub use views::{
    FinancialAnalysis, InsufficientData, MotSummary, SubScores, ValuationReport,
    VehicleAssessment,
};

use crate::history::InspectionRecord;
use crate::repair_costs::{round_currency, total_cost, CostBreakdown, CURRENCY};
use policy::INSUFFICIENT_DATA_MESSAGE;
use tracing::{debug, info};
use views::round_score;

/// Stateless scorer; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    weights: ValuationWeights,
}

impl ValuationEngine {
    /// Rejects weights that are negative or do not sum to 1.0, so the
    /// blended score always stays within `[0, 100]`.
    pub fn new(weights: ValuationWeights) -> Result<Self, UnbalancedWeights> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    pub fn weights(&self) -> &ValuationWeights {
        &self.weights
    }

    /// `history` must be newest-first. An empty history yields an
    /// `insufficient_data` report rather than an error.
    pub fn calculate_valuation(
        &self,
        history: &[InspectionRecord],
        asking_price: f64,
    ) -> ValuationReport {
        let Some(latest) = history.first() else {
            info!("no inspection history supplied; returning insufficient data");
            return ValuationReport::InsufficientData(InsufficientData {
                recommendation: Recommendation::InsufficientData,
                score: 0,
                message: INSUFFICIENT_DATA_MESSAGE.to_string(),
            });
        };

        let scores = rules::score_history(history);
        let overall_score = self.weights.blend(&scores);
        debug!(
            mot_history = scores.mot_history,
            recent_failures = scores.recent_failures,
            dangerous_defects = scores.dangerous_defects,
            mileage_consistency = scores.mileage_consistency,
            age_factor = scores.age_factor,
            overall_score,
            "computed valuation sub-scores"
        );

        let repairs = immediate_repairs(latest);
        let recommendation = recommend(overall_score, repairs.total_average_cost);
        let message = recommendation.message(asking_price, repairs.total_average_cost);

        info!(
            tests = history.len(),
            overall_score = round_score(overall_score),
            estimated_repairs = repairs.total_average_cost,
            recommendation = recommendation.label(),
            "valuation complete"
        );

        let mot_summary = MotSummary {
            total_tests: history.len(),
            recent_failures: rules::recent_failed_results(history),
            dangerous_defects_found: repairs.dangerous_items_count,
            last_mot_date: latest
                .completed_date
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            last_mot_result: latest.test_result.label(),
        };

        let risk_factors = insights::risk_factors(history, &repairs);
        let positive_factors = insights::positive_factors(history, overall_score);

        let financial_analysis = FinancialAnalysis {
            asking_price,
            estimated_repairs: repairs.total_average_cost,
            estimated_repairs_min: repairs.total_min_cost,
            estimated_repairs_max: repairs.total_max_cost,
            total_estimated_cost: round_currency(asking_price + repairs.total_average_cost),
            currency: CURRENCY,
            repair_breakdown: repairs.breakdown,
        };

        ValuationReport::Assessed(Box::new(VehicleAssessment {
            overall_score: round_score(overall_score),
            recommendation,
            message,
            scores: scores.rounded(),
            financial_analysis,
            mot_summary,
            risk_factors,
            positive_factors,
        }))
    }
}

/// Convenience entry point using the default weights.
pub fn calculate_valuation(history: &[InspectionRecord], asking_price: f64) -> ValuationReport {
    ValuationEngine::default().calculate_valuation(history, asking_price)
}

/// Prices the defects on the latest inspection that need attention now;
/// user-entered notes and PRS items are left out.
fn immediate_repairs(latest: &InspectionRecord) -> CostBreakdown {
    total_cost(latest.defects.iter().filter(|item| item.kind.is_costed()))
}
