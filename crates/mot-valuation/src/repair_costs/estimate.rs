use super::catalog::{CategorySpec, CATALOG, UNKNOWN_CATEGORY};
use super::round_currency;
use crate::history::DefectItem;
use serde::Serialize;

pub const CURRENCY: &str = "GBP";
pub const LAST_UPDATED: &str = "2025-12-16";
pub const DISCLAIMER: &str = "Estimates may vary by location, vehicle type, and parts availability. This is for guidance only.";

/// Cost band for a single defect description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub category: &'static str,
    pub min_cost: f64,
    pub max_cost: f64,
    pub average_cost: f64,
    pub description: &'static str,
    pub matched_text: String,
}

impl CostEstimate {
    fn from_spec(spec: &CategorySpec, text: &str) -> Self {
        Self {
            category: spec.key,
            min_cost: f64::from(spec.min_cost),
            max_cost: f64::from(spec.max_cost),
            average_cost: f64::from(spec.average_cost),
            description: spec.description,
            matched_text: text.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.category == UNKNOWN_CATEGORY.key
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub issue: String,
    pub estimate: CostEstimate,
    pub dangerous: bool,
}

/// Aggregated repair bill for a set of defects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub total_min_cost: f64,
    pub total_max_cost: f64,
    pub total_average_cost: f64,
    pub breakdown: Vec<CostLine>,
    pub dangerous_items_count: usize,
    pub dangerous_items: Vec<String>,
    pub currency: &'static str,
    pub disclaimer: &'static str,
    pub last_updated: &'static str,
}

/// Prices one free-text defect. Never fails: unmatched text falls back to
/// the general repair band.
pub fn classify(defect_text: &str) -> CostEstimate {
    let lowered = defect_text.to_lowercase();

    CATALOG
        .iter()
        .find(|category| category.matches(&lowered))
        .map(|category| CostEstimate::from_spec(category.spec, defect_text))
        .unwrap_or_else(|| CostEstimate::from_spec(&UNKNOWN_CATEGORY, defect_text))
}

/// Sums the cost bands of every defect. Repeated texts are each a separate
/// repair and are costed every time they appear.
pub fn total_cost<'a, I>(defects: I) -> CostBreakdown
where
    I: IntoIterator<Item = &'a DefectItem>,
{
    let mut total_min = 0.0;
    let mut total_max = 0.0;
    let mut total_average = 0.0;
    let mut breakdown = Vec::new();
    let mut dangerous_items = Vec::new();

    for item in defects {
        let estimate = classify(&item.text);
        let dangerous = item.is_dangerous();

        total_min += estimate.min_cost;
        total_max += estimate.max_cost;
        total_average += estimate.average_cost;

        if dangerous {
            dangerous_items.push(item.text.clone());
        }

        breakdown.push(CostLine {
            issue: item.text.clone(),
            estimate,
            dangerous,
        });
    }

    CostBreakdown {
        total_min_cost: round_currency(total_min),
        total_max_cost: round_currency(total_max),
        total_average_cost: round_currency(total_average),
        breakdown,
        dangerous_items_count: dangerous_items.len(),
        dangerous_items,
        currency: CURRENCY,
        disclaimer: DISCLAIMER,
        last_updated: LAST_UPDATED,
    }
}
