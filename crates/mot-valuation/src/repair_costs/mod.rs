//! Repair-cost knowledge base for MOT defect descriptions.
//!
//! Defect text is matched against an ordered catalog of regex patterns; the
//! first category to match prices the repair.

mod catalog;
mod estimate;
mod summary;


pub use catalog::CategoryView;
pub use estimate::{
    classify, total_cost, CostBreakdown, CostEstimate, CostLine, CURRENCY, DISCLAIMER,
    LAST_UPDATED,
};
pub use summary::{history_summary, HistorySummary, IssueFrequency};

/// Every catalog category in matching order.
pub fn catalog() -> Vec<CategoryView> {
    catalog::CATEGORY_SPECS
        .iter()
        .map(catalog::CategorySpec::to_view)
        .collect()
}

pub(crate) fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
