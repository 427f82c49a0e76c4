use serde::{Deserialize, Serialize};

/// Purchase advice tier, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    AcceptableWithCaution,
    Risky,
    NotRecommended,
    InsufficientData,
}

impl Recommendation {
    pub const fn tiers() -> [Self; 5] {
        [
            Self::HighlyRecommended,
            Self::Recommended,
            Self::AcceptableWithCaution,
            Self::Risky,
            Self::NotRecommended,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Recommended => "Recommended",
            Self::AcceptableWithCaution => "Acceptable With Caution",
            Self::Risky => "Risky",
            Self::NotRecommended => "Not Recommended",
            Self::InsufficientData => "Insufficient Data",
        }
    }

    pub fn message(self, asking_price: f64, repair_average: f64) -> String {
        let total = asking_price + repair_average;
        match self {
            Self::HighlyRecommended => format!(
                "Excellent choice! This vehicle shows strong MOT history with minimal repair needs. Total estimated cost: £{total:.2}"
            ),
            Self::Recommended => format!(
                "Good option. Vehicle has decent history with manageable repair costs. Total estimated cost: £{total:.2}"
            ),
            Self::AcceptableWithCaution => format!(
                "Acceptable but requires caution. Consider negotiating price down by £{repair_average:.2} for repairs. Total estimated cost: £{total:.2}"
            ),
            Self::Risky => format!(
                "Risky purchase. Significant repairs needed (est. £{repair_average:.2}). Only proceed if price reflects condition. Total cost: £{total:.2}"
            ),
            Self::NotRecommended => format!(
                "Not recommended. Poor MOT history and high repair costs (est. £{repair_average:.2}). Total cost would be £{total:.2}"
            ),
            Self::InsufficientData => INSUFFICIENT_DATA_MESSAGE.to_string(),
        }
    }
}

pub(crate) const INSUFFICIENT_DATA_MESSAGE: &str = "No MOT history available for assessment";

/// First matching rule wins; the last tier catches everything else.
pub fn recommend(overall_score: f64, repair_average: f64) -> Recommendation {
    if overall_score >= 80.0 && repair_average < 500.0 {
        Recommendation::HighlyRecommended
    } else if overall_score >= 70.0 && repair_average < 1000.0 {
        Recommendation::Recommended
    } else if overall_score >= 60.0 {
        Recommendation::AcceptableWithCaution
    } else if overall_score >= 40.0 {
        Recommendation::Risky
    } else {
        Recommendation::NotRecommended
    }
}
