use super::views::SubScores;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weights that would let the blended score leave `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("valuation weights must be non-negative and sum to 1.0 (found {total:.3})")]
pub struct UnbalancedWeights {
    pub total: f64,
}

/// Blend weights for the five sub-scores. Policy values, expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationWeights {
    pub mot_history: f64,
    pub recent_failures: f64,
    pub dangerous_defects: f64,
    pub mileage_consistency: f64,
    pub age_factor: f64,
}

impl Default for ValuationWeights {
    fn default() -> Self {
        Self {
            mot_history: 0.25,
            recent_failures: 0.30,
            dangerous_defects: 0.20,
            mileage_consistency: 0.15,
            age_factor: 0.10,
        }
    }
}

impl ValuationWeights {
    pub fn total(&self) -> f64 {
        self.mot_history
            + self.recent_failures
            + self.dangerous_defects
            + self.mileage_consistency
            + self.age_factor
    }

    pub fn is_normalized(&self) -> bool {
        let all_non_negative = [
            self.mot_history,
            self.recent_failures,
            self.dangerous_defects,
            self.mileage_consistency,
            self.age_factor,
        ]
        .iter()
        .all(|weight| *weight >= 0.0);

        all_non_negative && (self.total() - 1.0).abs() < 1e-6
    }

    pub fn validate(self) -> Result<Self, UnbalancedWeights> {
        if self.is_normalized() {
            Ok(self)
        } else {
            Err(UnbalancedWeights {
                total: self.total(),
            })
        }
    }

    pub(crate) fn blend(&self, scores: &SubScores) -> f64 {
        scores.mot_history * self.mot_history
            + scores.recent_failures * self.recent_failures
            + scores.dangerous_defects * self.dangerous_defects
            + scores.mileage_consistency * self.mileage_consistency
            + scores.age_factor * self.age_factor
    }
}
