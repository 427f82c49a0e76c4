use super::policy::Recommendation;
use crate::repair_costs::CostLine;
use serde::Serialize;

/// The five independent risk dimensions, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub mot_history: f64,
    pub recent_failures: f64,
    pub dangerous_defects: f64,
    pub mileage_consistency: f64,
    pub age_factor: f64,
}

impl SubScores {
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.mot_history,
            self.recent_failures,
            self.dangerous_defects,
            self.mileage_consistency,
            self.age_factor,
        ]
    }

    pub(crate) fn rounded(&self) -> Self {
        Self {
            mot_history: round_score(self.mot_history),
            recent_failures: round_score(self.recent_failures),
            dangerous_defects: round_score(self.dangerous_defects),
            mileage_consistency: round_score(self.mileage_consistency),
            age_factor: round_score(self.age_factor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialAnalysis {
    pub asking_price: f64,
    pub estimated_repairs: f64,
    pub estimated_repairs_min: f64,
    pub estimated_repairs_max: f64,
    pub total_estimated_cost: f64,
    pub currency: &'static str,
    pub repair_breakdown: Vec<CostLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotSummary {
    pub total_tests: usize,
    pub recent_failures: usize,
    pub dangerous_defects_found: usize,
    pub last_mot_date: String,
    pub last_mot_result: &'static str,
}

/// Full assessment for a vehicle with at least one inspection on record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleAssessment {
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub message: String,
    pub scores: SubScores,
    pub financial_analysis: FinancialAnalysis,
    pub mot_summary: MotSummary,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsufficientData {
    pub recommendation: Recommendation,
    pub score: u8,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValuationReport {
    Assessed(Box<VehicleAssessment>),
    InsufficientData(InsufficientData),
}

impl ValuationReport {
    pub fn recommendation(&self) -> Recommendation {
        match self {
            Self::Assessed(assessment) => assessment.recommendation,
            Self::InsufficientData(report) => report.recommendation,
        }
    }

    pub fn overall_score(&self) -> f64 {
        match self {
            Self::Assessed(assessment) => assessment.overall_score,
            Self::InsufficientData(report) => f64::from(report.score),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Assessed(assessment) => &assessment.message,
            Self::InsufficientData(report) => &report.message,
        }
    }

    pub fn assessment(&self) -> Option<&VehicleAssessment> {
        match self {
            Self::Assessed(assessment) => Some(&**assessment),
            Self::InsufficientData(_) => None,
        }
    }
}

pub(crate) fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
