use super::views::SubScores;
use crate::history::InspectionRecord;

/// How many of the newest records count as "recent".
pub(crate) const RECENT_WINDOW: usize = 3;

const NEUTRAL_SCORE: f64 = 50.0;
const MILEAGE_ROLLBACK_SCORE: f64 = 0.0;
const MILEAGE_FALLBACK_SCORE: f64 = 75.0;
const DAYS_PER_YEAR: f64 = 365.25;

// (inclusive upper bound on count, score); counts past the last row take the tail score.
const RECENT_FAILURE_STEPS: [(usize, f64); 4] = [(0, 100.0), (2, 80.0), (5, 60.0), (10, 40.0)];
const RECENT_FAILURE_TAIL: f64 = 20.0;

const DANGEROUS_DEFECT_STEPS: [(usize, f64); 3] = [(0, 100.0), (1, 70.0), (2, 40.0)];
const DANGEROUS_DEFECT_TAIL: f64 = 10.0;

const TEST_COUNT_STEPS: [(usize, f64); 3] = [(2, 90.0), (5, 80.0), (10, 70.0)];
const TEST_COUNT_TAIL: f64 = 60.0;

// (exclusive upper bound on miles per year, score)
const ANNUAL_MILEAGE_STEPS: [(f64, f64); 3] = [(5_000.0, 90.0), (12_000.0, 100.0), (20_000.0, 70.0)];
const ANNUAL_MILEAGE_TAIL: f64 = 50.0;

fn step_score(count: usize, steps: &[(usize, f64)], tail: f64) -> f64 {
    steps
        .iter()
        .find(|(limit, _)| count <= *limit)
        .map(|(_, score)| *score)
        .unwrap_or(tail)
}

fn recent(history: &[InspectionRecord]) -> &[InspectionRecord] {
    &history[..history.len().min(RECENT_WINDOW)]
}

pub(crate) fn score_history(history: &[InspectionRecord]) -> SubScores {
    SubScores {
        mot_history: history_score(history),
        recent_failures: recent_failures_score(history),
        dangerous_defects: dangerous_defects_score(history),
        mileage_consistency: mileage_score(history),
        age_factor: age_score(history),
    }
}

pub(crate) fn history_score(history: &[InspectionRecord]) -> f64 {
    if history.len() < 2 {
        return NEUTRAL_SCORE;
    }

    let passes = history.iter().filter(|record| record.passed()).count();
    passes as f64 / history.len() as f64 * 100.0
}

pub(crate) fn recent_failure_defects(history: &[InspectionRecord]) -> usize {
    recent(history)
        .iter()
        .flat_map(|record| record.defects.iter())
        .filter(|item| item.kind.is_failure())
        .count()
}

pub(crate) fn recent_failures_score(history: &[InspectionRecord]) -> f64 {
    if history.is_empty() {
        return NEUTRAL_SCORE;
    }

    step_score(
        recent_failure_defects(history),
        &RECENT_FAILURE_STEPS,
        RECENT_FAILURE_TAIL,
    )
}

pub(crate) fn dangerous_defects_score(history: &[InspectionRecord]) -> f64 {
    let dangerous = recent(history)
        .iter()
        .flat_map(|record| record.defects.iter())
        .filter(|item| item.is_dangerous())
        .count();

    step_score(dangerous, &DANGEROUS_DEFECT_STEPS, DANGEROUS_DEFECT_TAIL)
}

/// Readings are newest-first, so any reading lower than the one before it
/// in the list means the odometer went backwards.
pub(crate) fn mileage_score(history: &[InspectionRecord]) -> f64 {
    let readings: Vec<(u64, &InspectionRecord)> = history
        .iter()
        .filter(|record| record.completed_date.is_some())
        .filter_map(|record| record.odometer_reading().map(|reading| (reading, record)))
        .collect();

    if readings.len() < 2 {
        return NEUTRAL_SCORE;
    }

    if readings.windows(2).any(|pair| pair[0].0 < pair[1].0) {
        return MILEAGE_ROLLBACK_SCORE;
    }

    let (newest_reading, newest) = readings[0];
    let (oldest_reading, oldest) = readings[readings.len() - 1];

    let (Some(newest_date), Some(oldest_date)) = (newest.completed_on(), oldest.completed_on())
    else {
        return MILEAGE_FALLBACK_SCORE;
    };

    let years = (newest_date - oldest_date).num_days() as f64 / DAYS_PER_YEAR;
    if years <= 0.0 {
        return MILEAGE_FALLBACK_SCORE;
    }

    let annual_mileage = (newest_reading - oldest_reading) as f64 / years;
    ANNUAL_MILEAGE_STEPS
        .iter()
        .find(|(limit, _)| annual_mileage < *limit)
        .map(|(_, score)| *score)
        .unwrap_or(ANNUAL_MILEAGE_TAIL)
}

/// Test count stands in for vehicle age: more recorded tests, older vehicle.
pub(crate) fn age_score(history: &[InspectionRecord]) -> f64 {
    step_score(history.len(), &TEST_COUNT_STEPS, TEST_COUNT_TAIL)
}

pub(crate) fn recent_failed_results(history: &[InspectionRecord]) -> usize {
    recent(history)
        .iter()
        .filter(|record| record.failed())
        .count()
}

pub(crate) fn recent_passed_results(history: &[InspectionRecord]) -> usize {
    recent(history)
        .iter()
        .filter(|record| record.passed())
        .count()
}

