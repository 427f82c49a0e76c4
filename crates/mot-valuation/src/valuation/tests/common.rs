use crate::history::{DefectItem, DefectKind, InspectionRecord, TestResult};

pub(super) fn defect(text: &str, kind: DefectKind) -> DefectItem {
    DefectItem::new(text, kind)
}

pub(super) fn record(
    completed_date: &str,
    result: TestResult,
    odometer: Option<u64>,
    defects: Vec<DefectItem>,
) -> InspectionRecord {
    InspectionRecord {
        completed_date: Some(completed_date.to_string()),
        test_result: result,
        expiry_date: None,
        odometer_value: odometer,
        odometer_unit: odometer.map(|_| "mi".to_string()),
        mot_test_number: format!("test-{completed_date}"),
        defects,
    }
}

pub(super) fn passed(completed_date: &str, odometer: Option<u64>) -> InspectionRecord {
    record(completed_date, TestResult::Passed, odometer, Vec::new())
}

/// Record carrying `count` copies of a defect of the given kind.
pub(super) fn with_defects(kind: DefectKind, count: usize) -> InspectionRecord {
    let defects = (0..count)
        .map(|index| defect(&format!("Defect {index}"), kind))
        .collect();
    record("2024.01.01", TestResult::Failed, None, defects)
}

/// Five yearly passes with a steady 8,000 miles a year.
pub(super) fn clean_history() -> Vec<InspectionRecord> {
    vec![
        passed("2024.06.01", Some(40_000)),
        passed("2023.06.01", Some(32_000)),
        passed("2022.06.01", Some(24_000)),
        passed("2021.06.01", Some(16_000)),
        passed("2020.06.01", Some(8_000)),
    ]
}

/// Two recent failures with a dangerous sill, brake work and corrosion notes.
pub(super) fn troubled_history() -> Vec<InspectionRecord> {
    vec![
        record(
            "2024.03.01",
            TestResult::Failed,
            Some(60_000),
            vec![
                defect("Nearside front brake pad worn", DefectKind::Major),
                defect("Offside sill corroded", DefectKind::Dangerous),
                defect("Front subframe corrosion", DefectKind::Advisory),
            ],
        ),
        record(
            "2023.03.01",
            TestResult::Failed,
            Some(52_000),
            vec![defect("Brake efficiency below requirements", DefectKind::Fail)],
        ),
        passed("2022.03.01", Some(44_000)),
    ]
}
