use super::estimate::classify;
use crate::history::{DefectKind, InspectionRecord};
use serde::Serialize;

const RECURRING_LIMIT: usize = 5;
const EXAMPLES_PER_CATEGORY: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueFrequency {
    pub category: &'static str,
    pub description: &'static str,
    pub count: usize,
    pub examples: Vec<String>,
}

/// Recurring-issue digest across an entire inspection history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_failures: usize,
    pub total_advisories: usize,
    pub recurring_issues: Vec<IssueFrequency>,
    pub all_issues: Vec<IssueFrequency>,
}

pub fn history_summary(history: &[InspectionRecord]) -> HistorySummary {
    let mut issues: Vec<IssueFrequency> = Vec::new();
    let mut total_failures = 0;
    let mut total_advisories = 0;

    for item in history.iter().flat_map(|record| record.defects.iter()) {
        let estimate = classify(&item.text);

        let position = match issues
            .iter()
            .position(|issue| issue.category == estimate.category)
        {
            Some(position) => position,
            None => {
                issues.push(IssueFrequency {
                    category: estimate.category,
                    description: estimate.description,
                    count: 0,
                    examples: Vec::new(),
                });
                issues.len() - 1
            }
        };

        let issue = &mut issues[position];
        issue.count += 1;
        if issue.examples.len() < EXAMPLES_PER_CATEGORY {
            issue.examples.push(item.text.clone());
        }

        if item.kind == DefectKind::Fail {
            total_failures += 1;
        } else if item.kind.is_advisory() {
            total_advisories += 1;
        }
    }

    // Stable: equal counts keep first-seen order.
    issues.sort_by(|left, right| right.count.cmp(&left.count));
    let recurring_issues = issues.iter().take(RECURRING_LIMIT).cloned().collect();

    HistorySummary {
        total_failures,
        total_advisories,
        recurring_issues,
        all_issues: issues,
    }
}
