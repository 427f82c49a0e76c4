use super::normalizer::normalize_kind;
use super::parser::{deserialize_odometer, empty_string_as_none, parse_test_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upstream history document for a single vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Inspection records, most recent first.
    #[serde(default, alias = "motTests")]
    pub tests: Vec<InspectionRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestResult {
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "FAILED")]
    Failed,
    #[default]
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

impl TestResult {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Unknown => "Unknown",
        }
    }
}

/// Severity tag attached to a defect by the testing station.
///
/// The vocabulary drifts between upstream fields (`USER ENTERED` vs
/// `USER-ENTERED`), so tags are normalised before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DefectKind {
    Fail,
    Major,
    Dangerous,
    Advisory,
    Minor,
    UserEntered,
    Prs,
    #[default]
    Other,
}

impl DefectKind {
    pub fn parse(value: &str) -> Self {
        match normalize_kind(value).as_str() {
            "FAIL" => Self::Fail,
            "MAJOR" => Self::Major,
            "DANGEROUS" => Self::Dangerous,
            "ADVISORY" => Self::Advisory,
            "MINOR" => Self::Minor,
            "USER ENTERED" => Self::UserEntered,
            "PRS" => Self::Prs,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Major => "MAJOR",
            Self::Dangerous => "DANGEROUS",
            Self::Advisory => "ADVISORY",
            Self::Minor => "MINOR",
            Self::UserEntered => "USER ENTERED",
            Self::Prs => "PRS",
            Self::Other => "OTHER",
        }
    }

    /// FAIL, MAJOR and DANGEROUS all mean the vehicle could not pass as presented.
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Fail | Self::Major | Self::Dangerous)
    }

    pub const fn is_advisory(self) -> bool {
        matches!(self, Self::Advisory | Self::UserEntered)
    }

    /// Kinds that represent work a buyer should budget for straight away.
    pub const fn is_costed(self) -> bool {
        matches!(
            self,
            Self::Fail | Self::Major | Self::Dangerous | Self::Advisory | Self::Minor
        )
    }
}

impl From<String> for DefectKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DefectKind> for String {
    fn from(value: DefectKind) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectItem {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: DefectKind,
    #[serde(default)]
    pub dangerous: bool,
}

impl DefectItem {
    pub fn new(text: impl Into<String>, kind: DefectKind) -> Self {
        Self {
            text: text.into(),
            kind,
            dangerous: false,
        }
    }

    pub fn flagged_dangerous(mut self) -> Self {
        self.dangerous = true;
        self
    }

    /// Either the upstream flag or the DANGEROUS tag is enough.
    pub fn is_dangerous(&self) -> bool {
        self.dangerous || self.kind == DefectKind::Dangerous
    }
}

/// One historical roadworthiness test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub test_result: TestResult,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub expiry_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_odometer")]
    pub odometer_value: Option<u64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub odometer_unit: Option<String>,
    #[serde(default)]
    pub mot_test_number: String,
    #[serde(default, alias = "rfrAndComments")]
    pub defects: Vec<DefectItem>,
}

impl InspectionRecord {
    pub fn passed(&self) -> bool {
        self.test_result == TestResult::Passed
    }

    pub fn failed(&self) -> bool {
        self.test_result == TestResult::Failed
    }

    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_date.as_deref().and_then(parse_test_date)
    }

    /// A zero reading is how stations record "not read", so it is treated as absent.
    pub fn odometer_reading(&self) -> Option<u64> {
        self.odometer_value.filter(|reading| *reading > 0)
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.defects
            .iter()
            .any(|item| item.text.to_lowercase().contains(needle))
    }
}
