use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

const DATE_FORMATS: [&str; 3] = ["%Y.%m.%d", "%Y-%m-%d", "%d/%m/%Y"];

/// Parses the completion dates the upstream provider has used over time.
pub(crate) fn parse_test_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y.%m.%d %H:%M:%S") {
        return Some(dt.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOdometer {
    Whole(u64),
    Fractional(f64),
    Text(String),
}

/// Odometer readings arrive as numbers from some feeds and numeric strings from others.
pub(crate) fn deserialize_odometer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOdometer>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawOdometer::Whole(reading) => Some(reading),
        RawOdometer::Fractional(reading) if reading.is_finite() && reading >= 0.0 => {
            Some(reading.round() as u64)
        }
        RawOdometer::Fractional(_) => None,
        RawOdometer::Text(text) => text.trim().replace(',', "").parse::<u64>().ok(),
    }))
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_test_date(value)
}
