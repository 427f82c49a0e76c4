use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn validate_asking_price(value: f64) -> Result<f64, String> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("asking price must be a positive amount (got {value})"))
    }
}

pub(crate) fn parse_asking_price(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .trim_start_matches('£')
        .replace(',', "")
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as an amount in GBP ({err})"))?;
    validate_asking_price(value)
}
