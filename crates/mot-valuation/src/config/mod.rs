use crate::valuation::{UnbalancedWeights, ValuationWeights};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the valuation service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub valuation: ValuationWeights,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = env::var("APP_LOG_FORMAT")
            .map(|value| LogFormat::from_str(&value))
            .unwrap_or_default();

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, format },
            valuation: load_weights()?,
        })
    }
}

fn load_weights() -> Result<ValuationWeights, ConfigError> {
    let defaults = ValuationWeights::default();
    let weights = ValuationWeights {
        mot_history: weight_var("VALUATION_WEIGHT_HISTORY", defaults.mot_history)?,
        recent_failures: weight_var("VALUATION_WEIGHT_RECENT_FAILURES", defaults.recent_failures)?,
        dangerous_defects: weight_var(
            "VALUATION_WEIGHT_DANGEROUS_DEFECTS",
            defaults.dangerous_defects,
        )?,
        mileage_consistency: weight_var("VALUATION_WEIGHT_MILEAGE", defaults.mileage_consistency)?,
        age_factor: weight_var("VALUATION_WEIGHT_AGE", defaults.age_factor)?,
    };

    weights.validate().map_err(ConfigError::from)
}

fn weight_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(ConfigError::InvalidWeight { name }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidWeight { name: &'static str },
    UnbalancedWeights { total: f64 },
}

impl From<UnbalancedWeights> for ConfigError {
    fn from(value: UnbalancedWeights) -> Self {
        Self::UnbalancedWeights { total: value.total }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidWeight { name } => {
                write!(f, "{name} must be a finite decimal number")
            }
            ConfigError::UnbalancedWeights { total } => write!(
                f,
                "valuation weights must be non-negative and sum to 1.0 (found {total:.3})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidWeight { .. }
            | ConfigError::UnbalancedWeights { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    const WEIGHT_VARS: [&str; 5] = [
        "VALUATION_WEIGHT_HISTORY",
        "VALUATION_WEIGHT_RECENT_FAILURES",
        "VALUATION_WEIGHT_DANGEROUS_DEFECTS",
        "VALUATION_WEIGHT_MILEAGE",
        "VALUATION_WEIGHT_AGE",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOG_FORMAT");
        for name in WEIGHT_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.format, LogFormat::Compact);
        assert_eq!(config.valuation, ValuationWeights::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "not-a-port");
        let error = AppConfig::load().expect_err("port rejected");
        assert!(matches!(error, ConfigError::InvalidPort));
        reset_env();
    }

    #[test]
    fn weight_overrides_must_stay_balanced() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("VALUATION_WEIGHT_HISTORY", "0.35");
        env::set_var("VALUATION_WEIGHT_RECENT_FAILURES", "0.20");
        let config = AppConfig::load().expect("rebalanced weights load");
        assert_eq!(config.valuation.mot_history, 0.35);
        assert_eq!(config.valuation.recent_failures, 0.20);

        env::set_var("VALUATION_WEIGHT_AGE", "0.5");
        let error = AppConfig::load().expect_err("unbalanced weights rejected");
        assert!(matches!(error, ConfigError::UnbalancedWeights { .. }));

        env::set_var("VALUATION_WEIGHT_AGE", "lots");
        let error = AppConfig::load().expect_err("non-numeric weight rejected");
        assert!(matches!(
            error,
            ConfigError::InvalidWeight {
                name: "VALUATION_WEIGHT_AGE"
            }
        ));
        reset_env();
    }
}
