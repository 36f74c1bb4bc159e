use crate::core::{Matcher, PaymentPolicy, PricingPolicy};
use crate::services::SimulatedBackend;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub payment: PaymentSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_results")]
    pub min_results: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Simulated backend latency for searches
    #[serde(default)]
    pub search_latency_ms: u64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_results: default_min_results(),
            max_results: default_max_results(),
            search_latency_ms: 0,
        }
    }
}

fn default_min_results() -> usize { 3 }
fn default_max_results() -> usize { 7 }

/// Tariffs in FCFA
#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_technician_base_rate")]
    pub technician_base_rate: f64,
    #[serde(default = "default_worker_base_rate")]
    pub worker_base_rate: f64,
    #[serde(default = "default_per_km_rate")]
    pub per_km_rate: f64,
    #[serde(default = "default_min_distance_fee")]
    pub min_distance_fee: f64,
    #[serde(default = "default_max_distance_fee")]
    pub max_distance_fee: f64,
    #[serde(default = "default_min_complexity")]
    pub min_complexity: f64,
    #[serde(default = "default_max_complexity")]
    pub max_complexity: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            technician_base_rate: default_technician_base_rate(),
            worker_base_rate: default_worker_base_rate(),
            per_km_rate: default_per_km_rate(),
            min_distance_fee: default_min_distance_fee(),
            max_distance_fee: default_max_distance_fee(),
            min_complexity: default_min_complexity(),
            max_complexity: default_max_complexity(),
        }
    }
}

fn default_technician_base_rate() -> f64 { 25_000.0 }
fn default_worker_base_rate() -> f64 { 15_000.0 }
fn default_per_km_rate() -> f64 { 100.0 }
fn default_min_distance_fee() -> f64 { 500.0 }
fn default_max_distance_fee() -> f64 { 1_500.0 }
fn default_min_complexity() -> f64 { 1.0 }
fn default_max_complexity() -> f64 { 1.5 }

impl From<&PricingSettings> for PricingPolicy {
    fn from(settings: &PricingSettings) -> Self {
        Self {
            technician_base_rate: settings.technician_base_rate,
            worker_base_rate: settings.worker_base_rate,
            per_km_rate: settings.per_km_rate,
            distance_fee_range: settings.min_distance_fee..settings.max_distance_fee,
            complexity_range: settings.min_complexity..settings.max_complexity,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSettings {
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
    #[serde(default = "default_payment_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_payment_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            commission_rate: default_commission_rate(),
            latency_ms: default_payment_latency_ms(),
            timeout_ms: default_payment_timeout_ms(),
        }
    }
}

fn default_commission_rate() -> f64 { 0.10 }
fn default_payment_latency_ms() -> u64 { 1_500 }
fn default_payment_timeout_ms() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_idle_ttl_secs")]
    pub idle_ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl_secs(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_idle_ttl_secs() -> u64 { 1_800 }
fn default_max_sessions() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AGRIMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., AGRIMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("AGRIMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_platform_overrides(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AGRIMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.matching;
        if m.max_results == 0 || m.min_results == 0 {
            return Err(ConfigError::Message(
                "matching.min_results and matching.max_results must be at least 1".into(),
            ));
        }
        if m.min_results > m.max_results {
            return Err(ConfigError::Message(format!(
                "matching.min_results ({}) exceeds matching.max_results ({})",
                m.min_results, m.max_results
            )));
        }

        let p = &self.pricing;
        for (name, value) in [
            ("technician_base_rate", p.technician_base_rate),
            ("worker_base_rate", p.worker_base_rate),
            ("per_km_rate", p.per_km_rate),
            ("min_distance_fee", p.min_distance_fee),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "pricing.{} must be a non-negative number",
                    name
                )));
            }
        }
        if !(p.min_distance_fee < p.max_distance_fee) {
            return Err(ConfigError::Message(
                "pricing.min_distance_fee must be below pricing.max_distance_fee".into(),
            ));
        }
        if !(p.min_complexity > 0.0 && p.min_complexity < p.max_complexity) {
            return Err(ConfigError::Message(
                "pricing complexity range must be positive and non-empty".into(),
            ));
        }

        if !(0.0..1.0).contains(&self.payment.commission_rate) {
            return Err(ConfigError::Message(
                "payment.commission_rate must be within [0, 1)".into(),
            ));
        }

        Ok(())
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(
            PricingPolicy::from(&self.pricing),
            self.matching.min_results,
            self.matching.max_results,
        )
    }

    pub fn payment_policy(&self) -> PaymentPolicy {
        PaymentPolicy {
            commission_rate: self.payment.commission_rate,
        }
    }

    pub fn payment_backend(&self) -> SimulatedBackend {
        SimulatedBackend::new(
            Duration::from_millis(self.payment.latency_ms),
            Duration::from_millis(self.payment.timeout_ms),
        )
    }

    /// Searches share the payment timeout
    pub fn search_backend(&self) -> SimulatedBackend {
        SimulatedBackend::new(
            Duration::from_millis(self.matching.search_latency_ms),
            Duration::from_millis(self.payment.timeout_ms),
        )
    }
}

/// Honor the plain `HOST` / `PORT` variables set by most hosting platforms
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("HOST") {
        builder = builder.set_override("server.host", host)?;
    }
    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        builder = builder.set_override("server.port", port as i64)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing() {
        let pricing = PricingSettings::default();
        assert_eq!(pricing.technician_base_rate, 25_000.0);
        assert_eq!(pricing.worker_base_rate, 15_000.0);
        assert_eq!(pricing.per_km_rate, 100.0);

        let policy = PricingPolicy::from(&pricing);
        assert_eq!(policy, PricingPolicy::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.matcher().result_bounds(), (3, 7));
    }

    #[test]
    fn test_rejects_inverted_result_bounds() {
        let mut settings = Settings::default();
        settings.matching.min_results = 8;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_commission() {
        let mut settings = Settings::default();
        settings.payment.commission_rate = 1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = std::env::temp_dir().join(format!("agri-match-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            "[matching]\nmin_results = 2\nmax_results = 4\n\n[pricing]\nper_km_rate = 250.0\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.matcher().result_bounds(), (2, 4));
        assert_eq!(settings.pricing.per_km_rate, 250.0);
        assert_eq!(settings.pricing.worker_base_rate, 15_000.0);

        std::fs::remove_dir_all(&dir).ok();
    }
}
