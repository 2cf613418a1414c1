use std::time::Duration;

use farewatch_flight_data::ProviderConfig;

/// Runtime settings read from the environment.
pub struct Config {
    pub provider: ProviderConfig,
    pub log_format: String,
}

impl Config {
    /// Read `FARE_ENDPOINT`, `FARE_TIMEOUT_SECS` and `FARE_LOG_FORMAT`.
    ///
    /// Unset or unparsable values fall back to the provider defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut provider = ProviderConfig::default();
        if let Some(endpoint) = lookup("FARE_ENDPOINT").filter(|v| !v.trim().is_empty()) {
            provider = provider.with_endpoint(endpoint.trim());
        }
        if let Some(secs) = lookup("FARE_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok())
        {
            provider = provider.with_timeout(Duration::from_secs(secs));
        }

        Self {
            provider,
            log_format: lookup("FARE_LOG_FORMAT").unwrap_or_else(|| "text".to_string()),
        }
    }
}
