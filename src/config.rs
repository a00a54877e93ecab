// Service configuration: provider credentials and simulated latency
// Credentials are carried for the day real providers are wired in; the mock paths never read them.

use std::time::Duration;
use thiserror::Error;

pub const FLIGHT_PROVIDER_KEY_VAR: &str = "FLIGHT_PROVIDER_KEY";
pub const FLIGHT_PROVIDER_SECRET_VAR: &str = "FLIGHT_PROVIDER_SECRET";
pub const HOTEL_PROVIDER_KEY_VAR: &str = "HOTEL_PROVIDER_KEY";
pub const ACTIVITY_PROVIDER_KEY_VAR: &str = "ACTIVITY_PROVIDER_KEY";

const MAX_LATENCY_MS: u64 = 10_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Blank value for {0}")]
    BlankCredential(&'static str),

    #[error("Latency for {operation} is {value_ms}ms, above the {max_ms}ms limit")]
    LatencyTooHigh {
        operation: &'static str,
        value_ms: u64,
        max_ms: u64,
    },
}

#[derive(Clone, Default, PartialEq)]
pub struct ProviderCredentials {
    pub flight_provider_key: Option<String>,
    pub flight_provider_secret: Option<String>,
    pub hotel_provider_key: Option<String>,
    pub activity_provider_key: Option<String>,
}

// Keys must never show up in logs
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ProviderCredentials")
            .field("flight_provider_key", &mask(&self.flight_provider_key))
            .field("flight_provider_secret", &mask(&self.flight_provider_secret))
            .field("hotel_provider_key", &mask(&self.hotel_provider_key))
            .field("activity_provider_key", &mask(&self.activity_provider_key))
            .finish()
    }
}

impl ProviderCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    // Build from any variable lookup, e.g. a map in tests
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            flight_provider_key: lookup(FLIGHT_PROVIDER_KEY_VAR),
            flight_provider_secret: lookup(FLIGHT_PROVIDER_SECRET_VAR),
            hotel_provider_key: lookup(HOTEL_PROVIDER_KEY_VAR),
            activity_provider_key: lookup(ACTIVITY_PROVIDER_KEY_VAR),
        }
    }

    // True once every provider has a credential
    pub fn is_complete(&self) -> bool {
        self.flight_provider_key.is_some()
            && self.flight_provider_secret.is_some()
            && self.hotel_provider_key.is_some()
            && self.activity_provider_key.is_some()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            (FLIGHT_PROVIDER_KEY_VAR, &self.flight_provider_key),
            (FLIGHT_PROVIDER_SECRET_VAR, &self.flight_provider_secret),
            (HOTEL_PROVIDER_KEY_VAR, &self.hotel_provider_key),
            (ACTIVITY_PROVIDER_KEY_VAR, &self.activity_provider_key),
        ];
        for (name, value) in entries {
            if value.as_deref().map_or(false, |v| v.trim().is_empty()) {
                return Err(ConfigError::BlankCredential(name));
            }
        }
        Ok(())
    }
}

// Artificial delay per operation, standing in for network round trips
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyConfig {
    pub flights_ms: u64,
    pub hotels_ms: u64,
    pub activities_ms: u64,
    pub exchange_rates_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            flights_ms: 800,
            hotels_ms: 600,
            activities_ms: 400,
            exchange_rates_ms: 500,
        }
    }
}

impl LatencyConfig {
    // No delay at all, for tests and benchmarks
    pub fn none() -> Self {
        Self {
            flights_ms: 0,
            hotels_ms: 0,
            activities_ms: 0,
            exchange_rates_ms: 0,
        }
    }

    pub fn flights(&self) -> Duration {
        Duration::from_millis(self.flights_ms)
    }

    pub fn hotels(&self) -> Duration {
        Duration::from_millis(self.hotels_ms)
    }

    pub fn activities(&self) -> Duration {
        Duration::from_millis(self.activities_ms)
    }

    pub fn exchange_rates(&self) -> Duration {
        Duration::from_millis(self.exchange_rates_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("flights", self.flights_ms),
            ("hotels", self.hotels_ms),
            ("activities", self.activities_ms),
            ("exchange_rates", self.exchange_rates_ms),
        ];
        for (operation, value_ms) in entries {
            if value_ms > MAX_LATENCY_MS {
                return Err(ConfigError::LatencyTooHigh {
                    operation,
                    value_ms,
                    max_ms: MAX_LATENCY_MS,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfig {
    pub credentials: ProviderCredentials,
    pub latency: LatencyConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            credentials: ProviderCredentials::from_env(),
            latency: LatencyConfig::default(),
        }
    }

    pub fn without_latency() -> Self {
        Self {
            credentials: ProviderCredentials::default(),
            latency: LatencyConfig::none(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credentials.validate()?;
        self.latency.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_credentials_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (FLIGHT_PROVIDER_KEY_VAR, "flight-key"),
            (HOTEL_PROVIDER_KEY_VAR, "hotel-key"),
        ]
        .into_iter()
        .collect();

        let credentials = ProviderCredentials::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(credentials.flight_provider_key.as_deref(), Some("flight-key"));
        assert_eq!(credentials.flight_provider_secret, None);
        assert!(!credentials.is_complete());
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn test_blank_credential_rejected() {
        let credentials = ProviderCredentials {
            hotel_provider_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            credentials.validate(),
            Err(ConfigError::BlankCredential(HOTEL_PROVIDER_KEY_VAR))
        );
    }

    #[test]
    fn test_debug_output_redacts_keys() {
        let credentials = ProviderCredentials {
            flight_provider_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let printed = format!("{:?}", credentials);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_latency_defaults_and_limits() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.flights(), Duration::from_millis(800));
        assert_eq!(latency.activities(), Duration::from_millis(400));
        assert!(latency.validate().is_ok());

        let slow = LatencyConfig {
            hotels_ms: 60_000,
            ..LatencyConfig::none()
        };
        assert!(matches!(
            slow.validate(),
            Err(ConfigError::LatencyTooHigh { operation: "hotels", .. })
        ));
    }

    #[test]
    fn test_service_config_without_latency() {
        let config = ServiceConfig::without_latency();
        assert_eq!(config.latency, LatencyConfig::none());
        assert!(config.validate().is_ok());
    }
}
