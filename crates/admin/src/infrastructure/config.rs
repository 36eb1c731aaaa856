//! Admin configuration from environment variables.
//!
//! Parsing is done over a key lookup function so it can be exercised without
//! touching the process environment; [`AdminConfig::from_env`] is the thin
//! wrapper used by the binary.

use std::time::Duration;

use url::Url;

/// Default REST root of Cloud Firestore
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Default database id
pub const DEFAULT_DATABASE: &str = "(default)";

/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} is required when {reason}")]
    Missing { key: &'static str, reason: &'static str },

    #[error("{key} has an invalid value {value:?}: {message}")]
    Invalid {
        key: &'static str,
        value: String,
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, message: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

/// Connection settings for the Firestore REST adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: String,
    /// REST root, e.g. `https://firestore.googleapis.com/v1`
    pub base_url: Url,
    /// Web API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Talking to the local emulator (sends `Authorization: Bearer owner`)
    pub emulator: bool,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Firestore(FirestoreConfig),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub store: StoreBackend,
}

impl AdminConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let project_id = get("FIRESTORE_PROJECT_ID");
        let backend = match get("GEMDESK_STORE") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "firestore" => "firestore",
                "memory" => "memory",
                _ => {
                    return Err(ConfigError::invalid(
                        "GEMDESK_STORE",
                        &value,
                        "expected 'firestore' or 'memory'",
                    ))
                }
            },
            None if project_id.is_some() => "firestore",
            None => "memory",
        };

        if backend == "memory" {
            return Ok(Self {
                store: StoreBackend::Memory,
            });
        }

        let project_id = project_id.ok_or(ConfigError::Missing {
            key: "FIRESTORE_PROJECT_ID",
            reason: "GEMDESK_STORE is 'firestore'",
        })?;

        let emulator_host = get("FIRESTORE_EMULATOR_HOST");
        let base_url = match (&emulator_host, get("FIRESTORE_BASE_URL")) {
            (Some(host), _) => {
                let raw = format!("http://{}/v1", host);
                Url::parse(&raw)
                    .map_err(|e| ConfigError::invalid("FIRESTORE_EMULATOR_HOST", host, e))?
            }
            (None, Some(raw)) => {
                Url::parse(&raw).map_err(|e| ConfigError::invalid("FIRESTORE_BASE_URL", &raw, e))?
            }
            (None, None) => Url::parse(DEFAULT_FIRESTORE_BASE_URL)
                .map_err(|e| ConfigError::invalid("FIRESTORE_BASE_URL", DEFAULT_FIRESTORE_BASE_URL, e))?,
        };

        let request_timeout_ms = match get("GEMDESK_REQUEST_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "GEMDESK_REQUEST_TIMEOUT_MS",
                        &raw,
                        "must be greater than zero",
                    ))
                }
                Ok(ms) => ms,
                Err(e) => return Err(ConfigError::invalid("GEMDESK_REQUEST_TIMEOUT_MS", &raw, e)),
            },
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            store: StoreBackend::Firestore(FirestoreConfig {
                project_id,
                database: get("FIRESTORE_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.into()),
                base_url,
                api_key: get("FIRESTORE_API_KEY"),
                emulator: emulator_host.is_some(),
                request_timeout: Duration::from_millis(request_timeout_ms),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdminConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn firestore(cfg: AdminConfig) -> FirestoreConfig {
        match cfg.store {
            StoreBackend::Firestore(f) => f,
            StoreBackend::Memory => panic!("expected firestore backend"),
        }
    }

    #[test]
    fn defaults_to_memory_without_a_project() {
        assert_eq!(config(&[]).unwrap().store, StoreBackend::Memory);
    }

    #[test]
    fn project_id_alone_selects_firestore_with_defaults() {
        let f = firestore(config(&[("FIRESTORE_PROJECT_ID", "gem-shop")]).unwrap());
        assert_eq!(f.project_id, "gem-shop");
        assert_eq!(f.database, "(default)");
        assert_eq!(f.base_url.as_str(), "https://firestore.googleapis.com/v1");
        assert_eq!(f.api_key, None);
        assert!(!f.emulator);
        assert_eq!(f.request_timeout, Duration::from_millis(30_000));
    }

    #[test]
    fn explicit_memory_wins_over_project_id() {
        let cfg = config(&[
            ("GEMDESK_STORE", "Memory"),
            ("FIRESTORE_PROJECT_ID", "gem-shop"),
        ])
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
    }

    #[test]
    fn firestore_without_project_is_an_error() {
        let err = config(&[("GEMDESK_STORE", "firestore")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                key: "FIRESTORE_PROJECT_ID",
                ..
            }
        ));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = config(&[("GEMDESK_STORE", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "GEMDESK_STORE", .. }));
    }

    #[test]
    fn emulator_host_switches_to_plain_http() {
        let f = firestore(
            config(&[
                ("FIRESTORE_PROJECT_ID", "demo-gems"),
                ("FIRESTORE_EMULATOR_HOST", "localhost:8080"),
                ("FIRESTORE_BASE_URL", "https://ignored.example"),
            ])
            .unwrap(),
        );
        assert!(f.emulator);
        assert_eq!(f.base_url.as_str(), "http://localhost:8080/v1");
    }

    #[test]
    fn optional_settings_are_read() {
        let f = firestore(
            config(&[
                ("FIRESTORE_PROJECT_ID", "gem-shop"),
                ("FIRESTORE_DATABASE", "stock"),
                ("FIRESTORE_API_KEY", "AIzaTest"),
                ("GEMDESK_REQUEST_TIMEOUT_MS", "1500"),
            ])
            .unwrap(),
        );
        assert_eq!(f.database, "stock");
        assert_eq!(f.api_key.as_deref(), Some("AIzaTest"));
        assert_eq!(f.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = config(&[("FIRESTORE_PROJECT_ID", "   ")]).unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = config(&[
            ("FIRESTORE_PROJECT_ID", "gem-shop"),
            ("GEMDESK_REQUEST_TIMEOUT_MS", "soon"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "GEMDESK_REQUEST_TIMEOUT_MS",
                ..
            }
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = config(&[
            ("FIRESTORE_PROJECT_ID", "gem-shop"),
            ("GEMDESK_REQUEST_TIMEOUT_MS", "0"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "GEMDESK_REQUEST_TIMEOUT_MS",
                value: "0".into(),
                message: "must be greater than zero".into(),
            }
        );
    }
}
