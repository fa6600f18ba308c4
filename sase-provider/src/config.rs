//! Provider configuration
//!
//! Each setting is taken from the provider block first, then from `SASE_*`
//! environment variables, then from the JSON auth file, then from defaults.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sase_core::resource::{Attributes, Value};
use serde::Deserialize;
use thiserror::Error;

use crate::client::auth::Credentials;

pub const DEFAULT_HOST: &str = "api.sase.paloaltonetworks.com";
pub const DEFAULT_AUTH_URL: &str =
    "https://auth.apps.paloaltonetworks.com/auth/v1/oauth2/access_token";
pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 3600;

pub const ENV_HOST: &str = "SASE_HOST";
pub const ENV_AUTH_URL: &str = "SASE_AUTH_URL";
pub const ENV_CLIENT_ID: &str = "SASE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SASE_CLIENT_SECRET";
pub const ENV_SCOPE: &str = "SASE_SCOPE";
pub const ENV_PROTOCOL: &str = "SASE_PROTOCOL";
pub const ENV_PORT: &str = "SASE_PORT";
pub const ENV_TIMEOUT: &str = "SASE_TIMEOUT";
pub const ENV_SKIP_VERIFY_CERTIFICATE: &str = "SASE_SKIP_VERIFY_CERTIFICATE";
pub const ENV_LOGGING: &str = "SASE_LOGGING";
pub const ENV_AUTH_FILE: &str = "SASE_AUTH_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting '{name}' (set it in the provider block or {env})")]
    Missing { name: &'static str, env: &'static str },

    #[error("invalid value for '{name}': {message}")]
    Invalid { name: &'static str, message: String },

    #[error("failed to read auth file {path}: {source}")]
    AuthFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse auth file {path}: {source}")]
    AuthFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Unresolved provider settings; every field is optional until [`ProviderConfig::resolve`]
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub host: Option<String>,
    pub auth_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub scope: Option<String>,
    pub protocol: Option<String>,
    pub port: Option<u16>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    pub headers: HashMap<String, String>,
    pub skip_verify_certificate: Option<bool>,
    pub logging: Vec<String>,
    pub auth_file: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("auth_url", &self.auth_url)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("scope", &self.scope)
            .field("protocol", &self.protocol)
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("skip_verify_certificate", &self.skip_verify_certificate)
            .field("logging", &self.logging)
            .field("auth_file", &self.auth_file)
            .finish()
    }
}

impl ProviderConfig {
    /// Settings from a provider configuration block
    pub fn from_attributes(attrs: &Attributes) -> Result<Self, ConfigError> {
        let string = |name: &str| attrs.get(name).and_then(Value::as_str).map(str::to_string);

        let port = match attrs.get("port").and_then(Value::as_int) {
            Some(port) => Some(u16::try_from(port).map_err(|_| ConfigError::Invalid {
                name: "port",
                message: format!("{} is not a valid port", port),
            })?),
            None => None,
        };
        let timeout = match attrs.get("timeout").and_then(Value::as_int) {
            Some(t) if t > 0 => Some(t as u64),
            Some(t) => {
                return Err(ConfigError::Invalid {
                    name: "timeout",
                    message: format!("{} must be positive", t),
                });
            }
            None => None,
        };
        let headers = attrs
            .get("headers")
            .and_then(Value::as_map)
            .map(|m| {
                m.iter()
                    .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                    .collect()
            })
            .unwrap_or_default();
        let logging = attrs
            .get("logging")
            .and_then(Value::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: string("host"),
            auth_url: string("auth_url"),
            client_id: string("client_id"),
            client_secret: string("client_secret"),
            scope: string("scope"),
            protocol: string("protocol"),
            port,
            timeout,
            headers,
            skip_verify_certificate: attrs
                .get("skip_verify_certificate")
                .and_then(Value::as_bool),
            logging,
            auth_file: string("auth_file"),
        })
    }

    /// Settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an environment-like lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match lookup(ENV_PORT) {
            Some(v) => Some(v.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "port",
                message: format!("{}: {}", ENV_PORT, e),
            })?),
            None => None,
        };
        let timeout = match lookup(ENV_TIMEOUT) {
            Some(v) => Some(v.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "timeout",
                message: format!("{}: {}", ENV_TIMEOUT, e),
            })?),
            None => None,
        };
        let skip_verify_certificate = match lookup(ENV_SKIP_VERIFY_CERTIFICATE) {
            Some(v) => Some(parse_bool(&v).ok_or_else(|| ConfigError::Invalid {
                name: "skip_verify_certificate",
                message: format!("{}: '{}' is not a boolean", ENV_SKIP_VERIFY_CERTIFICATE, v),
            })?),
            None => None,
        };

        Ok(Self {
            host: lookup(ENV_HOST),
            auth_url: lookup(ENV_AUTH_URL),
            client_id: lookup(ENV_CLIENT_ID),
            client_secret: lookup(ENV_CLIENT_SECRET),
            scope: lookup(ENV_SCOPE),
            protocol: lookup(ENV_PROTOCOL),
            port,
            timeout,
            headers: HashMap::new(),
            skip_verify_certificate,
            logging: lookup(ENV_LOGGING)
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            auth_file: lookup(ENV_AUTH_FILE),
        })
    }

    /// Settings from a JSON auth file
    pub fn from_auth_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::AuthFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::AuthFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fill every unset field of `self` from `fallback`
    pub fn or(self, fallback: ProviderConfig) -> Self {
        let mut headers = fallback.headers;
        headers.extend(self.headers);
        Self {
            host: self.host.or(fallback.host),
            auth_url: self.auth_url.or(fallback.auth_url),
            client_id: self.client_id.or(fallback.client_id),
            client_secret: self.client_secret.or(fallback.client_secret),
            scope: self.scope.or(fallback.scope),
            protocol: self.protocol.or(fallback.protocol),
            port: self.port.or(fallback.port),
            timeout: self.timeout.or(fallback.timeout),
            headers,
            skip_verify_certificate: self
                .skip_verify_certificate
                .or(fallback.skip_verify_certificate),
            logging: if self.logging.is_empty() {
                fallback.logging
            } else {
                self.logging
            },
            auth_file: self.auth_file.or(fallback.auth_file),
        }
    }

    /// Layer explicit settings over the environment and the auth file, then resolve
    pub fn load(explicit: ProviderConfig) -> Result<ClientConfig, ConfigError> {
        Self::load_with(explicit, Self::from_env()?)
    }

    pub fn load_with(explicit: ProviderConfig, env: ProviderConfig) -> Result<ClientConfig, ConfigError> {
        let mut config = explicit.or(env);
        if let Some(path) = config.auth_file.clone() {
            config = config.or(Self::from_auth_file(path)?);
        }
        config.resolve()
    }

    /// Apply defaults and check required settings
    pub fn resolve(self) -> Result<ClientConfig, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::Missing {
            name: "client_id",
            env: ENV_CLIENT_ID,
        })?;
        let client_secret = self.client_secret.ok_or(ConfigError::Missing {
            name: "client_secret",
            env: ENV_CLIENT_SECRET,
        })?;
        let scope = self.scope.ok_or(ConfigError::Missing {
            name: "scope",
            env: ENV_SCOPE,
        })?;

        let protocol = self.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());
        if protocol != "https" && protocol != "http" {
            return Err(ConfigError::Invalid {
                name: "protocol",
                message: format!("'{}' must be https or http", protocol),
            });
        }
        let host = self.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let base_url = match self.port.filter(|&p| p != 0) {
            Some(port) => format!("{}://{}:{}", protocol, host, port),
            None => format!("{}://{}", protocol, host),
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if !(1..=MAX_TIMEOUT_SECS).contains(&timeout) {
            return Err(ConfigError::Invalid {
                name: "timeout",
                message: format!("{} must be between 1 and {} seconds", timeout, MAX_TIMEOUT_SECS),
            });
        }

        Ok(ClientConfig {
            base_url,
            auth_url: self.auth_url.unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            credentials: Credentials::new(client_id, client_secret, scope),
            timeout: Duration::from_secs(timeout),
            headers: self.headers,
            skip_verify_certificate: self.skip_verify_certificate.unwrap_or(false),
            logging: LogCategories::parse(&self.logging)?,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Which API traffic is written to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCategories {
    /// Create, update and delete actions
    pub action: bool,
    /// Method and path of every request
    pub path: bool,
    /// Request bodies
    pub send: bool,
    /// Response bodies
    pub receive: bool,
}

impl Default for LogCategories {
    fn default() -> Self {
        Self {
            action: true,
            path: false,
            send: false,
            receive: false,
        }
    }
}

impl LogCategories {
    pub fn quiet() -> Self {
        Self {
            action: false,
            path: false,
            send: false,
            receive: false,
        }
    }

    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Ok(Self::default());
        }
        let mut categories = Self::quiet();
        for name in names {
            match name.as_ref() {
                "quiet" => {}
                "action" => categories.action = true,
                "path" => categories.path = true,
                "send" => categories.send = true,
                "receive" => categories.receive = true,
                other => {
                    return Err(ConfigError::Invalid {
                        name: "logging",
                        message: format!(
                            "unknown category '{}', expected quiet, action, path, send or receive",
                            other
                        ),
                    });
                }
            }
        }
        Ok(categories)
    }
}

/// Fully resolved settings used to build a client
#[derive(Clone)]
pub struct ClientConfig {
    /// `{protocol}://{host}[:{port}]`
    pub base_url: String,
    pub auth_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub headers: HashMap<String, String>,
    pub skip_verify_certificate: bool,
    pub logging: LogCategories,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("skip_verify_certificate", &self.skip_verify_certificate)
            .field("logging", &self.logging)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> ProviderConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProviderConfig::from_lookup(|k| map.get(k).cloned()).unwrap()
    }

    fn explicit() -> ProviderConfig {
        ProviderConfig {
            client_id: Some("explicit-id".to_string()),
            client_secret: Some("explicit-secret".to_string()),
            scope: Some("tsg_id:1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_fill_unset_settings() {
        let config = ProviderConfig::load_with(explicit(), ProviderConfig::default()).unwrap();
        assert_eq!(config.base_url, "https://api.sase.paloaltonetworks.com");
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.logging, LogCategories::default());
    }

    #[test]
    fn explicit_settings_win_over_env() {
        let env = env(&[
            (ENV_CLIENT_ID, "env-id"),
            (ENV_HOST, "api.example.test"),
            (ENV_PORT, "8443"),
        ]);
        let config = ProviderConfig::load_with(explicit(), env).unwrap();
        assert_eq!(config.credentials.client_id(), "explicit-id");
        assert_eq!(config.base_url, "https://api.example.test:8443");
    }

    #[test]
    fn env_wins_over_auth_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"client_id":"file-id","client_secret":"file-secret","scope":"tsg_id:9","host":"file.example.test"}}"#
        )
        .unwrap();

        let env = env(&[
            (ENV_CLIENT_ID, "env-id"),
            (ENV_AUTH_FILE, file.path().to_str().unwrap()),
        ]);
        let config = ProviderConfig::load_with(ProviderConfig::default(), env).unwrap();
        assert_eq!(config.credentials.client_id(), "env-id");
        assert_eq!(config.credentials.scope(), "tsg_id:9");
        assert_eq!(config.base_url, "https://file.example.test");
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = ProviderConfig::load_with(ProviderConfig::default(), ProviderConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { name: "client_id", .. }));
    }

    #[test]
    fn unreadable_auth_file() {
        let config = ProviderConfig {
            auth_file: Some("/nonexistent/sase-auth.json".to_string()),
            ..explicit()
        };
        let err = ProviderConfig::load_with(config, ProviderConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::AuthFileRead { .. }));
    }

    #[test]
    fn invalid_env_values_are_rejected() {
        let result = ProviderConfig::from_lookup(|k| (k == ENV_PORT).then(|| "http".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "port", .. })));

        let result = ProviderConfig::from_lookup(|k| {
            (k == ENV_SKIP_VERIFY_CERTIFICATE).then(|| "maybe".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn from_attributes_reads_provider_block() {
        let attrs = Attributes::from([
            ("host".to_string(), Value::from("api.example.test")),
            ("port".to_string(), Value::Int(443)),
            ("skip_verify_certificate".to_string(), Value::Bool(true)),
            (
                "logging".to_string(),
                Value::List(vec![Value::from("send"), Value::from("receive")]),
            ),
        ]);
        let config = ProviderConfig::from_attributes(&attrs).unwrap();
        assert_eq!(config.port, Some(443));
        assert_eq!(config.skip_verify_certificate, Some(true));

        let logging = LogCategories::parse(&config.logging).unwrap();
        assert!(logging.send && logging.receive && !logging.action);
    }

    #[test]
    fn port_zero_keeps_protocol_default() {
        let config = ProviderConfig {
            port: Some(0),
            ..explicit()
        };
        let config = ProviderConfig::load_with(config, ProviderConfig::default()).unwrap();
        assert_eq!(config.base_url, "https://api.sase.paloaltonetworks.com");
    }

    #[test]
    fn zero_timeout_from_env_is_rejected() {
        for value in ["0", "3601"] {
            let err = ProviderConfig::load_with(explicit(), env(&[(ENV_TIMEOUT, value)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { name: "timeout", .. }));
        }
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let attrs = Attributes::from([("port".to_string(), Value::Int(70000))]);
        assert!(ProviderConfig::from_attributes(&attrs).is_err());
    }

    #[test]
    fn unknown_logging_category() {
        assert!(LogCategories::parse(&["verbose"]).is_err());
        assert_eq!(LogCategories::parse(&["quiet"]).unwrap(), LogCategories::quiet());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = explicit();
        let text = format!("{:?}", config);
        assert!(!text.contains("explicit-secret"));

        let resolved = ProviderConfig::load_with(config, ProviderConfig::default()).unwrap();
        assert!(!format!("{:?}", resolved).contains("explicit-secret"));
    }
}
