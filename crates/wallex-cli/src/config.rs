/*
[INPUT]:  Optional YAML configuration file, WALLEX_* environment, CLI flags
[OUTPUT]: Client configuration for the wallex binary
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wallex_adapter::{ClientConfig, MergePrecedence, RequestOptions};

/// Client settings read from the YAML file; every field is optional
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// API key for signed endpoints
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Override for the API host
    #[serde(default)]
    pub base_url: Option<String>,
    /// Raise detailed API errors (HTTP status and raw response)
    #[serde(default)]
    pub detailed_errors: Option<bool>,
    /// Which side wins when client-wide and per-call options collide
    #[serde(default)]
    pub merge_precedence: Option<PrecedenceSetting>,
    /// Headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecedenceSetting {
    ClientWins,
    CallWins,
}

impl From<PrecedenceSetting> for MergePrecedence {
    fn from(setting: PrecedenceSetting) -> Self {
        match setting {
            PrecedenceSetting::ClientWins => MergePrecedence::ClientWins,
            PrecedenceSetting::CallWins => MergePrecedence::CallWins,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer alone
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub api_key: Option<String>,
    pub timeout_ms: Option<u64>,
    pub detailed_errors: bool,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// File settings applied over library defaults
    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(key) = self.api_key.as_ref().filter(|key| !key.is_empty()) {
            config = config.with_api_key(key.clone());
        }
        if let Some(millis) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(millis));
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(detailed) = self.detailed_errors {
            config = config.with_detailed_errors(detailed);
        }
        if let Some(precedence) = self.merge_precedence {
            config = config.with_merge_precedence(precedence.into());
        }
        if !self.headers.is_empty() {
            let options = self
                .headers
                .iter()
                .fold(RequestOptions::new(), |options, (name, value)| {
                    options.header(name.clone(), value.clone())
                });
            config = config.with_request_options(options);
        }
        config
    }
}

impl FlagOverrides {
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }
        if let Some(millis) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(millis));
        }
        if self.detailed_errors {
            config = config.with_detailed_errors(true);
        }
        config
    }
}

/// Resolve the client configuration: file, then environment, then flags
pub fn resolve(path: Option<&Path>, flags: &FlagOverrides) -> Result<ClientConfig> {
    let file = match path {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    let config = file
        .to_client_config()
        .with_env_overrides()
        .context("apply WALLEX_* environment")?;
    Ok(flags.apply(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_fields_map_to_client_config() {
        let yaml = r#"
api_key: file-key
timeout_ms: 2500
base_url: http://localhost:8080
detailed_errors: true
merge_precedence: call_wins
headers:
  X-Trace: cli
"#;
        let config = CliConfig::from_yaml(yaml).expect("valid yaml").to_client_config();

        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.raise_detailed_errors);
        assert_eq!(config.merge_precedence, MergePrecedence::CallWins);
        assert_eq!(
            config.request_options.headers.get("x-trace").map(String::as_str),
            Some("cli")
        );
    }

    #[test]
    fn test_empty_yaml_keeps_defaults() {
        let config = CliConfig::from_yaml("{}").expect("valid yaml").to_client_config();

        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, wallex_adapter::http::DEFAULT_TIMEOUT);
        assert!(!config.raise_detailed_errors);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(CliConfig::from_yaml("api_secret: nope").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = CliConfig {
            api_key: Some("file-key".to_string()),
            timeout_ms: Some(2500),
            ..CliConfig::default()
        };
        let flags = FlagOverrides {
            api_key: Some("flag-key".to_string()),
            timeout_ms: None,
            detailed_errors: true,
        };

        let config = flags.apply(file.to_client_config());

        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert!(config.raise_detailed_errors);
    }
}
