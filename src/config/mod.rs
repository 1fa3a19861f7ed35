use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Connection settings for an Airbyte instance.
///
/// Loaded from a provider config file, from environment variables:
/// - `AIRBYTE_HOST` (required, e.g. `http://localhost:8000`)
/// - `AIRBYTE_USERNAME`
/// - `AIRBYTE_PASSWORD`
///
/// or from the resource data handed over by the host in its configure step.
#[derive(Clone, Default, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl ClientConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("AIRBYTE_HOST").context("AIRBYTE_HOST not set")?;
        let username = std::env::var("AIRBYTE_USERNAME").unwrap_or_default();
        let password = std::env::var("AIRBYTE_PASSWORD").unwrap_or_default();
        Ok(Self {
            host,
            username,
            password,
        })
    }

    /// Decode the `{"host", "username", "password"}` map sent by the host.
    pub fn from_resource_data(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Err(anyhow!("no data provided to configure resource"));
        }

        let mut creds: HashMap<String, String> = serde_json::from_str(data)
            .map_err(|_| anyhow!("malformed data provided to configure resource"))?;

        let host = creds
            .remove("host")
            .filter(|h| !h.is_empty())
            .ok_or_else(|| anyhow!("malformed data provided to configure resource"))?;

        Ok(Self {
            host,
            username: creds.remove("username").unwrap_or_default(),
            password: creds.remove("password").unwrap_or_default(),
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Complete provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Prefix of every resource type name (`<provider>_source_stripe`)
    #[serde(default = "default_provider_name")]
    pub provider_name: String,
    /// Airbyte connection; when absent the host must call the configure endpoint
    #[serde(default)]
    pub client: Option<ClientConfig>,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_provider_name() -> String {
    "airbyte".to_string()
}

/// HTTP API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3002
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_name: default_provider_name(),
            client: None,
            api: ApiConfig::default(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<ProviderConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path))?;
    let config: ProviderConfig =
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path))?;
    Ok(config)
}
