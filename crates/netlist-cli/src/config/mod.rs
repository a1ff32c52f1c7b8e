//! Configuration management.
//!
//! The config file is TOML with one table per named section:
//!
//! ```toml
//! [default]
//! host = "https://akab-xxxx.luna.akamaiapis.net"
//! timeout_secs = 60
//!
//! [customer-b]
//! host = "https://akab-yyyy.luna.akamaiapis.net"
//! account_switch_key = "1-ABCDE"
//! ```

use anyhow::{bail, Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Section used when none is selected
pub const DEFAULT_SECTION: &str = "default";

/// Environment variable overriding the API host
pub const ENV_HOST: &str = "NETLIST_HOST";

/// Environment variable overriding the account switch key
pub const ENV_ACCOUNT_SWITCH_KEY: &str = "NETLIST_ACCOUNT_SWITCH_KEY";

/// Environment variable carrying a pre-computed authorization header
pub const ENV_AUTHORIZATION: &str = "NETLIST_AUTHORIZATION";

/// Keys accepted by `config set`
pub const KEYS: [&str; 5] = [
    "host",
    "account_switch_key",
    "authorization",
    "timeout_secs",
    "output_format",
];

/// One named section of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Act on behalf of another account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_switch_key: Option<String>,

    /// Value of the Authorization header sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

/// CLI configuration: named sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub sections: BTreeMap<String, Section>,
}

impl Config {
    /// Default config file path
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "apiheat", "netlist")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Explicit path if given, default path otherwise
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from file, empty if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }

    /// Look up a section, empty if absent
    pub fn section(&self, name: &str) -> Section {
        self.sections.get(name).cloned().unwrap_or_default()
    }

    /// Set one key in a section, creating the section if needed
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let entry = self.sections.entry(section.to_string()).or_default();
        let value = value.trim();

        match key {
            "host" => entry.host = Some(value.to_string()),
            "account_switch_key" | "ask" => entry.account_switch_key = Some(value.to_string()),
            "authorization" => entry.authorization = Some(value.to_string()),
            "timeout_secs" | "timeout" => {
                entry.timeout_secs = Some(
                    value
                        .parse()
                        .with_context(|| format!("timeout_secs must be a number, got '{value}'"))?,
                );
            }
            "output_format" | "output" => entry.output_format = Some(value.parse()?),
            _ => bail!(
                "Unknown config key: {key}\n\nAvailable keys: {}",
                KEYS.join(", ")
            ),
        }

        Ok(())
    }
}

/// Effective connection settings after applying precedence
///
/// Flag, then environment, then config section, then built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: Option<String>,
    pub account_switch_key: Option<String>,
    pub authorization: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_format: OutputFormat,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub account_switch_key: Option<String>,
    pub output_format: Option<OutputFormat>,
}

impl Settings {
    /// Resolve settings, reading the environment through `env`
    pub fn resolve<F>(overrides: Overrides, section: &Section, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        Self {
            host: overrides
                .host
                .or_else(|| env(ENV_HOST))
                .or_else(|| section.host.clone()),
            account_switch_key: overrides
                .account_switch_key
                .or_else(|| env(ENV_ACCOUNT_SWITCH_KEY))
                .or_else(|| section.account_switch_key.clone()),
            authorization: env(ENV_AUTHORIZATION).or_else(|| section.authorization.clone()),
            timeout_secs: section.timeout_secs,
            output_format: overrides
                .output_format
                .or(section.output_format)
                .unwrap_or_default(),
        }
    }

    /// API host, or an error telling the user how to set one
    pub fn require_host(&self) -> Result<&str> {
        self.host.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API host required.\n\n\
                 Set it with one of:\n  \
                 1. --host <URL>\n  \
                 2. {ENV_HOST} environment variable\n  \
                 3. netlist config set host <URL>"
            )
        })
    }
}
