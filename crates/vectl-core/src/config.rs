//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `VECTL_*`
//! env vars, then extracts typed connection profiles. Provides helpers to
//! expand `~` and `${VAR}` and to resolve relative paths against a known
//! base directory.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub const OUTPUT_FORMATS: [&str; 3] = ["table", "json", "yaml"];

/// Connection settings for one remote server profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionProfile {
    pub uri: String,
    pub token: Option<String>,
    pub db: Option<String>,
    pub output: String,
    pub timeout_secs: u64,
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        Self {
            uri: "http://localhost:19530".to_string(),
            token: None,
            db: None,
            output: "table".to_string(),
            timeout_secs: 30,
        }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        let base = env::var("VECTL_CONFIG_DIR")
            .map(expand_path)
            .unwrap_or_else(|_| PathBuf::from("."));

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("VECTL_"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Extract a named profile, or the `[connection]` table when no name
    /// is given. A missing `[connection]` table falls back to defaults;
    /// a missing named profile is an error.
    pub fn profile(&self, name: Option<&str>) -> anyhow::Result<ConnectionProfile> {
        match name {
            Some(n) => self
                .figment
                .extract_inner(&format!("profile.{n}"))
                .map_err(|e| anyhow::anyhow!("Unknown profile '{}': {}", n, e)),
            None => Ok(self
                .figment
                .extract_inner("connection")
                .unwrap_or_default()),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Ok(output) = self.figment.extract_inner::<String>("connection.output") {
            if !OUTPUT_FORMATS.contains(&output.as_str()) {
                anyhow::bail!(
                    "Invalid configuration: output must be one of {}",
                    OUTPUT_FORMATS.join(", ")
                );
            }
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after
/// expansion. If `p` is absolute, it's returned as-is.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
