//! Server settings read from the environment

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/labeler.yml";

/// Which workflow trigger the server hands dispatched events to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Log each workflow request
    Log,
    /// Keep requests in memory (dry runs)
    Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub config_path: PathBuf,
    pub trigger: TriggerKind,
}

impl ServerSettings {
    /// Read `HOST`, `PORT`, `LABELER_CONFIG` and `LABELER_TRIGGER`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16, got `{}`", raw))?,
            None => 8080,
        };

        let config_path = lookup("LABELER_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let trigger = match lookup("LABELER_TRIGGER").as_deref() {
            None | Some("log") => TriggerKind::Log,
            Some("record") => TriggerKind::Record,
            Some(other) => bail!("LABELER_TRIGGER must be `log` or `record`, got `{}`", other),
        };

        Ok(Self {
            host,
            port,
            config_path,
            trigger,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
