//! Runtime configuration for providers and utility hooks.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoints, DEFAULT_DESKTOP_MIN, DEFAULT_TABLET_MIN};
use crate::error::ConfigError;

pub const DEFAULT_STORAGE_NAMESPACE: &str = "agentflow";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for every persisted slice key.
    pub storage_namespace: String,
    /// Quiet period for debounced inputs (search boxes, filters).
    pub debounce_ms: u64,
    pub breakpoints: Breakpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_owned(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl Config {
    /// Build config from process environment variables.
    ///
    /// Optional:
    /// - `AGENTFLOW_STORAGE_NAMESPACE`: default `agentflow`
    /// - `AGENTFLOW_DEBOUNCE_MS`: default 300
    /// - `AGENTFLOW_TABLET_MIN`: default 768
    /// - `AGENTFLOW_DESKTOP_MIN`: default 1024
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup (environment, build-time vars, tests).
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidNumber`] for unparsable numbers,
    /// [`ConfigError::EmptyNamespace`] for a blank namespace, and
    /// [`ConfigError::BreakpointOrder`] when tablet is not below desktop.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_namespace = lookup("AGENTFLOW_STORAGE_NAMESPACE")
            .map_or_else(|| DEFAULT_STORAGE_NAMESPACE.to_owned(), |v| v.trim().to_owned());
        if storage_namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }

        let debounce_ms = parse_or(&lookup, "AGENTFLOW_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)?;
        let breakpoints = Breakpoints {
            tablet_min: parse_or(&lookup, "AGENTFLOW_TABLET_MIN", DEFAULT_TABLET_MIN)?,
            desktop_min: parse_or(&lookup, "AGENTFLOW_DESKTOP_MIN", DEFAULT_DESKTOP_MIN)?,
        };
        if breakpoints.tablet_min >= breakpoints.desktop_min {
            return Err(ConfigError::BreakpointOrder {
                tablet_min: breakpoints.tablet_min,
                desktop_min: breakpoints.desktop_min,
            });
        }

        Ok(Self { storage_namespace, debounce_ms, breakpoints })
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse_or<N: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: N,
) -> Result<N, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}
