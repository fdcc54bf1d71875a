//! Configuration system for the stowage planner.
//!
//! Load planner configuration from TOML or YAML files to control the
//! search budget, the explored-set keying and the heuristic without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use stowage_config::{ExploredKeying, PlannerConfig};
//! use std::time::Duration;
//!
//! let config = PlannerConfig::from_toml_str(r#"
//!     [deck]
//!     rows = 8
//!     columns = 12
//!
//!     [termination]
//!     node_limit = 250000
//!     seconds_spent_limit = 30
//!
//!     [search]
//!     explored_keying = "deck_only"
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.node_limit(), Some(250_000));
//! assert_eq!(config.search.explored_keying, ExploredKeying::DeckOnly);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use stowage_config::PlannerConfig;
//!
//! let config = PlannerConfig::load("planner.toml").unwrap_or_default();
//! // Proceeds with an unbounded search if the file doesn't exist
//! assert!(config.node_limit().is_none());
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use stowage_core::DeckDimensions;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main planner configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerConfig {
    /// Expected deck dimensions. When set, decks of any other size are
    /// rejected as invalid input.
    #[serde(default)]
    pub deck: Option<DeckConfig>,

    /// Search budget.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Search engine behaviour.
    #[serde(default)]
    pub search: SearchConfig,
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no planner could honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(deck) = &self.deck {
            if deck.rows == 0 || deck.columns == 0 {
                return Err(ConfigError::Invalid(format!(
                    "deck must have at least one row and one column, got {}x{}",
                    deck.rows, deck.columns
                )));
            }
        }
        if self.node_limit() == Some(0) {
            return Err(ConfigError::Invalid(
                "node_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the expected deck dimensions.
    pub fn with_deck(mut self, rows: usize, columns: usize) -> Self {
        self.deck = Some(DeckConfig { rows, columns });
        self
    }

    /// Sets the node budget.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the time budget in milliseconds.
    pub fn with_time_limit_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the explored-set keying.
    pub fn with_explored_keying(mut self, keying: ExploredKeying) -> Self {
        self.search.explored_keying = keying;
        self
    }

    /// Sets the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicType) -> Self {
        self.search.heuristic = heuristic;
        self
    }

    /// Returns the expected deck dimensions, if configured.
    pub fn dimensions(&self) -> Option<DeckDimensions> {
        self.deck
            .as_ref()
            .map(|deck| DeckDimensions::new(deck.rows, deck.columns))
    }

    /// Returns the node budget, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_limit)
    }

    /// Returns the time budget, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Deck dimensions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DeckConfig {
    pub rows: usize,
    pub columns: usize,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of frontier pops.
    pub node_limit: Option<u64>,

    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching, added to the seconds. The
    /// sum saturates at `Duration::MAX`.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        (!limit.is_zero()).then_some(limit)
    }
}

/// Search engine configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    #[serde(default)]
    pub explored_keying: ExploredKeying,

    #[serde(default)]
    pub heuristic: HeuristicType,
}

/// What identifies a state in the explored set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExploredKeying {
    /// Deck arrangement only; the first task bookkeeping to reach a deck wins.
    #[default]
    DeckOnly,

    /// Deck arrangement together with per-task progress.
    DeckAndTasks,
}

/// Remaining-cost estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicType {
    /// Manhattan travel of every pending task.
    #[default]
    Manhattan,

    /// Always zero (uniform-cost search).
    Zero,
}

#[cfg(test)]
mod tests;
