use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluation::{EvaluationFunction, UnknownEvaluationFunction};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownEvaluationFunction(#[from] UnknownEvaluationFunction),
    #[error("unknown agent `{name}`, expected one of {known}")]
    UnknownAgent { name: String, known: String },
    #[error("could not parse the agent config")]
    Json(#[from] serde_json::Error),
}

/// How the search agents should be set up
///
/// Every field has a default, so an empty JSON object is a valid config.
///
/// ```rust
/// use pacman_rs::config::AgentConfig;
/// use pacman_rs::evaluation::EvaluationFunction;
///
/// let config = AgentConfig::from_json(r#"{ "evalFn": "better", "depth": 3 }"#).unwrap();
/// let resolved = config.resolve().unwrap();
///
/// assert_eq!(resolved.evaluation_function, EvaluationFunction::Better);
/// assert_eq!(resolved.depth, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentConfig {
    #[serde(alias = "evalFn")]
    pub evaluation_function: String,
    pub depth: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            evaluation_function: EvaluationFunction::Score.name().to_owned(),
            depth: 2,
        }
    }
}

/// An [AgentConfig] whose names have all been checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub evaluation_function: EvaluationFunction,
    pub depth: usize,
}

impl AgentConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        Ok(ResolvedConfig {
            evaluation_function: self.evaluation_function.parse()?,
            depth: self.depth,
        })
    }
}
