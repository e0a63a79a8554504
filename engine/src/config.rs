//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::{EngineError, Result};

/// Level the engine starts at when none is configured
pub const DEFAULT_LEVEL: Level = 1;

fn default_level() -> Level {
    DEFAULT_LEVEL
}

/// Startup settings for a [`TypeEngine`](crate::TypeEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Progression level used by the engine's queries
    #[serde(default = "default_level")]
    pub level: Level,
}

impl EngineConfig {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Parse a configuration document, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(EngineError::Config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}
