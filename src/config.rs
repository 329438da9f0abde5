use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;

use crate::error::ConfigError;
use crate::game::Variant;
use crate::scheduler::TickPolicy;
use crate::store::DEFAULT_SAVE_PATH;

pub const CONFIG_PATH: &str = "snake_config.json";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariantSetting {
    Basic,
    #[default]
    Enhanced,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct TickSettings {
    /// Period used by the basic variant.
    pub fixed_ms: u64,
    pub base_ms: u64,
    pub min_ms: u64,
    pub step_ms: u64,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self { fixed_ms: 150, base_ms: 150, min_ms: 60, step_ms: 5 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub variant: VariantSetting,
    pub tick: TickSettings,
    pub save_path: String,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: VariantSetting::default(),
            tick: TickSettings::default(),
            save_path: DEFAULT_SAVE_PATH.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Reads and validates `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tick;
        if t.fixed_ms == 0 || t.base_ms == 0 || t.min_ms == 0 {
            return Err(ConfigError::Invalid("tick periods must be non-zero".into()));
        }
        if t.min_ms > t.base_ms {
            return Err(ConfigError::Invalid(format!(
                "tick.min_ms ({}) exceeds tick.base_ms ({})",
                t.min_ms, t.base_ms
            )));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn variant(&self) -> Variant {
        match self.variant {
            VariantSetting::Basic => Variant::Basic,
            VariantSetting::Enhanced => Variant::Enhanced,
        }
    }

    pub fn tick_policy(&self) -> TickPolicy {
        match self.variant {
            VariantSetting::Basic => TickPolicy::Fixed { period_ms: self.tick.fixed_ms },
            VariantSetting::Enhanced => TickPolicy::ScoreScaled {
                base_ms: self.tick.base_ms,
                min_ms: self.tick.min_ms,
                step_ms: self.tick.step_ms,
            },
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
