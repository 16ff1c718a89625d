//! Policy configuration types

use crate::ban::BanPolicy;
use crate::error::{CurateError, Result};
use crate::holder::HolderTier;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest chat rate-limit window, one week
pub const MAX_CHAT_WINDOW_SECS: u64 = 7 * 24 * 3600;

/// Longest warning window, ten years
pub const MAX_WARNING_WINDOW_DAYS: i64 = 3650;

/// Complete policy configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Ban and warning-decay settings
    #[serde(default)]
    pub ban: BanPolicy,

    /// Chat gating settings
    #[serde(default)]
    pub chat: ChatPolicy,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat admission settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPolicy {
    /// Lowest gating-scale tier allowed to post
    #[serde(default = "default_min_tier")]
    pub min_tier: HolderTier,

    /// Sliding window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    /// Messages allowed per wallet per window
    #[serde(default = "default_max_messages")]
    pub max_messages: u32,
}

fn default_min_tier() -> HolderTier {
    HolderTier::Holder
}

fn default_window_seconds() -> u64 {
    60
}

fn default_max_messages() -> u32 {
    10
}

impl Default for ChatPolicy {
    fn default() -> Self {
        Self {
            min_tier: default_min_tier(),
            window_seconds: default_window_seconds(),
            max_messages: default_max_messages(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PolicyConfig {
    /// Parse and validate a TOML policy
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CurateError::ConfigLoad(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML policy file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CurateError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CurateError::ConfigLoad(e.to_string()))
    }

    /// Reject settings the decision modules cannot honor
    pub fn validate(&self) -> Result<()> {
        let ban = &self.ban;
        if ban.active_window_days <= 0 || ban.display_decay_days <= 0 {
            return Err(CurateError::InvalidConfig(
                "warning windows must be positive".into(),
            ));
        }
        if ban.active_window_days > MAX_WARNING_WINDOW_DAYS {
            return Err(CurateError::InvalidConfig(format!(
                "ban window exceeds {} days",
                MAX_WARNING_WINDOW_DAYS
            )));
        }
        if ban.display_decay_days > ban.active_window_days {
            return Err(CurateError::InvalidConfig(format!(
                "display decay ({} days) exceeds ban window ({} days)",
                ban.display_decay_days, ban.active_window_days
            )));
        }
        if ban.zero_karma_warning_threshold == 0 || ban.warning_threshold == 0 {
            return Err(CurateError::InvalidConfig(
                "warning thresholds must be at least 1".into(),
            ));
        }
        if self.chat.window_seconds == 0 || self.chat.window_seconds > MAX_CHAT_WINDOW_SECS {
            return Err(CurateError::InvalidConfig(format!(
                "chat window must be between 1 and {} seconds",
                MAX_CHAT_WINDOW_SECS
            )));
        }
        Ok(())
    }
}
