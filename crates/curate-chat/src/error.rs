//! Chat admission errors

use curate_core::HolderTier;
use thiserror::Error;

/// Result type alias for chat admission
pub type Result<T> = std::result::Result<T, ChatError>;

/// Reasons a message is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Wallet's gating tier is below the configured minimum
    #[error("Tier {tier} is below required tier {required}")]
    TierTooLow {
        tier: HolderTier,
        required: HolderTier,
    },

    /// Wallet exhausted its message budget
    #[error("Rate limit exceeded: {limit} messages per window, retry in {retry_after_secs}s")]
    RateLimitExceeded { limit: u32, retry_after_secs: u64 },
}

impl ChatError {
    /// Get the error code for API responses
    pub fn code(&self) -> u32 {
        match self {
            Self::TierTooLow { .. } => 3001,
            Self::RateLimitExceeded { .. } => 3002,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RateLimitExceeded { .. })
    }
}
