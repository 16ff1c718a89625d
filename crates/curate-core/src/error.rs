//! Error types for Curate core decisions

use thiserror::Error;

/// Result type alias for Curate operations
pub type Result<T> = std::result::Result<T, CurateError>;

/// Errors that can occur while parsing inputs or loading policy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurateError {
    // === Tag Parsing ===
    /// Status tag is not pending, backed or verified
    #[error("Unknown asset status: {0}")]
    UnknownStatus(String),

    /// Action tag is not add_asset, upvote or report
    #[error("Unknown karma action: {0}")]
    UnknownAction(String),

    /// Tier tag is not mega, whale, holder or small
    #[error("Unknown holder tier: {0}")]
    UnknownTier(String),

    // === Configuration ===
    /// Policy failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Policy file could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),
}

impl CurateError {
    /// Get the error code for API responses
    pub fn code(&self) -> u32 {
        match self {
            Self::UnknownStatus(_) => 2001,
            Self::UnknownAction(_) => 2002,
            Self::UnknownTier(_) => 2003,
            Self::InvalidConfig(_) | Self::ConfigLoad(_) => 2100,
        }
    }

    /// Check if error is recoverable
    ///
    /// Bad tags come from persisted data and will not fix themselves.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConfigLoad(_))
    }
}
