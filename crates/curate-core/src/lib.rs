//! # Curate Core
//!
//! Reputation ("karma") and community-signal decisions for the Curate asset
//! registry. Every decision is a pure function over plain data: the hosting
//! service reads balances, vote tallies and warning logs from its own store,
//! calls into this crate, and persists the result verbatim.
//!
//! This crate provides:
//! - `holder` - supply share to [`HolderTier`] on the karma and chat-gating scales
//! - `karma` - action rewards split into immediate and deferred payouts
//! - `verification` - pending / backed / verified evaluation
//! - `moderation` - report-driven hiding relative to the current status
//! - `ban` - warning windows and ban recommendations
//! - `lifecycle` - monotonic status transitions combining the above
//!
//! ## Data flow
//!
//! ```text
//!   balance / supply ──► HolderTier ──┬──► karma reward (immediate 25% / deferred 75%)
//!                                     │
//!   supply weight + voters ───────────┼──► AssetStatus ──► next_status(prev, new)
//!                                     │          │
//!   report weight + reporters ────────┴──────────┴──► hidden?
//!
//!   karma balance + warning log ─────────────────────► BanDecision
//! ```

pub mod ban;
pub mod config;
pub mod error;
pub mod holder;
pub mod karma;
pub mod lifecycle;
pub mod moderation;
pub mod verification;

pub use ban::{
    active_warnings, displayed_warnings, evaluate_ban, evaluate_ban_at, BanDecision, BanPolicy,
    Warning,
};
pub use config::{ChatPolicy, LoggingConfig, PolicyConfig};
pub use error::{CurateError, Result};
pub use holder::{classify, classify_for_gating, supply_percent, HolderTier, TierRule};
pub use karma::{reward, reward_for_tag, KarmaAction, RewardSplit};
pub use lifecycle::{assess_asset, AssetAssessment, VoteSignal};
pub use moderation::{hidden_thresholds, should_hide, should_hide_tag};
pub use verification::{evaluate, next_status, AssetStatus, Thresholds};

/// Policy constants shared by the decision modules
pub mod constants {
    /// Share of an action's karma paid when the action is taken
    pub const IMMEDIATE_SHARE: f64 = 0.25;

    /// Share of an action's karma paid once the asset is verified
    pub const DEFERRED_SHARE: f64 = 0.75;

    /// Warnings younger than this count toward a ban
    pub const BAN_WINDOW_DAYS: i64 = 90;

    /// Warnings younger than this are shown to the wallet owner
    pub const DISPLAY_DECAY_DAYS: i64 = 30;

    /// Active warnings that ban a wallet whose karma is zero or negative
    pub const ZERO_KARMA_WARNING_THRESHOLD: usize = 2;

    /// Active warnings that ban a wallet regardless of karma
    pub const WARNING_THRESHOLD: usize = 3;
}

pub use constants::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ban::{evaluate_ban, evaluate_ban_at, BanDecision, Warning};
    pub use crate::error::{CurateError, Result};
    pub use crate::holder::{classify, classify_for_gating, HolderTier};
    pub use crate::karma::{reward, KarmaAction, RewardSplit};
    pub use crate::lifecycle::{assess_asset, AssetAssessment, VoteSignal};
    pub use crate::moderation::should_hide;
    pub use crate::verification::{evaluate, next_status, AssetStatus};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_shares_sum_to_one() {
        assert_eq!(IMMEDIATE_SHARE + DEFERRED_SHARE, 1.0);
    }

    #[test]
    fn test_display_window_inside_ban_window() {
        assert!(DISPLAY_DECAY_DAYS < BAN_WINDOW_DAYS);
    }
}
