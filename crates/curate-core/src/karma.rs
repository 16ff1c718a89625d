//! # Karma Rewards
//!
//! Every contribution earns `base points x tier multiplier`. A quarter is paid
//! when the action is taken; the remaining three quarters are paid once the
//! related asset is verified.
//!
//! | Action    | Base points |
//! |-----------|-------------|
//! | add_asset | 100         |
//! | upvote    | 10          |
//! | report    | 5           |
//!
//! The calculator does not remember which payouts were issued. The caller
//! must record the deferred payout per action so it is paid at most once.

use crate::constants::{DEFERRED_SHARE, IMMEDIATE_SHARE};
use crate::error::CurateError;
use crate::holder::{classify, HolderTier};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Karma-earning action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KarmaAction {
    /// Submitting a new asset to the registry
    AddAsset,
    /// Voting an asset up
    Upvote,
    /// Reporting an asset
    Report,
}

impl KarmaAction {
    /// Base points before the tier multiplier
    pub fn base_points(&self) -> f64 {
        match self {
            Self::AddAsset => 100.0,
            Self::Upvote => 10.0,
            Self::Report => 5.0,
        }
    }

    /// Get action tag
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAsset => "add_asset",
            Self::Upvote => "upvote",
            Self::Report => "report",
        }
    }
}

impl fmt::Display for KarmaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KarmaAction {
    type Err = CurateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add_asset" => Ok(Self::AddAsset),
            "upvote" => Ok(Self::Upvote),
            "report" => Ok(Self::Report),
            other => Err(CurateError::UnknownAction(other.to_string())),
        }
    }
}

/// Full karma breakdown for one action
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardSplit {
    /// Action taken
    pub action: KarmaAction,
    /// Actor's tier on the karma scale
    pub tier: HolderTier,
    /// Base points x multiplier
    pub total: f64,
    /// Paid at action time
    pub immediate: f64,
    /// Paid when the asset reaches verified
    pub deferred: f64,
}

impl RewardSplit {
    /// Compute the split for an actor holding `percent` of supply
    pub fn for_action(action: KarmaAction, percent: f64) -> Self {
        let (tier, multiplier) = classify(percent);
        let total = action.base_points() * multiplier;
        Self {
            action,
            tier,
            total,
            immediate: total * IMMEDIATE_SHARE,
            deferred: total * DEFERRED_SHARE,
        }
    }
}

/// Karma for one side of an action's payout
///
/// `immediate = true` returns the 25% paid at action time, otherwise the
/// 75% paid at verification.
pub fn reward(action: KarmaAction, percent: f64, immediate: bool) -> f64 {
    let split = RewardSplit::for_action(action, percent);
    let amount = if immediate {
        split.immediate
    } else {
        split.deferred
    };
    tracing::debug!(%action, tier = %split.tier, immediate, amount, "karma reward");
    amount
}

/// Like [`reward`] but takes a raw action tag
///
/// Unrecognized tags are worth zero points rather than an error.
pub fn reward_for_tag(tag: &str, percent: f64, immediate: bool) -> f64 {
    match tag.parse::<KarmaAction>() {
        Ok(action) => reward(action, percent, immediate),
        Err(_) => {
            tracing::debug!(tag, "unknown karma action, no reward");
            0.0
        }
    }
}
