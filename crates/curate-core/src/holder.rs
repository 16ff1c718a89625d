//! # Holder Classification
//!
//! Maps a wallet's share of total token supply (0-100 scale) to a
//! [`HolderTier`]. Two independent scales exist:
//!
//! | Tier   | Karma scale | Chat-gating scale | Karma multiplier |
//! |--------|-------------|-------------------|------------------|
//! | Mega   | >= 5%       | >= 1%             | 3.0x             |
//! | Whale  | >= 1%       | >= 0.1%           | 2.0x             |
//! | Holder | >= 0.1%     | >= 0.01%          | 1.5x             |
//! | Small  | below       | below             | 1.0x             |
//!
//! The scales serve different purposes and are never merged. Lower bounds
//! are inclusive, so a share exactly on a boundary lands in the higher tier.

use crate::error::CurateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Holder tier classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolderTier {
    /// Largest holders
    Mega,
    /// Large holders
    Whale,
    /// Meaningful stake
    Holder,
    /// Everyone else, including zero balances
    Small,
}

impl HolderTier {
    /// Karma multiplier for the tier
    pub fn karma_multiplier(&self) -> f64 {
        match self {
            Self::Mega => 3.0,
            Self::Whale => 2.0,
            Self::Holder => 1.5,
            Self::Small => 1.0,
        }
    }

    /// Position on the ownership ladder, `Small` = 0
    pub fn rank(&self) -> u8 {
        match self {
            Self::Mega => 3,
            Self::Whale => 2,
            Self::Holder => 1,
            Self::Small => 0,
        }
    }

    /// True if this tier is the same as or above `other`
    pub fn at_least(&self, other: HolderTier) -> bool {
        self.rank() >= other.rank()
    }

    /// Get tier name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mega => "mega",
            Self::Whale => "whale",
            Self::Holder => "holder",
            Self::Small => "small",
        }
    }
}

impl fmt::Display for HolderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HolderTier {
    type Err = CurateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mega" => Ok(Self::Mega),
            "whale" => Ok(Self::Whale),
            "holder" => Ok(Self::Holder),
            "small" => Ok(Self::Small),
            other => Err(CurateError::UnknownTier(other.to_string())),
        }
    }
}

/// One row of a tier table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierRule {
    /// Inclusive lower bound, percent of total supply
    pub min_percent: f64,
    /// Tier granted at or above the bound
    pub tier: HolderTier,
    /// Karma multiplier carried by the tier
    pub multiplier: f64,
}

impl TierRule {
    const fn new(min_percent: f64, tier: HolderTier, multiplier: f64) -> Self {
        Self {
            min_percent,
            tier,
            multiplier,
        }
    }
}

/// Karma scale, highest threshold first
pub const KARMA_TIERS: [TierRule; 3] = [
    TierRule::new(5.0, HolderTier::Mega, 3.0),
    TierRule::new(1.0, HolderTier::Whale, 2.0),
    TierRule::new(0.1, HolderTier::Holder, 1.5),
];

/// Chat-gating scale, highest threshold first
pub const GATING_TIERS: [TierRule; 3] = [
    TierRule::new(1.0, HolderTier::Mega, 3.0),
    TierRule::new(0.1, HolderTier::Whale, 2.0),
    TierRule::new(0.01, HolderTier::Holder, 1.5),
];

const SMALL: TierRule = TierRule::new(0.0, HolderTier::Small, 1.0);

fn match_rule(table: &[TierRule], percent: f64) -> TierRule {
    table
        .iter()
        .find(|rule| percent >= rule.min_percent)
        .copied()
        .unwrap_or(SMALL)
}

/// Classify a supply share on the karma scale
///
/// Returns the tier and its karma multiplier. Zero, negative and NaN
/// shares are `Small`; shares above 100% are simply `Mega`.
pub fn classify(percent: f64) -> (HolderTier, f64) {
    let rule = match_rule(&KARMA_TIERS, percent);
    tracing::debug!(percent, tier = %rule.tier, "classified holder");
    (rule.tier, rule.multiplier)
}

/// Classify a supply share on the chat-gating scale
pub fn classify_for_gating(percent: f64) -> HolderTier {
    match_rule(&GATING_TIERS, percent).tier
}

/// Convert a raw balance into a percentage of total supply
///
/// A zero total supply yields 0.0 rather than dividing by zero.
pub fn supply_percent(balance: u128, total_supply: u128) -> f64 {
    if total_supply == 0 {
        return 0.0;
    }
    balance as f64 / total_supply as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_karma_tiers() {
        assert_eq!(classify(12.0), (HolderTier::Mega, 3.0));
        assert_eq!(classify(2.5), (HolderTier::Whale, 2.0));
        assert_eq!(classify(0.5), (HolderTier::Holder, 1.5));
        assert_eq!(classify(0.05), (HolderTier::Small, 1.0));
    }

    #[test]
    fn test_karma_boundaries_are_inclusive() {
        assert_eq!(classify(5.0).0, HolderTier::Mega);
        assert_eq!(classify(1.0).0, HolderTier::Whale);
        assert_eq!(classify(0.1).0, HolderTier::Holder);
        assert_eq!(classify(0.099_999).0, HolderTier::Small);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(classify(0.0).0, HolderTier::Small);
        assert_eq!(classify(-3.0).0, HolderTier::Small);
        assert_eq!(classify(f64::NAN).0, HolderTier::Small);
        assert_eq!(classify(250.0).0, HolderTier::Mega);
    }

    #[test]
    fn test_gating_scale_is_separate() {
        assert_eq!(classify_for_gating(1.0), HolderTier::Mega);
        assert_eq!(classify_for_gating(0.1), HolderTier::Whale);
        assert_eq!(classify_for_gating(0.01), HolderTier::Holder);
        assert_eq!(classify_for_gating(0.009), HolderTier::Small);

        // Same share, different tier per scale
        assert_eq!(classify(1.0).0, HolderTier::Whale);
        assert_eq!(classify_for_gating(1.0), HolderTier::Mega);
    }

    #[test]
    fn test_tier_tags() {
        assert_eq!("whale".parse::<HolderTier>().unwrap(), HolderTier::Whale);
        assert!("WHALE".parse::<HolderTier>().is_err());
        assert_eq!(HolderTier::Holder.to_string(), "holder");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(HolderTier::Mega.at_least(HolderTier::Holder));
        assert!(HolderTier::Holder.at_least(HolderTier::Holder));
        assert!(!HolderTier::Small.at_least(HolderTier::Holder));
    }

    #[test]
    fn test_supply_percent() {
        assert_eq!(supply_percent(50, 1_000), 5.0);
        assert_eq!(supply_percent(0, 1_000), 0.0);
        assert_eq!(supply_percent(10, 0), 0.0);
    }
}
