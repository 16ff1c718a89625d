//! # Asset Verification
//!
//! Positive community signal moves an asset from `pending` to `backed` to
//! `verified`. Either condition of a row is enough:
//!
//! | Target   | Supply weight | Distinct voters |
//! |----------|---------------|-----------------|
//! | verified | >= 5.0%       | >= 10           |
//! | backed   | >= 0.5%       | >= 5            |
//!
//! [`evaluate`] has no memory of the previous status. Callers that must not
//! downgrade an asset combine its result with [`next_status`].

use crate::error::CurateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verification status, ordered pending < backed < verified
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Newly submitted
    #[default]
    Pending,
    /// Some community backing
    Backed,
    /// Fully verified
    Verified,
}

impl AssetStatus {
    /// Get status tag
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Backed => "backed",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetStatus {
    type Err = CurateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "backed" => Ok(Self::Backed),
            "verified" => Ok(Self::Verified),
            other => Err(CurateError::UnknownStatus(other.to_string())),
        }
    }
}

/// Dual-signal threshold: supply weight OR head count
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum share of total supply, percent
    pub min_supply_percent: f64,
    /// Minimum number of distinct participants
    pub min_count: u64,
}

impl Thresholds {
    pub const fn new(min_supply_percent: f64, min_count: u64) -> Self {
        Self {
            min_supply_percent,
            min_count,
        }
    }

    /// True if either signal reaches its bound
    pub fn is_met(&self, supply_percent: f64, count: u64) -> bool {
        supply_percent >= self.min_supply_percent || count >= self.min_count
    }
}

/// Signal required to reach `verified`
pub const VERIFIED_THRESHOLDS: Thresholds = Thresholds::new(5.0, 10);

/// Signal required to reach `backed`
pub const BACKED_THRESHOLDS: Thresholds = Thresholds::new(0.5, 5);

/// Evaluate the status earned by the current vote tally
pub fn evaluate(supply_weight_percent: f64, voter_count: u64) -> AssetStatus {
    let status = if VERIFIED_THRESHOLDS.is_met(supply_weight_percent, voter_count) {
        AssetStatus::Verified
    } else if BACKED_THRESHOLDS.is_met(supply_weight_percent, voter_count) {
        AssetStatus::Backed
    } else {
        AssetStatus::Pending
    };

    tracing::debug!(
        supply_weight_percent,
        voter_count,
        %status,
        "evaluated verification status"
    );
    status
}

/// Combine a stored status with a fresh evaluation without regressing
pub fn next_status(previous: AssetStatus, evaluated: AssetStatus) -> AssetStatus {
    previous.max(evaluated)
}
