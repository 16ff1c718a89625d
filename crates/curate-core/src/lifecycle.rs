//! Asset lifecycle: applies a fresh vote/report tally to a stored status.

use crate::moderation::should_hide;
use crate::verification::{evaluate, next_status, AssetStatus};
use serde::{Deserialize, Serialize};

/// Community signal accumulated for one asset
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteSignal {
    /// Supply weight of upvoters, percent
    pub supply_weight_percent: f64,
    /// Distinct upvoters
    pub voter_count: u64,
    /// Supply weight of reporters, percent
    pub report_weight_percent: f64,
    /// Distinct reporters
    pub reporter_count: u64,
}

/// Outcome of one assessment, for the caller to persist
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAssessment {
    /// Status after applying the tally, never below the previous one
    pub status: AssetStatus,
    /// Status moved up during this assessment
    pub promoted: bool,
    /// Reports hide the asset
    pub hidden: bool,
    /// Asset just became verified; deferred karma is now payable
    pub deferred_payout_due: bool,
}

/// Assess an asset whose stored status is `previous`
///
/// Hiding is judged against `previous`, the status the asset held while
/// the reports were filed.
pub fn assess_asset(previous: AssetStatus, signal: &VoteSignal) -> AssetAssessment {
    let evaluated = evaluate(signal.supply_weight_percent, signal.voter_count);
    let status = next_status(previous, evaluated);
    let promoted = status > previous;
    let hidden = should_hide(previous, signal.report_weight_percent, signal.reporter_count);
    let deferred_payout_due = promoted && status == AssetStatus::Verified;

    if promoted {
        tracing::info!(from = %previous, to = %status, "asset promoted");
    }

    AssetAssessment {
        status,
        promoted,
        hidden,
        deferred_payout_due,
    }
}
