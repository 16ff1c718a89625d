//! # Report Moderation
//!
//! Reports hide an asset once either the reporters' supply weight or their
//! head count crosses the row selected by the asset's current status. The
//! more trusted the asset, the more signal it takes:
//!
//! | Current status | Report weight | Distinct reporters |
//! |----------------|---------------|--------------------|
//! | pending        | >= 2%         | >= 3               |
//! | backed         | >= 5%         | >= 8               |
//! | verified       | >= 10%        | >= 15              |

use crate::error::Result;
use crate::verification::{AssetStatus, Thresholds};

/// Thresholds for hiding an asset that currently has `status`
pub fn hidden_thresholds(status: AssetStatus) -> Thresholds {
    match status {
        AssetStatus::Pending => Thresholds::new(2.0, 3),
        AssetStatus::Backed => Thresholds::new(5.0, 8),
        AssetStatus::Verified => Thresholds::new(10.0, 15),
    }
}

/// Decide whether reports are strong enough to hide the asset
pub fn should_hide(current: AssetStatus, report_weight_percent: f64, reporter_count: u64) -> bool {
    let hide = hidden_thresholds(current).is_met(report_weight_percent, reporter_count);
    tracing::debug!(
        status = %current,
        report_weight_percent,
        reporter_count,
        hide,
        "evaluated hide"
    );
    hide
}

/// Like [`should_hide`] but takes a raw status tag
///
/// Unknown tags are rejected; there is no fallback row.
pub fn should_hide_tag(
    status: &str,
    report_weight_percent: f64,
    reporter_count: u64,
) -> Result<bool> {
    let current: AssetStatus = status.parse()?;
    Ok(should_hide(current, report_weight_percent, reporter_count))
}
