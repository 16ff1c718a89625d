//! # Ban Evaluation
//!
//! A wallet is recommended for a ban when
//! - its karma is zero or negative and it has 2+ active warnings, or
//! - it has 3+ active warnings, whatever its karma.
//!
//! A warning is active while it is younger than 90 days (strictly). The
//! 30-day display decay used by [`displayed_warnings`] is a separate window
//! and never affects ban eligibility.

use crate::constants::{
    BAN_WINDOW_DAYS, DISPLAY_DECAY_DAYS, WARNING_THRESHOLD, ZERO_KARMA_WARNING_THRESHOLD,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Moderation warning, immutable once recorded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// When the warning was issued
    pub timestamp: DateTime<Utc>,
    /// Moderator's reason
    pub reason: String,
}

impl Warning {
    pub fn new(timestamp: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            timestamp,
            reason: reason.into(),
        }
    }

    /// True if issued strictly after `now - window`
    ///
    /// A window reaching past the representable time range covers every warning.
    pub fn is_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match now.checked_sub_signed(window) {
            Some(cutoff) => self.timestamp > cutoff,
            None => window > Duration::zero(),
        }
    }
}

/// Ban recommendation, acted on by the caller
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanDecision {
    pub should_ban: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BanDecision {
    fn ban(reason: String) -> Self {
        Self {
            should_ban: true,
            reason: Some(reason),
        }
    }

    fn keep() -> Self {
        Self::default()
    }
}

/// Ban and warning-decay policy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanPolicy {
    /// Warnings younger than this count toward a ban
    #[serde(default = "default_active_window_days")]
    pub active_window_days: i64,

    /// Warnings younger than this are displayed
    #[serde(default = "default_display_decay_days")]
    pub display_decay_days: i64,

    /// Active warnings that ban a wallet with karma <= 0
    #[serde(default = "default_zero_karma_warning_threshold")]
    pub zero_karma_warning_threshold: usize,

    /// Active warnings that ban any wallet
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: usize,
}

fn default_active_window_days() -> i64 {
    BAN_WINDOW_DAYS
}

fn default_display_decay_days() -> i64 {
    DISPLAY_DECAY_DAYS
}

fn default_zero_karma_warning_threshold() -> usize {
    ZERO_KARMA_WARNING_THRESHOLD
}

fn default_warning_threshold() -> usize {
    WARNING_THRESHOLD
}

impl Default for BanPolicy {
    fn default() -> Self {
        Self {
            active_window_days: default_active_window_days(),
            display_decay_days: default_display_decay_days(),
            zero_karma_warning_threshold: default_zero_karma_warning_threshold(),
            warning_threshold: default_warning_threshold(),
        }
    }
}

impl BanPolicy {
    /// Window for ban eligibility, saturating on overflow
    pub fn active_window(&self) -> Duration {
        saturating_days(self.active_window_days)
    }

    /// Window for display decay, saturating on overflow
    pub fn display_window(&self) -> Duration {
        saturating_days(self.display_decay_days)
    }

    /// Warnings still shown to the wallet owner under this policy
    pub fn displayed_warnings<'a>(
        &self,
        warnings: &'a [Warning],
        now: DateTime<Utc>,
    ) -> Vec<&'a Warning> {
        active_warnings(warnings, now, self.display_window())
    }

    /// Evaluate a wallet against this policy at `now`
    pub fn evaluate(&self, karma: f64, warnings: &[Warning], now: DateTime<Utc>) -> BanDecision {
        let active = active_warnings(warnings, now, self.active_window()).len();

        let decision = if karma <= 0.0 && active >= self.zero_karma_warning_threshold {
            BanDecision::ban(format!(
                "Zero karma with {}+ warnings",
                self.zero_karma_warning_threshold
            ))
        } else if active >= self.warning_threshold {
            BanDecision::ban(format!("{}+ active warnings", self.warning_threshold))
        } else {
            BanDecision::keep()
        };

        if decision.should_ban {
            tracing::warn!(
                karma,
                active_warnings = active,
                reason = decision.reason.as_deref().unwrap_or_default(),
                "ban recommended"
            );
        } else {
            tracing::debug!(karma, active_warnings = active, "no ban");
        }
        decision
    }
}

fn saturating_days(days: i64) -> Duration {
    Duration::try_days(days).unwrap_or(if days < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// Warnings issued strictly within `window` of `now`
pub fn active_warnings(
    warnings: &[Warning],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<&Warning> {
    warnings.iter().filter(|w| w.is_within(now, window)).collect()
}

/// Warnings still shown to the wallet owner (default 30-day decay)
pub fn displayed_warnings(warnings: &[Warning], now: DateTime<Utc>) -> Vec<&Warning> {
    BanPolicy::default().displayed_warnings(warnings, now)
}

/// Evaluate a wallet with the default policy at an explicit time
pub fn evaluate_ban_at(karma: f64, warnings: &[Warning], now: DateTime<Utc>) -> BanDecision {
    BanPolicy::default().evaluate(karma, warnings, now)
}

/// Evaluate a wallet with the default policy now
pub fn evaluate_ban(karma: f64, warnings: &[Warning]) -> BanDecision {
    evaluate_ban_at(karma, warnings, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> Warning {
        Warning::new(now() - Duration::days(days), "spam")
    }

    #[test]
    fn test_zero_karma_two_warnings() {
        let decision = evaluate_ban_at(0.0, &[days_ago(89), days_ago(89)], now());
        assert!(decision.should_ban);
        assert_eq!(decision.reason.as_deref(), Some("Zero karma with 2+ warnings"));
    }

    #[test]
    fn test_expired_warning_ignored() {
        let decision = evaluate_ban_at(0.0, &[days_ago(91), days_ago(1)], now());
        assert!(!decision.should_ban);
        assert_eq!(decision.reason, None);
    }

    #[test]
    fn test_exactly_ninety_days_is_inactive() {
        let decision = evaluate_ban_at(-10.0, &[days_ago(90), days_ago(2)], now());
        assert!(!decision.should_ban);
    }

    #[test]
    fn test_three_warnings_ban_positive_karma() {
        let warnings = [days_ago(1), days_ago(40), days_ago(80)];
        let decision = evaluate_ban_at(50.0, &warnings, now());
        assert!(decision.should_ban);
        assert_eq!(decision.reason.as_deref(), Some("3+ active warnings"));
    }

    #[test]
    fn test_positive_karma_two_warnings_kept() {
        let decision = evaluate_ban_at(1.0, &[days_ago(1), days_ago(2)], now());
        assert!(!decision.should_ban);
    }

    #[test]
    fn test_negative_karma_three_warnings_reports_zero_karma_rule() {
        let warnings = [days_ago(1), days_ago(2), days_ago(3)];
        let decision = evaluate_ban_at(-5.0, &warnings, now());
        assert_eq!(decision.reason.as_deref(), Some("Zero karma with 2+ warnings"));
    }

    #[test]
    fn test_display_window_is_separate() {
        let warnings = [days_ago(45), days_ago(60)];
        assert!(displayed_warnings(&warnings, now()).is_empty());

        // Still count toward a ban
        assert!(evaluate_ban_at(0.0, &warnings, now()).should_ban);
    }

    #[test]
    fn test_custom_policy() {
        let policy = BanPolicy {
            warning_threshold: 5,
            ..Default::default()
        };
        let warnings = [days_ago(1), days_ago(2), days_ago(3)];
        assert!(!policy.evaluate(10.0, &warnings, now()).should_ban);
    }

    #[test]
    fn test_custom_display_window() {
        let policy = BanPolicy {
            display_decay_days: 10,
            ..Default::default()
        };
        let warnings = [days_ago(20)];
        assert!(policy.displayed_warnings(&warnings, now()).is_empty());
        assert_eq!(displayed_warnings(&warnings, now()).len(), 1);
    }

    #[test]
    fn test_oversized_window_does_not_panic() {
        let policy: BanPolicy =
            serde_json::from_str(r#"{"active_window_days": 9223372036854775807}"#).unwrap();
        let warnings = [days_ago(5_000), days_ago(1)];
        let decision = policy.evaluate(0.0, &warnings, now());
        assert!(decision.should_ban);
        assert_eq!(policy.evaluate(0.0, &[], now()), BanDecision::keep());
    }

    #[test]
    fn test_hugely_negative_window_covers_nothing() {
        let policy = BanPolicy {
            active_window_days: i64::MIN,
            ..Default::default()
        };
        assert!(!policy.evaluate(0.0, &[days_ago(1), days_ago(2)], now()).should_ban);
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&BanDecision::keep()).unwrap();
        assert_eq!(json, r#"{"shouldBan":false}"#);
    }
}
