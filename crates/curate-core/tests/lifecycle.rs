//! End-to-end scenarios across the decision modules

use chrono::{Duration, TimeZone, Utc};
use curate_core::prelude::*;
use curate_core::{supply_percent, RewardSplit};

mod verification_tests {
    use super::*;

    #[test]
    fn test_documented_evaluations() {
        assert_eq!(evaluate(5.0, 0), AssetStatus::Verified);
        assert_eq!(evaluate(4.999, 9), AssetStatus::Backed);
        assert_eq!(evaluate(0.5, 0), AssetStatus::Backed);
        assert_eq!(evaluate(0.1, 4), AssetStatus::Pending);
    }

    #[test]
    fn test_documented_hides() {
        assert!(!should_hide(AssetStatus::Verified, 9.999, 14));
        assert!(should_hide(AssetStatus::Verified, 10.0, 0));
        assert!(should_hide(AssetStatus::Pending, 0.0, 3));
    }

    #[test]
    fn test_asset_from_submission_to_verification() {
        let total_supply: u128 = 1_000_000;

        // Whale submits: 100 x 2.0 = 200 karma, 50 now
        let submitter = supply_percent(20_000, total_supply);
        let split = RewardSplit::for_action(KarmaAction::AddAsset, submitter);
        assert_eq!(split.tier, HolderTier::Whale);
        assert_eq!(split.immediate, 50.0);

        // Six small voters back it
        let mut status = AssetStatus::Pending;
        let backed = assess_asset(
            status,
            &VoteSignal {
                supply_weight_percent: 0.2,
                voter_count: 6,
                ..Default::default()
            },
        );
        assert_eq!(backed.status, AssetStatus::Backed);
        assert!(!backed.deferred_payout_due);
        status = backed.status;

        // A mega holder pushes it over 5%
        let verified = assess_asset(
            status,
            &VoteSignal {
                supply_weight_percent: 6.2,
                voter_count: 7,
                ..Default::default()
            },
        );
        assert_eq!(verified.status, AssetStatus::Verified);
        assert!(verified.deferred_payout_due);
        assert_eq!(reward(KarmaAction::AddAsset, submitter, false), 150.0);
    }
}

mod ban_tests {
    use super::*;

    fn warnings_at(days: &[i64]) -> (chrono::DateTime<Utc>, Vec<Warning>) {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let warnings = days
            .iter()
            .map(|d| Warning::new(now - Duration::days(*d), "low quality submission"))
            .collect();
        (now, warnings)
    }

    #[test]
    fn test_zero_karma_recent_warnings() {
        let (now, warnings) = warnings_at(&[89, 89]);
        let decision = evaluate_ban_at(0.0, &warnings, now);
        assert!(decision.should_ban);
        assert!(decision.reason.unwrap().contains("Zero karma"));
    }

    #[test]
    fn test_old_warning_does_not_count() {
        let (now, warnings) = warnings_at(&[91, 1]);
        assert!(!evaluate_ban_at(0.0, &warnings, now).should_ban);
    }

    #[test]
    fn test_positive_karma_three_warnings() {
        let (now, warnings) = warnings_at(&[5, 30, 60]);
        assert!(evaluate_ban_at(50.0, &warnings, now).should_ban);
    }

    #[test]
    fn test_recent_warnings_ban_now() {
        let now = Utc::now();
        let warnings = vec![
            Warning::new(now - Duration::hours(1), "spam"),
            Warning::new(now - Duration::hours(2), "spam"),
            Warning::new(now - Duration::hours(3), "spam"),
        ];
        assert!(evaluate_ban(100.0, &warnings).should_ban);
    }

    #[test]
    fn test_warning_json_shape() {
        let json = r#"[{"timestamp":"2025-01-10T00:00:00Z","reason":"spam"}]"#;
        let warnings: Vec<Warning> = serde_json::from_str(json).unwrap();
        assert_eq!(warnings[0].reason, "spam");
    }
}
