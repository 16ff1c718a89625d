//! Property tests for the pure decision functions

use curate_core::prelude::*;
use curate_core::{classify_for_gating, should_hide_tag};
use proptest::prelude::*;

fn any_action() -> impl Strategy<Value = KarmaAction> {
    prop_oneof![
        Just(KarmaAction::AddAsset),
        Just(KarmaAction::Upvote),
        Just(KarmaAction::Report),
    ]
}

fn any_status() -> impl Strategy<Value = AssetStatus> {
    prop_oneof![
        Just(AssetStatus::Pending),
        Just(AssetStatus::Backed),
        Just(AssetStatus::Verified),
    ]
}

proptest! {
    #[test]
    fn prop_tier_never_rises_as_share_falls(a in -10.0f64..150.0, b in -10.0f64..150.0) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(classify(hi).0.rank() >= classify(lo).0.rank());
        prop_assert!(classify_for_gating(hi).rank() >= classify_for_gating(lo).rank());
    }

    #[test]
    fn prop_reward_split_sums_to_total(action in any_action(), percent in -1.0f64..120.0) {
        let (_, multiplier) = classify(percent);
        let total = action.base_points() * multiplier;
        prop_assert_eq!(reward(action, percent, true) + reward(action, percent, false), total);
    }

    #[test]
    fn prop_evaluate_is_idempotent(weight in 0.0f64..20.0, voters in 0u64..30) {
        prop_assert_eq!(evaluate(weight, voters), evaluate(weight, voters));
    }

    #[test]
    fn prop_more_votes_never_lower_status(weight in 0.0f64..20.0, voters in 0u64..30, extra in 0u64..10) {
        prop_assert!(evaluate(weight, voters + extra) >= evaluate(weight, voters));
    }

    #[test]
    fn prop_should_hide_is_idempotent(status in any_status(), weight in 0.0f64..20.0, reporters in 0u64..30) {
        prop_assert_eq!(should_hide(status, weight, reporters), should_hide(status, weight, reporters));
    }

    #[test]
    fn prop_trusted_assets_are_harder_to_hide(weight in 0.0f64..20.0, reporters in 0u64..30) {
        if should_hide(AssetStatus::Verified, weight, reporters) {
            prop_assert!(should_hide(AssetStatus::Backed, weight, reporters));
        }
        if should_hide(AssetStatus::Backed, weight, reporters) {
            prop_assert!(should_hide(AssetStatus::Pending, weight, reporters));
        }
    }

    #[test]
    fn prop_next_status_is_max(prev in any_status(), new in any_status()) {
        let next = next_status(prev, new);
        prop_assert!(next >= prev && next >= new);
    }

    #[test]
    fn prop_tag_and_enum_agree(status in any_status(), weight in 0.0f64..20.0, reporters in 0u64..30) {
        prop_assert_eq!(
            should_hide_tag(status.name(), weight, reporters).unwrap(),
            should_hide(status, weight, reporters)
        );
    }
}
