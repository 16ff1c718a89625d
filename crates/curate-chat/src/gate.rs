//! Tier gate in front of the chat limiter

use crate::error::{ChatError, Result};
use crate::limiter::{LimitResult, SlidingWindowLimiter};
use chrono::{DateTime, Utc};
use curate_core::{classify_for_gating, ChatPolicy, HolderTier};
use serde::Serialize;

/// Admission decision for one message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ChatDecision {
    Allowed { tier: HolderTier, remaining: u32 },
    TierTooLow { tier: HolderTier, required: HolderTier },
    Limited { tier: HolderTier, retry_after_secs: u64 },
}

impl ChatDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Token-gated, rate-limited chat admission
pub struct ChatGate {
    policy: ChatPolicy,
    limiter: SlidingWindowLimiter,
}

impl ChatGate {
    pub fn new(policy: ChatPolicy) -> Self {
        let limiter = SlidingWindowLimiter::from_secs(policy.max_messages, policy.window_seconds);
        Self { policy, limiter }
    }

    /// Decide whether `wallet`, holding `supply_percent` of supply, may post at `now`
    ///
    /// Wallets below the required tier never touch the limiter.
    pub fn check_at(&self, wallet: &str, supply_percent: f64, now: DateTime<Utc>) -> ChatDecision {
        let tier = classify_for_gating(supply_percent);
        let required = self.policy.min_tier;
        if !tier.at_least(required) {
            tracing::debug!(wallet, %tier, %required, "chat tier too low");
            return ChatDecision::TierTooLow { tier, required };
        }

        match self.limiter.check_at(wallet, now) {
            LimitResult::Allowed { remaining } => ChatDecision::Allowed { tier, remaining },
            LimitResult::Limited {
                retry_after_secs, ..
            } => {
                tracing::warn!(wallet, retry_after_secs, "chat rate limit hit");
                ChatDecision::Limited {
                    tier,
                    retry_after_secs,
                }
            }
        }
    }

    /// Like [`ChatGate::check_at`] at the current time
    pub fn check(&self, wallet: &str, supply_percent: f64) -> ChatDecision {
        self.check_at(wallet, supply_percent, Utc::now())
    }

    /// Admit a message or explain the refusal, returning the remaining budget
    pub fn admit_at(&self, wallet: &str, supply_percent: f64, now: DateTime<Utc>) -> Result<u32> {
        match self.check_at(wallet, supply_percent, now) {
            ChatDecision::Allowed { remaining, .. } => Ok(remaining),
            ChatDecision::TierTooLow { tier, required } => {
                Err(ChatError::TierTooLow { tier, required })
            }
            ChatDecision::Limited {
                retry_after_secs, ..
            } => Err(ChatError::RateLimitExceeded {
                limit: self.policy.max_messages,
                retry_after_secs,
            }),
        }
    }

    /// Periodic sweep of idle wallets
    pub fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        self.limiter.evict_expired(now)
    }

    pub fn policy(&self) -> &ChatPolicy {
        &self.policy
    }
}

impl Default for ChatGate {
    fn default() -> Self {
        Self::new(ChatPolicy::default())
    }
}
