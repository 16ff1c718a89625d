//! # Curate Chat
//!
//! Admission control for the token-gated chat. A wallet may post when its
//! share of supply reaches the configured tier on the chat-gating scale and
//! it has not exhausted its per-window message budget.
//!
//! The limiter keeps its state in a concurrent map that any number of
//! request handlers can share; stale timestamps are evicted on every check
//! and idle wallets are dropped by [`SlidingWindowLimiter::evict_expired`].

pub mod error;
pub mod gate;
pub mod limiter;

pub use error::{ChatError, Result};
pub use gate::{ChatDecision, ChatGate};
pub use limiter::{LimitResult, SlidingWindowLimiter};
