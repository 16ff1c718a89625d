//! Curate CLI
//!
//! Evaluates karma, verification, moderation and ban decisions from the
//! command line and prints them as JSON.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use curate_chat::ChatGate;
use curate_core::{
    assess_asset, classify, classify_for_gating, evaluate, reward_for_tag, should_hide_tag,
    supply_percent, AssetStatus, KarmaAction, PolicyConfig, RewardSplit, VoteSignal, Warning,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "curate")]
#[command(version)]
#[command(about = "Curate - karma, verification and moderation decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Policy file (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Supply share given directly or as raw balance over total supply
#[derive(clap::Args)]
struct Share {
    /// Percent of total supply (0-100)
    #[arg(long, allow_negative_numbers = true, conflicts_with_all = ["balance", "supply"])]
    percent: Option<f64>,

    /// Raw wallet balance
    #[arg(long, requires = "supply")]
    balance: Option<u128>,

    /// Raw total supply
    #[arg(long, requires = "balance")]
    supply: Option<u128>,
}

impl Share {
    fn percent(&self) -> f64 {
        match (self.percent, self.balance, self.supply) {
            (Some(p), _, _) => p,
            (None, Some(balance), Some(supply)) => supply_percent(balance, supply),
            _ => 0.0,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a wallet on the karma scale
    Classify {
        #[command(flatten)]
        share: Share,
    },

    /// Classify a wallet on the chat-gating scale and check admission
    ChatTier {
        #[command(flatten)]
        share: Share,
    },

    /// Karma for an action
    Reward {
        /// add_asset, upvote or report (unknown tags earn nothing)
        #[arg(short, long)]
        action: String,

        #[command(flatten)]
        share: Share,

        /// Deferred 75% instead of the immediate 25%
        #[arg(long)]
        deferred: bool,
    },

    /// Verification status earned by a vote tally
    Verify {
        /// Supply weight of voters, percent
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        weight: f64,

        /// Distinct voters
        #[arg(long, default_value = "0")]
        voters: u64,
    },

    /// Whether reports hide an asset
    Hide {
        /// Current status: pending, backed or verified
        #[arg(short, long)]
        status: String,

        /// Supply weight of reporters, percent
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        weight: f64,

        /// Distinct reporters
        #[arg(long, default_value = "0")]
        reporters: u64,
    },

    /// Apply a full tally to a stored status
    Assess {
        /// Stored status
        #[arg(short, long, default_value = "pending")]
        previous: String,

        #[arg(long, default_value = "0")]
        weight: f64,

        #[arg(long, default_value = "0")]
        voters: u64,

        #[arg(long, default_value = "0")]
        report_weight: f64,

        #[arg(long, default_value = "0")]
        reporters: u64,
    },

    /// Ban recommendation for a wallet
    Ban {
        /// Current karma balance
        #[arg(short, long, allow_negative_numbers = true)]
        karma: f64,

        /// JSON array of {"timestamp", "reason"} warnings
        #[arg(short, long)]
        warnings: PathBuf,

        /// Evaluation time (RFC 3339), defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Print the effective policy
    Config,
}

fn init_logging(verbose: bool, default_level: &str) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false),
        )
        .init();
}

fn load_policy(path: Option<&PathBuf>) -> anyhow::Result<PolicyConfig> {
    match path {
        Some(path) => PolicyConfig::load(path)
            .with_context(|| format!("loading policy from {}", path.display())),
        None => Ok(PolicyConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let policy = load_policy(cli.config.as_ref())?;
    init_logging(cli.verbose, &policy.logging.level);

    match cli.command {
        Commands::Classify { share } => {
            let percent = share.percent();
            let (tier, multiplier) = classify(percent);
            print_json(&serde_json::json!({
                "percent": percent,
                "tier": tier,
                "multiplier": multiplier,
            }))?;
        }

        Commands::ChatTier { share } => {
            let percent = share.percent();
            let gate = ChatGate::new(policy.chat.clone());
            print_json(&serde_json::json!({
                "percent": percent,
                "tier": classify_for_gating(percent),
                "required": gate.policy().min_tier,
                "decision": gate.check("cli", percent),
            }))?;
        }

        Commands::Reward {
            action,
            share,
            deferred,
        } => {
            let percent = share.percent();
            let amount = reward_for_tag(&action, percent, !deferred);
            let split = action
                .parse::<KarmaAction>()
                .ok()
                .map(|a| RewardSplit::for_action(a, percent));
            print_json(&serde_json::json!({
                "action": action,
                "immediate": !deferred,
                "amount": amount,
                "split": split,
            }))?;
        }

        Commands::Verify { weight, voters } => {
            print_json(&serde_json::json!({ "status": evaluate(weight, voters) }))?;
        }

        Commands::Hide {
            status,
            weight,
            reporters,
        } => {
            let hide = should_hide_tag(&status, weight, reporters)?;
            print_json(&serde_json::json!({ "status": status, "hide": hide }))?;
        }

        Commands::Assess {
            previous,
            weight,
            voters,
            report_weight,
            reporters,
        } => {
            let previous: AssetStatus = previous.parse()?;
            let signal = VoteSignal {
                supply_weight_percent: weight,
                voter_count: voters,
                report_weight_percent: report_weight,
                reporter_count: reporters,
            };
            print_json(&assess_asset(previous, &signal))?;
        }

        Commands::Ban {
            karma,
            warnings,
            now,
        } => {
            let content = std::fs::read_to_string(&warnings)
                .with_context(|| format!("reading warnings from {}", warnings.display()))?;
            let log: Vec<Warning> = serde_json::from_str(&content)?;
            let now = now.unwrap_or_else(Utc::now);
            let decision = policy.ban.evaluate(karma, &log, now);
            let displayed = policy.ban.displayed_warnings(&log, now);
            print_json(&serde_json::json!({
                "decision": decision,
                "displayedWarnings": displayed,
            }))?;
        }

        Commands::Config => {
            print!("{}", policy.to_toml_string()?);
        }
    }

    Ok(())
}
