//! Command-line layer shared by the `git-automerge` and
//! `git-delete-branches` binaries

pub mod context;
pub mod delete;
pub mod merge;
pub mod style;

pub use context::CommandContext;
pub use delete::{DeleteCommandOptions, run_delete};
pub use merge::{MergeCommandOptions, format_rejected_report, run_merge};

use crate::progress::ProgressCallback;
use crate::types::{MergeFailure, MergeOutcome};
use anstream::{eprintln, println};
use async_trait::async_trait;
use style::{Stylize, check, cross};
use tracing_subscriber::EnvFilter;

/// Initialise logging to stderr.
///
/// `RUST_LOG` takes precedence over the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("git_chores={level}")));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Progress callback that prints to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct CliProgress;

impl CliProgress {
    /// One line per event
    pub const fn compact() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_merge_started(&self, branch: &str) {
        println!("Merging {}", branch.accent());
    }

    async fn on_hook_started(&self, _branch: &str, hook: &str) {
        println!("\tExecuting {}", hook.emphasis());
    }

    async fn on_merged(&self, _branch: &str, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::Committed => println!("\t{} committed", check()),
            MergeOutcome::Unchanged => println!("\t{}", "nothing to commit".muted()),
        }
    }

    async fn on_merge_failed(&self, failure: &MergeFailure) {
        eprintln!("\t{} Failed to merge {}", cross(), failure.branch.warn());
    }

    async fn on_branch_deleted(&self, branch: &str) {
        println!("{} Deleted {}", check(), branch.accent());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
