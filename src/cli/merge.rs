//! Merge command - merge branches one after another

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::Stylize;
use crate::error::Result;
use crate::merge::merge_branches;
use crate::progress::ProgressCallback;
use crate::types::{MergeFailure, MergeOptions, MergeRunResult};
use anstream::eprint;
use std::fmt::Write as _;

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeCommandOptions {
    /// Directory to run in (`~` expanded)
    pub work_dir: Option<String>,
    /// Remote the branches are taken from; `None` merges local branches
    pub remote: Option<String>,
    /// Shell command run before each merge commit
    pub hook: Option<String>,
    /// Reject branches whose merge produces no changes
    pub skip_merge: bool,
    /// Push the current branch once at least one merge was committed
    pub push: bool,
}

/// Run the merge command
///
/// Rejected branches are reported on stderr before any push, so a failed
/// push never hides them. The caller decides the exit status from the
/// returned result.
pub async fn run_merge(branches: &[String], options: MergeCommandOptions) -> Result<MergeRunResult> {
    if branches.is_empty() {
        return Ok(MergeRunResult::default());
    }

    let ctx = CommandContext::new(options.work_dir.as_deref(), options.remote.clone())?;
    run_merge_in(&ctx, branches, &options, &CliProgress::compact()).await
}

/// Run the merge command inside an existing context
pub async fn run_merge_in(
    ctx: &CommandContext,
    branches: &[String],
    options: &MergeCommandOptions,
    progress: &dyn ProgressCallback,
) -> Result<MergeRunResult> {
    let merge_options = MergeOptions {
        hook: options.hook.clone(),
        skip_merge: options.skip_merge,
    };
    let result = merge_branches(&ctx.git, branches, &merge_options, progress).await?;

    if !result.failures.is_empty() {
        eprint!("{}", format_rejected_report(&result.failures));
    }

    if options.push && result.has_commits() {
        progress
            .on_message(&format!(
                "Pushing to {}",
                ctx.git.remote().unwrap_or_default().accent()
            ))
            .await;
        ctx.git.push().await?;
    }

    Ok(result)
}

/// Format the end-of-run summary of rejected branches
pub fn format_rejected_report(failures: &[MergeFailure]) -> String {
    let mut report = String::from("Rejected branches:\n");
    for failure in failures {
        let _ = writeln!(
            report,
            "\t{}, stdout: {:?}, stderr: {:?}",
            failure.branch, failure.stdout, failure.stderr
        );
    }
    report
}
