//! git-delete-branches - delete local branches in bulk

use anstream::eprintln;
use anyhow::Context;
use clap::Parser;
use git_chores::cli::style::Stylize;
use git_chores::cli::{self, DeleteCommandOptions};
use git_chores::types::DeleteRequest;
use std::process::ExitCode;

/// Delete local branches, named or all merged, except the ones to keep
#[derive(Debug, Parser)]
#[command(name = "git-delete-branches", version)]
struct Args {
    /// Branches to delete
    #[arg(value_name = "BRANCH")]
    branches: Vec<String>,

    /// Work tree path
    #[arg(long, value_name = "PATH")]
    work_dir: Option<String>,

    /// All local merged branches (when no branch is named)
    #[arg(long)]
    merged: bool,

    /// Force branch deletion (even if not merged)
    #[arg(long)]
    force: bool,

    /// Do not delete these branches
    #[arg(long, value_name = "BRANCH", num_args = 1..)]
    keep: Vec<String>,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Preview the branches and ask before deleting
    #[arg(long, conflicts_with = "dry_run")]
    confirm: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let request = DeleteRequest {
        branches: args.branches,
        include_merged: args.merged,
        force: args.force,
        keep: args.keep,
    };
    let options = DeleteCommandOptions {
        work_dir: args.work_dir,
        dry_run: args.dry_run,
        confirm: args.confirm,
    };

    cli::run_delete(&request, options)
        .await
        .context("branch deletion aborted")?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
