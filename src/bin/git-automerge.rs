//! git-automerge - merge branches into the current branch one at a time
//!
//! Each branch is merged without committing, submodules are updated, an
//! optional hook runs, and the result is committed. A branch that fails is
//! rolled back and reported at the end.

use anstream::eprintln;
use anyhow::Context;
use clap::Parser;
use git_chores::cli::style::Stylize;
use git_chores::cli::{self, MergeCommandOptions};
use std::ffi::OsString;
use std::process::ExitCode;

/// Merge branches into the current branch one at a time, rolling back failures
#[derive(Debug, Parser)]
#[command(name = "git-automerge", version)]
struct Args {
    /// Branches to merge, in order
    #[arg(value_name = "BRANCH")]
    branches: Vec<String>,

    /// Work tree path
    #[arg(long, value_name = "PATH")]
    work_dir: Option<String>,

    /// Execute hook after merge, before committing
    #[arg(long, value_name = "COMMAND")]
    hook: Option<String>,

    /// Reject a branch whose merge produces no changes
    #[arg(long)]
    no_merge: bool,

    /// Specifies remote repository name
    #[arg(short, long, value_name = "NAME", default_value = "origin")]
    remote: String,

    /// Merges local branches only (also accepted as -nr)
    #[arg(long, conflicts_with = "remote")]
    no_remote: bool,

    /// Push the current branch to the remote after merging
    #[arg(long, conflicts_with = "no_remote")]
    push: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Accept the historical `-nr` spelling of `--no-remote`
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == "-nr" {
                OsString::from("--no-remote")
            } else {
                arg
            }
        })
        .collect()
}

async fn run(args: Args) -> anyhow::Result<bool> {
    let options = MergeCommandOptions {
        work_dir: args.work_dir,
        remote: (!args.no_remote).then_some(args.remote),
        hook: args.hook,
        skip_merge: args.no_merge,
        push: args.push,
    };

    let result = cli::run_merge(&args.branches, options)
        .await
        .context("merge run aborted")?;

    Ok(result.is_success())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    cli::init_tracing(args.verbose);

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
