//! git-chores - sequential branch merging and bulk branch cleanup for git
//!
//! Two workflows share one git facade:
//! - [`merge`] merges a list of branches into the current branch one by one,
//!   optionally running a hook before each commit, and rolls the working tree
//!   back whenever a branch fails.
//! - [`delete`] deletes local branches (named, or every merged branch) while
//!   honouring a keep-list.
//!
//! All git access goes through [`process::ProcessRunner`], so the
//! orchestrators can be exercised without a real repository.

pub mod cli;
pub mod delete;
pub mod error;
pub mod git;
pub mod merge;
pub mod process;
pub mod progress;
pub mod types;
pub mod workdir;
