//! Post-merge hook execution

use crate::process::{ProcessCommand, ProcessRunner};
use crate::types::MergeFailure;
use tracing::debug;

/// Prefix of the stdout recorded for a failed hook
pub const HOOK_FAILED_PREFIX: &str = "Hook failed: ";

/// Run `hook` through the shell for `branch`.
///
/// A non-zero exit or a launch failure rejects the branch.
pub async fn run_hook(
    runner: &dyn ProcessRunner,
    branch: &str,
    hook: &str,
) -> Result<(), MergeFailure> {
    let command = ProcessCommand::shell(hook);
    let reason = match runner.run(&command).await {
        Ok(output) if output.success() => return Ok(()),
        Ok(output) => output.code.map_or_else(
            || "hook terminated by signal".to_string(),
            |code| format!("hook exited with code {code}"),
        ),
        Err(e) => e.to_string(),
    };

    debug!(branch, hook, %reason, "hook rejected merge");
    Err(MergeFailure::new(
        branch,
        format!("{HOOK_FAILED_PREFIX}{hook}"),
        reason,
    ))
}
