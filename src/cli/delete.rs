//! Delete command - remove local branches in bulk

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, arrow, check};
use crate::delete::{DeletePlan, execute_delete, plan_for};
use crate::error::{Error, Result};
use crate::types::{DeleteRequest, DeleteResult};
use anstream::println;
use dialoguer::Confirm;

/// Options for the delete command
#[derive(Debug, Clone, Default)]
pub struct DeleteCommandOptions {
    /// Directory to run in (`~` expanded)
    pub work_dir: Option<String>,
    /// Show what would be deleted without deleting
    pub dry_run: bool,
    /// Preview the plan and prompt for confirmation before deleting
    pub confirm: bool,
}

/// Run the delete command
///
/// Branches git refuses to delete are skipped without being reported.
pub async fn run_delete(
    request: &DeleteRequest,
    options: DeleteCommandOptions,
) -> Result<DeleteResult> {
    let ctx = CommandContext::new(options.work_dir.as_deref(), None)?;

    let plan = plan_for(&ctx.git, request).await?;

    if plan.is_empty() {
        println!("{}", "No branches to delete.".muted());
        return Ok(DeleteResult::default());
    }

    if options.dry_run {
        print_delete_preview(&plan, request.force);
        println!("{}", "Run without --dry-run to delete.".muted());
        return Ok(DeleteResult::default());
    }

    if options.confirm {
        print_delete_preview(&plan, request.force);
        if !Confirm::new()
            .with_prompt("Delete these branches?")
            .default(false)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("{}", "Aborted".muted());
            return Ok(DeleteResult::default());
        }
        println!();
    }

    let result = execute_delete(&ctx.git, &plan, request.force, &CliProgress::compact()).await;

    println!(
        "{} {}",
        format!("{} Deleted", check()).success(),
        format!("{} branch(es)", result.deleted.len()).accent()
    );

    Ok(result)
}

/// Print the deletion plan (dry run / confirmation)
fn print_delete_preview(plan: &DeletePlan, force: bool) {
    let heading = if force { "Force delete plan" } else { "Delete plan" };
    println!("{}:", heading.emphasis());
    println!();
    for branch in &plan.branches {
        println!("  {} {}", arrow(), branch.accent());
    }
    if !plan.kept.is_empty() {
        println!();
        println!("  {} {}", "Keeping:".muted(), plan.kept.join(", ").muted());
    }
    println!();
}
