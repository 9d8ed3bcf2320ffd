//! Bulk branch deletion
//!
//! Two-phase pattern matching merge/:
//! 1. Plan - resolve candidates and subtract the keep-list (pure, testable)
//! 2. Execute - delete each branch, skipping the ones git refuses (effectful)

mod execute;
mod plan;

pub use execute::{delete_branches, execute_delete, plan_for};
pub use plan::{DeletePlan, create_delete_plan};
