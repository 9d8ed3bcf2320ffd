//! Deletion planning - pure functions for deciding what to delete
//!
//! No I/O happens here - the merged-branch listing is fetched by the caller
//! and passed in, making it easy to unit test.

use std::collections::HashSet;

/// Branches to delete, after the keep-list has been applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePlan {
    /// Branches to delete, in candidate order, without duplicates
    pub branches: Vec<String>,
    /// Candidates left alone because they are on the keep-list
    pub kept: Vec<String>,
}

impl DeletePlan {
    /// Check if there is nothing to delete
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// Create a deletion plan (PURE - no I/O, easily testable)
///
/// # Arguments
/// * `explicit` - Branches named by the user
/// * `merged` - Merged branches; used only when `explicit` is empty.
///   `None` when merged branches were not requested.
/// * `keep` - Branches that must survive
#[must_use]
pub fn create_delete_plan(
    explicit: &[String],
    merged: Option<&[String]>,
    keep: &[String],
) -> DeletePlan {
    let candidates = match merged {
        Some(merged) if explicit.is_empty() => merged,
        _ => explicit,
    };

    let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut plan = DeletePlan::default();

    for branch in candidates {
        if !seen.insert(branch.as_str()) {
            continue;
        }
        if keep.contains(branch.as_str()) {
            plan.kept.push(branch.clone());
        } else {
            plan.branches.push(branch.clone());
        }
    }

    plan
}
