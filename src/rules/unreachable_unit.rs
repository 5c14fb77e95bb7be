//! Unreachable unit detection rule.
//!
//! Reports every unit that survived the sweep: no pre-placed instance,
//! no script reference, and no chain of training, construction, sales,
//! summons, or morphs leads to it.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, ObjectId, ObjectKind, TrackedSets},
    issues::{ObjectContext, UnreachableUnitIssue},
};

pub fn check_unreachable_units_issues(ctx: &CheckContext) -> Vec<UnreachableUnitIssue> {
    check_unreachable_units(ctx.catalog(), ctx.unreached(), &ctx.allowed_ids())
}

/// Check for unreachable units.
///
/// # Arguments
/// * `catalog` - The full content catalog
/// * `unreached` - The sweep result
/// * `allowed` - Ids excluded from reporting by configuration
///
/// # Returns
/// Vector of `UnreachableUnitIssue`, sorted by fourcc.
pub fn check_unreachable_units(
    catalog: &Catalog,
    unreached: &TrackedSets,
    allowed: &HashSet<ObjectId>,
) -> Vec<UnreachableUnitIssue> {
    let mut issues: Vec<UnreachableUnitIssue> = unreached
        .units
        .iter()
        .filter(|id| !allowed.contains(id))
        .filter_map(|&id| catalog.unit(id))
        .map(|unit| UnreachableUnitIssue {
            context: ObjectContext::new(unit.id, unit.label(), ObjectKind::Unit),
        })
        .collect();

    issues.sort_by(|a, b| a.context.fourcc.cmp(&b.context.fourcc));
    issues
}
