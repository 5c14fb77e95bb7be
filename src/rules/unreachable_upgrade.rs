//! Unreachable upgrade detection rule.
//!
//! An upgrade is reachable only through a unit that can research it (or a
//! direct script reference); everything else is dead research.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, ObjectId, ObjectKind, TrackedSets},
    issues::{ObjectContext, UnreachableUpgradeIssue},
};

pub fn check_unreachable_upgrades_issues(ctx: &CheckContext) -> Vec<UnreachableUpgradeIssue> {
    check_unreachable_upgrades(ctx.catalog(), ctx.unreached(), &ctx.allowed_ids())
}

/// Check for unreachable upgrades. Sorted by fourcc.
pub fn check_unreachable_upgrades(
    catalog: &Catalog,
    unreached: &TrackedSets,
    allowed: &HashSet<ObjectId>,
) -> Vec<UnreachableUpgradeIssue> {
    let mut issues: Vec<UnreachableUpgradeIssue> = unreached
        .upgrades
        .iter()
        .filter(|id| !allowed.contains(id))
        .filter_map(|&id| catalog.upgrade(id))
        .map(|upgrade| UnreachableUpgradeIssue {
            context: ObjectContext::new(upgrade.id, upgrade.label(), ObjectKind::Upgrade),
        })
        .collect();

    issues.sort_by(|a, b| a.context.fourcc.cmp(&b.context.fourcc));
    issues
}
