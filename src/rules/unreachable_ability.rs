//! Unreachable ability detection rule.
//!
//! Abilities are reached through the units that carry them (or script
//! references). Unreachable abilities are reported as warnings rather than
//! errors: they are dead data, but unlike units and upgrades they cannot
//! strand gameplay content that other objects depend on being acquirable.

use std::collections::HashSet;

use crate::{
    core::{Catalog, CheckContext, ObjectId, ObjectKind, TrackedSets},
    issues::{ObjectContext, UnreachableAbilityIssue},
};

pub fn check_unreachable_abilities_issues(ctx: &CheckContext) -> Vec<UnreachableAbilityIssue> {
    check_unreachable_abilities(ctx.catalog(), ctx.unreached(), &ctx.allowed_ids())
}

/// Check for unreachable abilities. Sorted by fourcc.
pub fn check_unreachable_abilities(
    catalog: &Catalog,
    unreached: &TrackedSets,
    allowed: &HashSet<ObjectId>,
) -> Vec<UnreachableAbilityIssue> {
    let mut issues: Vec<UnreachableAbilityIssue> = unreached
        .abilities
        .iter()
        .filter(|id| !allowed.contains(id))
        .filter_map(|&id| catalog.ability(id))
        .map(|ability| UnreachableAbilityIssue {
            context: ObjectContext::new(ability.id, ability.label(), ObjectKind::Ability),
            family: ability.kind.family(),
        })
        .collect();

    issues.sort_by(|a, b| a.context.fourcc.cmp(&b.context.fourcc));
    issues
}
