//! Mark-and-sweep reachability over the content catalog.
//!
//! The tracked sets start out holding every object in the catalog and
//! shrink monotonically as objects are proven reachable. Removal from a
//! tracked set *is* the visited mark: `mark_reachable` checks membership
//! and removes before recursing into children, so a cycle or a shared
//! reference hits an already-removed id and stops. Whatever survives the
//! sweep is the unreachable report.

use std::collections::HashSet;

use crate::core::catalog::{Catalog, ObjectId};
use crate::core::edges::children_of;

/// The candidate pool of not-yet-reached objects, one set per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedSets {
    pub units: HashSet<ObjectId>,
    pub upgrades: HashSet<ObjectId>,
    pub abilities: HashSet<ObjectId>,
}

impl TrackedSets {
    /// Seed the pool with the entire catalog.
    pub fn seeded(catalog: &Catalog) -> Self {
        Self {
            units: catalog.units().map(|u| u.id).collect(),
            upgrades: catalog.upgrades().map(|u| u.id).collect(),
            abilities: catalog.abilities().map(|a| a.id).collect(),
        }
    }

    /// Mark `id` and everything it transitively unlocks as reachable.
    ///
    /// Idempotent: marking an id twice is a no-op the second time. Ids not
    /// present in the catalog are ignored.
    pub fn mark_reachable(&mut self, catalog: &Catalog, id: ObjectId) {
        let Some(object) = catalog.resolve(id) else {
            return;
        };

        let tracked = match object.kind() {
            crate::core::catalog::ObjectKind::Unit => &mut self.units,
            crate::core::catalog::ObjectKind::Upgrade => &mut self.upgrades,
            crate::core::catalog::ObjectKind::Ability => &mut self.abilities,
        };

        // Membership guard before recursion; a back-edge to an id removed
        // earlier in this run terminates here.
        if !tracked.remove(&id) {
            return;
        }

        for child in children_of(catalog, id) {
            self.mark_reachable(catalog, child);
        }
    }

    pub fn len(&self) -> usize {
        self.units.len() + self.upgrades.len() + self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run the full sweep: seed from the catalog, mark every root, return the
/// surviving unreached sets.
///
/// The result is a pure set difference; root order does not affect it.
pub fn sweep(catalog: &Catalog, roots: &[ObjectId]) -> TrackedSets {
    let mut tracked = TrackedSets::seeded(catalog);
    for &root in roots {
        tracked.mark_reachable(catalog, root);
    }
    tracked
}
