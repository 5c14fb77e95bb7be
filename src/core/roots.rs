//! Root set builder.
//!
//! Roots are objects considered reachable without any edge traversal:
//! unit types physically pre-placed on the map, and any catalog object
//! whose fourcc appears in the raw, uncompiled gameplay script.
//!
//! The script scan is a case-insensitive substring match, not a parse.
//! That is a deliberate approximation: a fourcc can coincidentally match
//! unrelated text (false positive, object wrongly kept), and an id built
//! from computed strings at runtime is missed (false negative, object
//! wrongly reported). Both are accepted; do not replace this with a
//! reference parser.

use std::collections::HashSet;

use crate::core::catalog::{Catalog, ObjectId};

/// Compute the initial reachable set from placements and script text.
///
/// Ids that do not resolve in the catalog are dropped; duplicates are
/// collapsed. The returned order is sorted for stable verbose output, but
/// the sweep result does not depend on it.
pub fn collect_roots(
    catalog: &Catalog,
    placed_unit_types: &[ObjectId],
    script: &str,
) -> Vec<ObjectId> {
    let mut seen: HashSet<ObjectId> = HashSet::new();
    let mut roots: Vec<ObjectId> = Vec::new();

    for &id in placed_unit_types {
        if catalog.resolve(id).is_some() && seen.insert(id) {
            roots.push(id);
        }
    }

    let script_lower = script.to_lowercase();
    for id in catalog.ids() {
        if seen.contains(&id) {
            continue;
        }
        if script_lower.contains(&id.fourcc().to_lowercase()) {
            seen.insert(id);
            roots.push(id);
        }
    }

    roots.sort();
    roots
}
