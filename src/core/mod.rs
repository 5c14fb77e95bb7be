//! Core analysis engine.
//!
//! The pipeline mirrors the data flow of the check: load the catalog and
//! placements from the map data file (`load`), gather the uncompiled
//! script text (`load::script`), build the root set (`roots`), then run
//! the mark-and-sweep traversal (`sweep`) over the edge model (`edges`).
//! Whatever survives in the tracked sets is handed to `rules` for
//! reporting.

pub mod ability;
pub mod catalog;
pub mod context;
pub mod edges;
pub mod load;
pub mod roots;
pub mod sweep;

pub use ability::{AbilityKind, LevelValues, MorphDomains};
pub use catalog::{Ability, Catalog, ContentObject, ObjectId, ObjectKind, Unit, Upgrade};
pub use context::CheckContext;
pub use load::map_data::{LoadWarning, LoadedMapData};
pub use load::script::ScriptBlob;
pub use sweep::{TrackedSets, sweep};
