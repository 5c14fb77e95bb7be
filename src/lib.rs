//! Mapcheck - object-data reachability checker for Warcraft III maps
//!
//! Mapcheck is a CLI tool and library for validating that every content
//! object defined in a map's object data (units, upgrades, abilities) is
//! actually obtainable by a player. Objects with no path from any root
//! (pre-placed on the map, or referenced in the uncompiled gameplay script)
//! are dead content and get reported as issues.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (catalog, edge model, roots, sweep)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Checks that turn analysis results into issues
//! - `utils`: Shared utility functions (fourcc id conversions)

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
