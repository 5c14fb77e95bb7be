//! Rule implementations for mapcheck.
//!
//! Pure functions that turn the sweep result into user-facing issues.
//! Each function takes only the inputs it needs (not a full context) and
//! returns one specific issue type, sorted for deterministic output.
//!
//! ## Module Structure
//!
//! - `unreachable_unit`: Units no player can acquire
//! - `unreachable_upgrade`: Upgrades no accessible unit can research
//! - `unreachable_ability`: Abilities carried by no accessible unit

pub mod unreachable_ability;
pub mod unreachable_unit;
pub mod unreachable_upgrade;
