//! Input loading: map data JSON and gameplay script sources.

pub mod map_data;
pub mod script;
