//! Library components for the zone-data converter CLI.

pub mod logging;
pub mod pipeline;
