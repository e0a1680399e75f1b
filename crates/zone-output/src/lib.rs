//! Zone-data output generation.
//!
//! Serializes a merged zone map to a hierarchical XML document, optionally
//! embedding the full nuclide reference table for a self-contained output.

mod common;
mod zone_data;

pub use common::ensure_parent_dir;
pub use zone_data::{ZoneDataOptions, write_zone_data};
