//! Composition merging: attach per-isotope mass fractions to parsed zones.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use zone_model::{CompositionSchema, IsotopeKey, NuclideTable, ZoneMap};

use crate::error::{ParseError, Result};

/// Property names the merge step writes into each matched zone.
pub const MASS_BELOW_PROPERTY: &str = "mass below";
pub const MASS_PROPERTY: &str = "mass";

/// Counters for the merge's intentional silent-drop policies. Diagnostic
/// only: the drops themselves never alter output content or raise errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Data rows consumed.
    pub rows: usize,
    /// Rows whose zone id had no structure entry.
    pub rows_skipped: usize,
    /// Fractions excluded for being zero or negative.
    pub dropped_nonpositive: usize,
    /// Fractions excluded because the symbol is not in the reference table.
    pub dropped_unknown: usize,
    /// Zones removed in the final prune for having no surviving fractions.
    pub zones_pruned: usize,
}

/// Read a composition file from disk and merge it into `zones`.
pub fn read_composition_file(
    zones: &mut ZoneMap,
    path: &Path,
    nuclides: &NuclideTable,
    schema: &CompositionSchema,
) -> Result<MergeStats> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| ParseError::Io {
        origin: origin.clone(),
        source,
    })?;
    merge_composition(zones, BufReader::new(file), &origin, nuclides, schema)
}

/// Merge composition text into `zones` in place.
///
/// The header's tokens from `schema.isotope_offset` onward name the isotope
/// columns, with the reserved neutron label rewritten to the canonical
/// symbol. Each data row shares that layout: the fraction for isotope `j`
/// sits at column `isotope_offset + j`, with the zone id, `mass below`, and
/// `mass` in the declared leading columns.
///
/// Per row: an unknown zone id skips the row; a fraction is kept only when
/// it parses, is strictly positive, and its symbol exists in the reference
/// table. Malformed numeric tokens fail the whole merge. After the last row,
/// every zone left without fractions is pruned from the map.
pub fn merge_composition<R: BufRead>(
    zones: &mut ZoneMap,
    reader: R,
    origin: &str,
    nuclides: &NuclideTable,
    schema: &CompositionSchema,
) -> Result<MergeStats> {
    let mut lines = reader.lines().enumerate();

    let Some((_, header)) = lines.next() else {
        return Err(ParseError::Empty {
            origin: origin.to_string(),
        });
    };
    let header = header.map_err(|source| ParseError::Io {
        origin: origin.to_string(),
        source,
    })?;

    let isotopes: Vec<String> = header
        .split_whitespace()
        .skip(schema.isotope_offset)
        .map(|symbol| schema.rename_isotope(symbol).to_string())
        .collect();
    let expected = schema.isotope_offset + isotopes.len();

    let mut stats = MergeStats::default();
    for (index, line) in lines {
        // Line 0 was the header; any further skip lines are metadata.
        if index < schema.skip_lines {
            continue;
        }
        let line = line.map_err(|source| ParseError::Io {
            origin: origin.to_string(),
            source,
        })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != expected {
            return Err(ParseError::ColumnCount {
                origin: origin.to_string(),
                line: index + 1,
                expected,
                found: tokens.len(),
            });
        }
        stats.rows += 1;

        let zone_id = tokens[schema.zone_column];
        // Composition rows for zones missing from the structure file are
        // expected; skip them without complaint.
        let Some(record) = zones.get_mut(zone_id) else {
            stats.rows_skipped += 1;
            continue;
        };

        for (j, symbol) in isotopes.iter().enumerate() {
            let token = tokens[schema.isotope_offset + j];
            let value: f64 = token.parse().map_err(|_| ParseError::Number {
                origin: origin.to_string(),
                line: index + 1,
                token: token.to_string(),
            })?;
            if value <= 0.0 {
                stats.dropped_nonpositive += 1;
                continue;
            }
            let Some(nuclide) = nuclides.get(symbol) else {
                stats.dropped_unknown += 1;
                continue;
            };
            record
                .mass_fractions
                .insert(IsotopeKey::new(symbol.clone(), nuclide.z, nuclide.a), value);
        }

        record.properties.insert(
            MASS_BELOW_PROPERTY.to_string(),
            tokens[schema.mass_below_column].to_string(),
        );
        record.properties.insert(
            MASS_PROPERTY.to_string(),
            tokens[schema.mass_column].to_string(),
        );
    }

    let before = zones.len();
    zones.retain(|_, record| record.has_composition());
    stats.zones_pruned = before - zones.len();

    debug!(
        origin,
        rows_skipped = stats.rows_skipped,
        dropped_nonpositive = stats.dropped_nonpositive,
        dropped_unknown = stats.dropped_unknown,
        "composition drop counters"
    );
    info!(
        origin,
        rows = stats.rows,
        zones_pruned = stats.zones_pruned,
        zone_count = zones.len(),
        "composition merged"
    );
    Ok(stats)
}
