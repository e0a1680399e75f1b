//! Structure-file parsing: one row of physical properties per radial zone.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use zone_model::{StructureSchema, ZoneMap, ZoneRecord};

use crate::error::{ParseError, Result};

/// Read and parse a structure file from disk.
pub fn read_structure_file(path: &Path, schema: &StructureSchema) -> Result<ZoneMap> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| ParseError::Io {
        origin: origin.clone(),
        source,
    })?;
    parse_structure(BufReader::new(file), &origin, schema)
}

/// Parse structure text into a fresh zone map.
///
/// Skips `schema.skip_lines` metadata lines, then expects every non-blank
/// line to carry exactly one whitespace-delimited token per declared
/// property. Column 0 names the zone (one trailing colon stripped) and is
/// also stored verbatim under the first property name; every other column is
/// bound to its property by position.
///
/// Zero data rows after the header skip is a fatal format error, not a valid
/// empty result.
pub fn parse_structure<R: BufRead>(
    reader: R,
    origin: &str,
    schema: &StructureSchema,
) -> Result<ZoneMap> {
    let expected = schema.column_count();
    let mut zones = ZoneMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ParseError::Io {
            origin: origin.to_string(),
            source,
        })?;
        if index < schema.skip_lines {
            continue;
        }
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

        let zone_id = tokens[0].strip_suffix(':').unwrap_or(tokens[0]);
        let mut record = ZoneRecord::new();
        for (name, token) in schema.properties.iter().zip(&tokens) {
            record.properties.insert(name.clone(), (*token).to_string());
        }
        zones.insert(zone_id.to_string(), record);
    }

    if zones.is_empty() {
        return Err(ParseError::Empty {
            origin: origin.to_string(),
        });
    }

    debug!(origin, zone_count = zones.len(), "structure parsed");
    Ok(zones)
}
