//! Loader for the external nuclide reference listing.
//!
//! The listing is whitespace-delimited text, one `symbol z a` triple per
//! line; blank lines and `#` comments are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use zone_model::{Nuclide, NuclideTable};

use crate::error::{ParseError, Result};

/// Read a nuclide reference listing from disk.
pub fn load_nuclides(path: &Path) -> Result<NuclideTable> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| ParseError::Io {
        origin: origin.clone(),
        source,
    })?;
    parse_nuclides(BufReader::new(file), &origin)
}

/// Parse a nuclide reference listing. An empty table is a fatal input error.
pub fn parse_nuclides<R: BufRead>(reader: R, origin: &str) -> Result<NuclideTable> {
    let mut table = NuclideTable::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ParseError::Io {
            origin: origin.to_string(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(ParseError::ColumnCount {
                origin: origin.to_string(),
                line: index + 1,
                expected: 3,
                found: tokens.len(),
            });
        }
        let z = parse_u32(tokens[1], origin, index + 1)?;
        let a = parse_u32(tokens[2], origin, index + 1)?;
        table.insert(tokens[0], Nuclide { z, a });
    }
    if table.is_empty() {
        return Err(ParseError::Empty {
            origin: origin.to_string(),
        });
    }
    debug!(origin, nuclide_count = table.len(), "nuclide table loaded");
    Ok(table)
}

fn parse_u32(token: &str, origin: &str, line: usize) -> Result<u32> {
    token.parse().map_err(|_| ParseError::Number {
        origin: origin.to_string(),
        line,
        token: token.to_string(),
    })
}
