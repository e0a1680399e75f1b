use serde::{Deserialize, Serialize};

/// Column names of the structure file, in file order. Column 0 doubles as
/// the zone identifier (after stripping one trailing colon) and is also
/// stored under its own name. The tail from `nt1` onward is the coarse
/// network abundance block carried verbatim as properties.
pub const STRUCTURE_PROPERTIES: [&str; 34] = [
    "grid",
    "cell outer total mass",
    "cell outer radius",
    "cell outer velocity",
    "cell density",
    "cell temperature",
    "cell pressure",
    "cell specific energy",
    "cell specific entropy",
    "cell angular velocity",
    "cell A_bar",
    "cell Y_e",
    "stability",
    "NETWORK",
    "nt1",
    "H1",
    "He3",
    "He4",
    "C12",
    "N14",
    "O16",
    "Ne20",
    "Mg24",
    "Si28",
    "S32",
    "Ar36",
    "Ca40",
    "Ti44",
    "Cr48",
    "Fe52",
    "Fe54",
    "Ni56",
    "Fe56",
    "'Fe'",
];

/// Reserved neutron label used by the composition header.
pub const NEUTRON_LABEL: &str = "nt1";

/// Canonical neutron symbol expected by the nuclide reference table.
pub const NEUTRON_SYMBOL: &str = "n";

/// Declared layout of the structure file: which columns exist, in what
/// order, and how many leading lines are metadata.
///
/// The positional column-to-name binding mirrors a legacy fixed-column text
/// layout; keeping it as an explicit schema keeps the contract visible
/// instead of burying indices in the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureSchema {
    /// Ordered property names; a data row must have exactly this many tokens.
    pub properties: Vec<String>,
    /// Leading metadata/header lines to skip.
    pub skip_lines: usize,
}

impl Default for StructureSchema {
    fn default() -> Self {
        Self {
            properties: STRUCTURE_PROPERTIES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            skip_lines: 2,
        }
    }
}

impl StructureSchema {
    /// Number of columns a data row must carry.
    pub fn column_count(&self) -> usize {
        self.properties.len()
    }
}

/// Declared layout of the composition file.
///
/// Header and data rows share one column layout: isotope symbols start at
/// `isotope_offset` in the header, and the mass fraction for isotope `j`
/// sits at column `isotope_offset + j` of each data row. The named leading
/// columns are the only ones consumed; anything between them and the isotope
/// block is carried in the file but ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionSchema {
    /// Column where isotope symbols (header) and mass fractions (rows) begin.
    pub isotope_offset: usize,
    /// Header lines to skip before data rows (the isotope header itself).
    pub skip_lines: usize,
    /// Data-row column holding the zone identifier.
    pub zone_column: usize,
    /// Data-row column holding the `mass below` property (raw string).
    pub mass_below_column: usize,
    /// Data-row column holding the `mass` property (raw string).
    pub mass_column: usize,
}

impl Default for CompositionSchema {
    fn default() -> Self {
        Self {
            isotope_offset: 5,
            skip_lines: 1,
            zone_column: 0,
            mass_below_column: 1,
            mass_column: 2,
        }
    }
}

impl CompositionSchema {
    /// Apply the single header renaming rule: the reserved neutron label is
    /// rewritten to the canonical neutron symbol. No other symbol changes.
    pub fn rename_isotope<'a>(&self, symbol: &'a str) -> &'a str {
        if symbol == NEUTRON_LABEL {
            NEUTRON_SYMBOL
        } else {
            symbol
        }
    }
}
