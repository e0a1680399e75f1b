use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque token naming a radial zone, taken from the first column of the
/// structure and composition files.
pub type ZoneId = String;

/// The full set of zones for one model state, keyed by zone identifier.
/// Insertion order follows the structure file's row order.
pub type ZoneMap = IndexMap<ZoneId, ZoneRecord>;

/// An isotope identified by symbol, atomic number, and mass number.
///
/// The atomic and mass numbers are copied out of the nuclide reference table
/// when the key is built, so downstream consumers never need a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IsotopeKey {
    /// Atomic number (charge). Ordered first so keys sort along the chart
    /// of nuclides.
    pub z: u32,
    /// Mass number.
    pub a: u32,
    /// Symbol as it appears in the composition header, after the neutron
    /// rename.
    pub symbol: String,
}

impl IsotopeKey {
    pub fn new(symbol: impl Into<String>, z: u32, a: u32) -> Self {
        Self {
            z,
            a,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for IsotopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (z={}, a={})", self.symbol, self.z, self.a)
    }
}

/// One radial zone: its raw structure properties plus the isotope mass
/// fractions merged in from the composition file.
///
/// Records are created by the structure parser with empty `mass_fractions`
/// and mutated in place by the composition merger. A record whose
/// `mass_fractions` is still empty after the merge is pruned from the map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneRecord {
    /// Property name -> raw textual value, in declared schema order. Values
    /// stay unconverted strings at this layer.
    pub properties: IndexMap<String, String>,
    /// Mass fraction per recognized isotope with a strictly positive value.
    pub mass_fractions: IndexMap<IsotopeKey, f64>,
}

impl ZoneRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once at least one recognized, positive mass fraction is attached.
    pub fn has_composition(&self) -> bool {
        !self.mass_fractions.is_empty()
    }
}
