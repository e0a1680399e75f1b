use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference data for one isotope: atomic number and mass number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nuclide {
    pub z: u32,
    pub a: u32,
}

/// External isotope reference table mapping symbol -> nuclide data.
///
/// Supplied once per run and read-only thereafter. The merge step consults it
/// to build denormalized isotope keys; symbols absent from the table are
/// dropped silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NuclideTable {
    nuclides: BTreeMap<String, Nuclide>,
}

impl NuclideTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, nuclide: Nuclide) {
        self.nuclides.insert(symbol.into(), nuclide);
    }

    pub fn get(&self, symbol: &str) -> Option<&Nuclide> {
        self.nuclides.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.nuclides.contains_key(symbol)
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Nuclide)> {
        self.nuclides
            .iter()
            .map(|(symbol, nuclide)| (symbol.as_str(), nuclide))
    }

    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }
}

impl FromIterator<(String, Nuclide)> for NuclideTable {
    fn from_iter<I: IntoIterator<Item = (String, Nuclide)>>(iter: I) -> Self {
        Self {
            nuclides: iter.into_iter().collect(),
        }
    }
}
