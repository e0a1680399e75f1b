pub mod nuclide;
pub mod record;
pub mod schema;

pub use nuclide::{Nuclide, NuclideTable};
pub use record::{IsotopeKey, ZoneId, ZoneMap, ZoneRecord};
pub use schema::{CompositionSchema, STRUCTURE_PROPERTIES, StructureSchema};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_schema_declares_all_columns() {
        let schema = StructureSchema::default();
        assert_eq!(schema.properties.len(), 34);
        assert_eq!(schema.properties[0], "grid");
        assert_eq!(schema.properties[33], "'Fe'");
        assert_eq!(schema.skip_lines, 2);
    }

    #[test]
    fn composition_schema_defaults() {
        let schema = CompositionSchema::default();
        assert_eq!(schema.isotope_offset, 5);
        assert_eq!(schema.skip_lines, 1);
        assert_eq!(schema.rename_isotope("nt1"), "n");
        assert_eq!(schema.rename_isotope("H1"), "H1");
    }

    #[test]
    fn nuclide_table_serializes() {
        let table: NuclideTable = [
            ("n".to_string(), Nuclide { z: 0, a: 1 }),
            ("He4".to_string(), Nuclide { z: 2, a: 4 }),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: NuclideTable = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round.get("He4"), Some(&Nuclide { z: 2, a: 4 }));
        assert_eq!(round.len(), 2);
    }

    #[test]
    fn isotope_key_orders_by_charge_then_mass() {
        let neutron = IsotopeKey::new("n", 0, 1);
        let he3 = IsotopeKey::new("He3", 2, 3);
        let he4 = IsotopeKey::new("He4", 2, 4);
        assert!(neutron < he3);
        assert!(he3 < he4);
    }
}
