//! Integration tests for composition merging, including the intentional
//! silent-drop policies (non-positive fractions, unknown isotopes, orphan
//! rows) that downstream consumers rely on.

use zone_ingest::{ParseError, merge_composition, parse_structure};
use zone_model::{CompositionSchema, IsotopeKey, Nuclide, NuclideTable, StructureSchema, ZoneMap};

fn small_schema() -> StructureSchema {
    StructureSchema {
        properties: vec![
            "grid".to_string(),
            "mass".to_string(),
            "radius".to_string(),
            "velocity".to_string(),
        ],
        skip_lines: 2,
    }
}

fn zones_123() -> ZoneMap {
    let text = "header\nheader\n\
                1: 1.0 2.0 3.0\n\
                2: 4.0 5.0 6.0\n\
                3: 7.0 8.0 9.0\n";
    parse_structure(text.as_bytes(), "presn", &small_schema()).unwrap()
}

fn reference_table() -> NuclideTable {
    [
        ("n".to_string(), Nuclide { z: 0, a: 1 }),
        ("H1".to_string(), Nuclide { z: 1, a: 1 }),
        ("He4".to_string(), Nuclide { z: 2, a: 4 }),
    ]
    .into_iter()
    .collect()
}

fn merge(zones: &mut ZoneMap, text: &str) -> Result<zone_ingest::MergeStats, ParseError> {
    merge_composition(
        zones,
        text.as_bytes(),
        "comp",
        &reference_table(),
        &CompositionSchema::default(),
    )
}

#[test]
fn test_merge_keeps_positive_recognized_fractions() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                1 0.0 1.2 0.5 0.0 -1.0 0.7 0.0 0.9\n";
    let stats = merge(&mut zones, text).unwrap();

    // Zones 2 and 3 never appear in the composition rows and are pruned.
    let keys: Vec<&str> = zones.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["1"]);
    assert_eq!(stats.zones_pruned, 2);

    let record = &zones["1"];
    assert_eq!(record.mass_fractions.len(), 2);
    assert_eq!(
        record.mass_fractions[&IsotopeKey::new("n", 0, 1)],
        0.7
    );
    assert_eq!(
        record.mass_fractions[&IsotopeKey::new("He4", 2, 4)],
        0.9
    );
    // H1 carries 0.0 and is excluded; x3 (-1.0) is both non-positive and
    // unknown to the reference table.
    assert!(
        !record
            .mass_fractions
            .contains_key(&IsotopeKey::new("H1", 1, 1))
    );

    assert_eq!(record.properties["mass below"], "0.0");
    assert_eq!(record.properties["mass"], "1.2");
}

#[test]
fn test_zero_excluded_small_positive_included() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                1 0.0 1.2 0.0 0.0 0.0 0.0 1.0e-30 0.9\n";
    merge(&mut zones, text).unwrap();

    let record = &zones["1"];
    assert!(
        !record
            .mass_fractions
            .contains_key(&IsotopeKey::new("n", 0, 1))
    );
    assert_eq!(
        record.mass_fractions[&IsotopeKey::new("H1", 1, 1)],
        1.0e-30
    );
}

#[test]
fn test_unknown_symbol_excluded_regardless_of_value() {
    let mut zones = zones_123();
    // Xx99 is positive but absent from the reference table.
    let text = "id below mass x1 x2 x3 Xx99 H1 He4\n\
                1 0.0 1.2 0.0 0.0 0.0 0.5 0.1 0.4\n";
    let stats = merge(&mut zones, text).unwrap();
    let record = &zones["1"];
    assert_eq!(record.mass_fractions.len(), 2);
    assert_eq!(stats.dropped_unknown, 1);
}

#[test]
fn test_neutron_label_renamed_in_header_only() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                1 0.0 1.2 0.0 0.0 0.0 0.25 0.0 0.0\n";
    merge(&mut zones, text).unwrap();

    let record = &zones["1"];
    let key = record.mass_fractions.keys().next().unwrap();
    assert_eq!(key.symbol, "n");
    assert_eq!((key.z, key.a), (0, 1));
}

#[test]
fn test_orphan_composition_row_skipped() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                99 0.0 1.2 0.0 0.0 0.0 0.5 0.0 0.0\n\
                2 0.0 1.2 0.0 0.0 0.0 0.5 0.0 0.0\n";
    let stats = merge(&mut zones, text).unwrap();
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.rows_skipped, 1);
    assert!(!zones.contains_key("99"));
    assert!(zones.contains_key("2"));
}

#[test]
fn test_zone_with_all_fractions_filtered_is_pruned() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                1 0.0 1.2 0.0 0.0 0.0 0.0 -0.5 0.0\n";
    let stats = merge(&mut zones, text).unwrap();
    assert!(zones.is_empty());
    assert_eq!(stats.zones_pruned, 3);
    // All four header isotopes (x3, nt1, H1, He4) carry non-positive values.
    assert_eq!(stats.dropped_nonpositive, 4);
}

#[test]
fn test_fraction_column_count_mismatch_fails() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                1 0.0 1.2 0.0 0.0 0.0 0.5 0.0\n";
    let error = merge(&mut zones, text).unwrap_err();
    match error {
        ParseError::ColumnCount {
            line,
            expected,
            found,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(expected, 9);
            assert_eq!(found, 8);
        }
        other => panic!("expected ColumnCount, got {other:?}"),
    }
}

#[test]
fn test_malformed_fraction_fails() {
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                1 0.0 1.2 0.0 0.0 0.0 0.5 bogus 0.9\n";
    let error = merge(&mut zones, text).unwrap_err();
    match error {
        ParseError::Number { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "bogus");
        }
        other => panic!("expected Number, got {other:?}"),
    }
}

#[test]
fn test_empty_composition_fails() {
    let mut zones = zones_123();
    let error = merge(&mut zones, "").unwrap_err();
    assert!(matches!(error, ParseError::Empty { .. }));
}

#[test]
fn test_merge_overwrites_mass_properties() {
    // "mass below" and "mass" land as raw, unconverted strings even when a
    // structure property of the same name would be present.
    let mut zones = zones_123();
    let text = "id below mass x1 x2 x3 nt1 H1 He4\n\
                3 1.989e33 3.1e31 0.0 0.0 0.0 0.0 0.0 1.0\n";
    merge(&mut zones, text).unwrap();
    let record = &zones["3"];
    assert_eq!(record.properties["mass below"], "1.989e33");
    assert_eq!(record.properties["mass"], "3.1e31");
    // The structure-side columns are untouched.
    assert_eq!(record.properties["grid"], "3:");
}
