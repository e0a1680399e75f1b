//! Zone-data XML generation.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use zone_model::{NuclideTable, ZoneMap};

use crate::common::ensure_parent_dir;

/// Options for zone-data output.
#[derive(Debug, Clone)]
pub struct ZoneDataOptions {
    /// Stamp the root element with the creation time (RFC 3339). Disable for
    /// byte-reproducible output.
    pub creation_timestamp: bool,
}

impl Default for ZoneDataOptions {
    fn default() -> Self {
        Self {
            creation_timestamp: true,
        }
    }
}

/// Write one zone-data document.
///
/// Zones appear in map order; each carries its properties in schema order
/// under `<optional_properties>` and its fractions under `<mass_fractions>`.
/// When `nuclide_data` is given, the root becomes `<zone_document>` and the
/// full reference table is embedded as a `<nuclear_data>` section ahead of
/// the zone data.
pub fn write_zone_data(
    output_path: &Path,
    zones: &ZoneMap,
    nuclide_data: Option<&NuclideTable>,
    options: &ZoneDataOptions,
) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let writer = BufWriter::new(file);
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root_name = if nuclide_data.is_some() {
        "zone_document"
    } else {
        "zone_data"
    };
    let mut root = BytesStart::new(root_name);
    if options.creation_timestamp {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        root.push_attribute(("creation_datetime", timestamp.as_str()));
    }
    xml.write_event(Event::Start(root))?;

    if let Some(table) = nuclide_data {
        write_nuclear_data(&mut xml, table)?;
        xml.write_event(Event::Start(BytesStart::new("zone_data")))?;
    }

    for (zone_id, record) in zones {
        let mut zone = BytesStart::new("zone");
        zone.push_attribute(("label", zone_id.as_str()));
        xml.write_event(Event::Start(zone))?;

        xml.write_event(Event::Start(BytesStart::new("optional_properties")))?;
        for (name, value) in &record.properties {
            let mut property = BytesStart::new("property");
            property.push_attribute(("name", name.as_str()));
            xml.write_event(Event::Start(property))?;
            xml.write_event(Event::Text(BytesText::new(value)))?;
            xml.write_event(Event::End(BytesEnd::new("property")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("optional_properties")))?;

        xml.write_event(Event::Start(BytesStart::new("mass_fractions")))?;
        for (key, value) in &record.mass_fractions {
            let mut nuclide = BytesStart::new("nuclide");
            nuclide.push_attribute(("name", key.symbol.as_str()));
            xml.write_event(Event::Start(nuclide))?;
            write_text_element(&mut xml, "z", &key.z.to_string())?;
            write_text_element(&mut xml, "a", &key.a.to_string())?;
            write_text_element(&mut xml, "x", &format!("{value:e}"))?;
            xml.write_event(Event::End(BytesEnd::new("nuclide")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("mass_fractions")))?;

        xml.write_event(Event::End(BytesEnd::new("zone")))?;
    }

    if nuclide_data.is_some() {
        xml.write_event(Event::End(BytesEnd::new("zone_data")))?;
    }
    xml.write_event(Event::End(BytesEnd::new(root_name)))?;

    debug!(
        output = %output_path.display(),
        zone_count = zones.len(),
        embedded_nuclides = nuclide_data.map_or(0, NuclideTable::len),
        "zone data written"
    );
    Ok(())
}

fn write_nuclear_data<W: std::io::Write>(
    xml: &mut Writer<W>,
    table: &NuclideTable,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("nuclear_data")))?;
    for (symbol, nuclide) in table.iter() {
        let mut element = BytesStart::new("nuclide");
        element.push_attribute(("name", symbol));
        xml.write_event(Event::Start(element))?;
        write_text_element(xml, "z", &nuclide.z.to_string())?;
        write_text_element(xml, "a", &nuclide.a.to_string())?;
        xml.write_event(Event::End(BytesEnd::new("nuclide")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("nuclear_data")))?;
    Ok(())
}

fn write_text_element<W: std::io::Write>(
    xml: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
