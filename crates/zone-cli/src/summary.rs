use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::StateResult;

/// Print the per-state run summary table.
pub fn print_summary(results: &[StateResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Zones"),
        header_cell("Isotopes"),
        header_cell("Pruned"),
        header_cell("Rows skipped"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for result in results {
        table.add_row(vec![
            Cell::new(result.state.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(result.zone_count),
            Cell::new(result.isotope_count),
            count_cell(result.stats.zones_pruned),
            count_cell(result.stats.rows_skipped),
            Cell::new(result.output.display()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
