//! Run summary printed after a successful conversion.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lead_cli::pipeline::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Seed data saved to: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Complete"),
        header_cell("Missing dates"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.records).set_alignment(CellAlignment::Right),
        Cell::new(result.complete).set_alignment(CellAlignment::Right),
        degradation_cell(result.missing_dates),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn degradation_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 {
        cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
