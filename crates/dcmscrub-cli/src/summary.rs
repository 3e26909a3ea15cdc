use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::ScrubResult;

pub fn print_summary(result: &ScrubResult) {
    println!("Scrubbed: {}", result.root.display());
    println!("Output: {}", result.output_dir.display());

    if result.series.is_empty() {
        println!("No series found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Series"),
        header_cell("Folder"),
        header_cell("Slices"),
        header_cell("Range"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);

    for summary in &result.series {
        let range = match summary.range {
            Some((start, end)) => format!("{start}..={end}"),
            None => "-".to_owned(),
        };
        table.add_row(vec![
            Cell::new(&summary.series_uid),
            Cell::new(summary.directory.display()),
            Cell::new(summary.slices),
            Cell::new(range),
            Cell::new(summary.written),
        ]);
    }
    println!("{table}");

    println!(
        "{} file(s) written for {} series across {} directorie(s) in {:.2?}",
        result.files_written,
        result.series.len(),
        result.directories,
        result.elapsed
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
