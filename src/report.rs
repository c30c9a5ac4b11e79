//! Rendering of extraction results for the terminal.

use crate::results::ExtractionRecord;

const HEADERS: [&str; 4] = ["URL", "Title", "Meta Title", "Meta Description"];

/// Renders records as a grid with one row per URL.
///
/// Cells longer than `max_column_width` characters are cut and end with `…`.
/// A width of 0 disables truncation.
pub fn render_table(records: &[ExtractionRecord], max_column_width: usize) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [r.url(), r.title(), r.meta_title(), r.meta_description()]
                .map(|cell| truncate(cell, max_column_width))
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let separator = format!("+{}+", separator);

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(&HEADERS.map(str::to_string), &widths));
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row, &widths));
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|\n", cells)
}

fn truncate(cell: &str, max: usize) -> String {
    if max == 0 || cell.chars().count() <= max {
        return cell.to_string();
    }
    let mut cut: String = cell.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Renders one labeled section per URL
pub fn render_sections(records: &[ExtractionRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("URL: {}\n", record.url()));
        out.push_str(&format!("  Page Title: {}\n", record.title()));
        out.push_str(&format!("  Meta Title: {}\n", record.meta_title()));
        out.push_str(&format!("  Meta Description: {}\n", record.meta_description()));
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }
    out
}

/// Renders records as a pretty-printed JSON array
pub fn render_json(records: &[ExtractionRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
