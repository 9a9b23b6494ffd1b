//! Formatted output helpers for CLI commands.
//!
//! Provides plain-text table formatting with columns padded to the widest
//! cell.

/// Renders a table with a header row, columns separated by two spaces.
///
/// Rows shorter than the header are padded with empty cells. Trailing
/// whitespace is trimmed from every line.
#[must_use]
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let mut lines = vec![format_row(&header_cells, &widths)];
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map_or("", String::as_str);
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}
