use std::io::Write;

use lsgrid_domain::layout::ColumnLayout;

/// Separator between adjacent cells of one row.
pub const GUTTER: &str = "  ";

/// Writes the grid row by row. Each present cell is padded to its column's
/// width; columns with no entry in a row are omitted, not blank-filled.
pub fn output_short(layout: &ColumnLayout, out: &mut impl Write) -> anyhow::Result<()> {
    for row in layout.iter_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| format!("{:<width$}", cell.name, width = cell.width))
            .collect();
        writeln!(out, "{}", cells.join(GUTTER))?;
    }
    Ok(())
}
