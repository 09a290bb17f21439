use std::path::Path;

use anyhow::Context as _;
use unicode_width::UnicodeWidthStr;

use crate::error::MapreelResult;
use crate::solution::Solution;

/// Pad `text` with trailing spaces up to `width` display columns.
///
/// Text already wider than `width` is returned unpadded; display columns,
/// not bytes, decide how many spaces are needed, so multi-byte labels do
/// not shift the table.
fn pad(text: &str, width: usize) -> String {
    let mut out = String::from(text);
    for _ in text.width()..width {
        out.push(' ');
    }
    out
}

/// Render the walkthrough as a pipe-delimited markdown table.
///
/// The location column is fixed-width, the action column ragged; the
/// separator row carries `width + 1` dashes per column.
pub fn render_table(solution: &Solution) -> String {
    let mut out = String::new();

    out.push_str(&pad("Location", solution.location_width));
    out.push_str(" | Action\n");
    out.push_str(&"-".repeat(solution.location_width + 1));
    out.push('|');
    out.push_str(&"-".repeat(solution.action_width + 1));
    out.push('\n');

    for row in &solution.rows {
        out.push_str(&pad(&row.location, solution.location_width));
        out.push_str(" | ");
        out.push_str(&row.action);
        out.push('\n');
    }

    out
}

/// Write the step table to `path`, fully overwriting any previous report.
pub fn write_report(path: &Path, solution: &Solution) -> MapreelResult<()> {
    std::fs::write(path, render_table(solution))
        .with_context(|| format!("failed to write walkthrough report '{}'", path.display()))?;
    Ok(())
}
