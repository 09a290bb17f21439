use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use csv::ReaderBuilder;
use unicode_width::UnicodeWidthStr;

use crate::error::MapreelResult;

/// One usable walkthrough step: where the player stood and what they typed.
///
/// Either field may be empty; an empty location merely suppresses edge
/// generation while the step still appears in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub location: String,
    pub action: String,
}

/// The parsed walkthrough table plus the column metrics the report needs.
///
/// Widths are display columns (`unicode-width`), not bytes, so multi-byte
/// labels align correctly later.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    pub rows: Vec<Row>,
    pub location_width: usize,
    pub action_width: usize,
}

/// Read the walkthrough table from `path`.
pub fn read_solution(path: &Path) -> MapreelResult<Solution> {
    let file = File::open(path)
        .with_context(|| format!("failed to open walkthrough table '{}'", path.display()))?;
    Ok(parse_solution(file))
}

/// Parse a comma-delimited walkthrough table.
///
/// No header row is assumed. A record contributes a [`Row`] iff its first
/// two fields are present; extra fields are ignored and unreadable records
/// are skipped entirely.
pub fn parse_solution(input: impl Read) -> Solution {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut solution = Solution::default();
    for record in reader.records() {
        let Ok(record) = record else {
            continue;
        };
        let (Some(location), Some(action)) = (record.get(0), record.get(1)) else {
            continue;
        };

        solution.location_width = solution.location_width.max(location.width());
        solution.action_width = solution.action_width.max(action.width());
        solution.rows.push(Row {
            location: location.to_string(),
            action: action.to_string(),
        });
    }
    solution
}
