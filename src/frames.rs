use std::path::Path;

use anyhow::Context as _;

use crate::error::MapreelResult;
use crate::paths::ProjectPaths;

/// Extract the node-declaration prologue from the map template.
///
/// The template's final line is its closing brace and is dropped so edges
/// can be appended. Remaining lines containing an edge arrow are filtered
/// out as well; the frames own every edge.
pub fn template_prologue(template: &str) -> String {
    let mut lines: Vec<&str> = template.lines().collect();
    lines.pop();

    let mut out = String::new();
    for line in lines {
        if line.contains("->") {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Load the template from disk and reduce it to its prologue.
pub fn load_template_prologue(path: &Path) -> MapreelResult<String> {
    let template = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read map template '{}'", path.display()))?;
    Ok(template_prologue(&template))
}

/// Render the complete DOT document for one frame: template prologue,
/// every discovered edge in discovery order, closing brace.
pub fn render_document<'a>(prologue: &str, edges: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from(prologue);
    for edge in edges {
        out.push_str("    ");
        out.push_str(edge);
        out.push('\n');
    }
    out.push('}');
    out
}

/// Write the frame's document to `tmp/frame_<NNNN>.dot`, replacing any
/// previous content.
pub fn write_frame(paths: &ProjectPaths, frame: u32, document: &str) -> MapreelResult<()> {
    let path = paths.frame_dot(frame);
    std::fs::write(&path, document)
        .with_context(|| format!("failed to write frame document '{}'", path.display()))?;
    Ok(())
}
