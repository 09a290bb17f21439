use std::process::Command;

use crate::paths::ProjectPaths;
use crate::tools::run_tool;

/// Layout engines the final map is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutEngine {
    /// Force-directed layout, the primary map.
    Neato,
    /// Hierarchical layout, the `_dot`-suffixed variant.
    Dot,
}

impl LayoutEngine {
    fn program(self) -> &'static str {
        match self {
            Self::Neato => "neato",
            Self::Dot => "dot",
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            Self::Neato => "",
            Self::Dot => "_dot",
        }
    }
}

/// Formats each engine renders the final map into.
pub const MAP_FORMATS: [&str; 3] = ["pdf", "png", "svg"];

/// One `<engine> -T<format>` render of the final reduced frame document.
pub fn export_command(
    paths: &ProjectPaths,
    engine: LayoutEngine,
    format: &str,
    final_frame: u32,
) -> Command {
    let mut cmd = Command::new(engine.program());
    cmd.arg(format!("-T{format}"))
        .arg("-o")
        .arg(paths.map_output(engine.file_suffix(), format))
        .arg(paths.frame_reduced_dot(final_frame));
    cmd
}

/// Render the final accumulated map in every engine/format combination.
///
/// The six renders are independent of each other, so a failed one is
/// logged and the rest still run.
pub fn export_maps(paths: &ProjectPaths, final_frame: u32) {
    for engine in [LayoutEngine::Neato, LayoutEngine::Dot] {
        for format in MAP_FORMATS {
            if let Err(err) = run_tool(export_command(paths, engine, format, final_frame)) {
                tracing::warn!(?engine, format, %err, "map export failed");
            }
        }
    }
}
