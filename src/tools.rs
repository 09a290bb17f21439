use std::process::Command;

use crate::error::{MapreelError, MapreelResult};
use crate::paths::ProjectPaths;

/// `gvpr` program that deletes every node without an edge.
const PRUNE_PROGRAM: &str = "N[$.degree==0]{delete(root, $)}";

/// Canvas the padded frames are centered on. Part of the video output
/// contract, not a tunable.
pub const FRAME_EXTENT: &str = "8000x3500";

/// Run an external tool to completion.
///
/// Spawn failures and non-zero exits both surface as tool errors with the
/// captured stderr; callers decide whether a failed stage aborts or merely
/// degrades the run.
pub fn run_tool(mut command: Command) -> MapreelResult<()> {
    let name = command.get_program().to_string_lossy().into_owned();
    let output = command.output().map_err(|e| {
        MapreelError::tool(format!(
            "failed to spawn {name} (is it installed and on PATH?): {e}"
        ))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MapreelError::tool(format!(
            "{name} exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

/// `gvpr` invocation dropping unconnected nodes from a frame document.
pub fn prune_command(paths: &ProjectPaths, frame: u32) -> Command {
    let mut cmd = Command::new("gvpr");
    cmd.args(["-c", PRUNE_PROGRAM, "-o"])
        .arg(paths.frame_reduced_dot(frame))
        .arg(paths.frame_dot(frame));
    cmd
}

/// `dot -Tpng` invocation rasterizing a reduced frame document.
pub fn rasterize_command(paths: &ProjectPaths, frame: u32) -> Command {
    let mut cmd = Command::new("dot");
    cmd.args(["-Tpng", "-o"])
        .arg(paths.frame_png(frame))
        .arg(paths.frame_reduced_dot(frame));
    cmd
}

/// ImageMagick `convert` invocation centering the raster on the video
/// canvas with a white background.
pub fn extend_command(paths: &ProjectPaths, frame: u32) -> Command {
    let mut cmd = Command::new("convert");
    cmd.arg(paths.frame_png(frame))
        .args(["-gravity", "center", "-background", "white", "-extent", FRAME_EXTENT])
        .arg(paths.frame_extended_png(frame));
    cmd
}

/// Run the full per-frame render chain: prune, rasterize, pad.
///
/// The stages feed each other through the filesystem, so the first failure
/// aborts the chain for this frame.
pub fn render_frame_image(paths: &ProjectPaths, frame: u32) -> MapreelResult<()> {
    run_tool(prune_command(paths, frame))?;
    run_tool(rasterize_command(paths, frame))?;
    run_tool(extend_command(paths, frame))
}

#[cfg(test)]
pub(crate) fn argv(command: &Command) -> Vec<String> {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}
