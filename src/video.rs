use std::fs::File;
use std::process::{Command, Stdio};

use anyhow::Context as _;

use crate::error::MapreelResult;
use crate::paths::ProjectPaths;
use crate::tools::run_tool;

/// Fixed encoder table for the walkthrough video. These values are part of
/// the output contract shared with downstream consumers, not tunables.
pub const INPUT_FPS: u32 = 4;
pub const TARGET_BITRATE_KBIT: u32 = 3000;
pub const LAG_IN_FRAMES: u32 = 16;
pub const ENCODER_PASSES: u32 = 2;
pub const ENCODER_THREADS: u32 = 4;

/// `png2yuv` invocation concatenating the padded frames into a raw stream
/// on stdout.
///
/// The `%04d` in the input pattern is expanded by the tool itself.
pub fn concat_command(paths: &ProjectPaths, frames: u32) -> Command {
    let mut cmd = Command::new("png2yuv");
    cmd.args(["-I", "p"])
        .arg("-f")
        .arg(INPUT_FPS.to_string())
        .args(["-b", "1"])
        .arg("-n")
        .arg(frames.to_string())
        .arg("-j")
        .arg(paths.frame_extended_pattern());
    cmd
}

/// `vpxenc` invocation encoding the raw stream into the webm container:
/// two-pass VBR at the fixed target bitrate, with lookahead and a small
/// thread pool.
pub fn encode_command(paths: &ProjectPaths) -> Command {
    let mut cmd = Command::new("vpxenc");
    cmd.args(["--best", "--cpu-used=0", "--auto-alt-ref=1"])
        .arg(format!("--lag-in-frames={LAG_IN_FRAMES}"))
        .arg("--end-usage=vbr")
        .arg(format!("--passes={ENCODER_PASSES}"))
        .arg(format!("--threads={ENCODER_THREADS}"))
        .arg(format!("--target-bitrate={TARGET_BITRATE_KBIT}"))
        .arg("-o")
        .arg(paths.video_webm())
        .arg(paths.video_yuv());
    cmd
}

/// Concatenate all padded frame images into the raw stream, then encode it
/// into the final webm.
pub fn assemble_video(paths: &ProjectPaths, frames: u32) -> MapreelResult<()> {
    let yuv_path = paths.video_yuv();
    let yuv = File::create(&yuv_path)
        .with_context(|| format!("failed to create raw video stream '{}'", yuv_path.display()))?;

    let mut concat = concat_command(paths, frames);
    concat.stdout(Stdio::from(yuv));
    run_tool(concat)?;

    run_tool(encode_command(paths))
}
