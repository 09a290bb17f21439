use std::path::PathBuf;

use clap::Parser;

/// Render a recorded text-adventure walkthrough into an animated map
/// video, static map renders and a markdown step table.
///
/// Operates on fixed paths next to the executable: `solution.csv` and
/// `map.dot` as inputs, `tmp/` for working files, `build/` for the final
/// artifacts. Requires Graphviz (`gvpr`, `dot`, `neato`), ImageMagick
/// (`convert`), mjpegtools (`png2yuv`) and `vpxenc` on PATH for the full
/// output set; missing tools degrade the run instead of aborting it.
#[derive(Parser, Debug)]
#[command(name = "mapreel", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let Cli {} = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let paths = mapreel::ProjectPaths::new(project_root());
    let summary = mapreel::pipeline::run(&paths)?;

    eprintln!(
        "rendered {} frame(s) from {} row(s) into {}",
        summary.frames,
        summary.rows,
        paths.build_dir().display()
    );
    Ok(())
}

/// The project root is wherever the binary itself lives; inputs, working
/// and output directories all hang off it.
fn project_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
