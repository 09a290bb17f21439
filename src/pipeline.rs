use crate::error::MapreelResult;
use crate::frames;
use crate::graph::WalkAccumulator;
use crate::maps;
use crate::paths::ProjectPaths;
use crate::report;
use crate::solution;
use crate::tools;
use crate::video;

/// Counters describing one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Valid walkthrough rows read from the table.
    pub rows: usize,
    /// Unique edges discovered, which equals the number of frames rendered.
    pub frames: u32,
}

/// Run the whole walkthrough pipeline against one project directory.
///
/// Fully sequential: rows are folded into the edge accumulator one at a
/// time, each newly discovered edge is materialized as a frame on the
/// spot, and the video/map/report exports run once at the end. External
/// tool failures degrade the run (logged at `warn`) instead of aborting
/// it; I/O failures on our own files abort.
#[tracing::instrument(skip(paths), fields(root = %paths.root().display()))]
pub fn run(paths: &ProjectPaths) -> MapreelResult<RunSummary> {
    paths.ensure_directories()?;

    let solution = solution::read_solution(&paths.solution_csv())?;
    let prologue = frames::load_template_prologue(&paths.map_template())?;

    let mut walk = WalkAccumulator::new();
    for (index, current) in solution.rows.iter().enumerate() {
        let prev = index.checked_sub(1).map(|i| &solution.rows[i]);
        let next = solution.rows.get(index + 1);

        let Some(frame) = walk.observe(prev, current, next)? else {
            continue;
        };

        let document = frames::render_document(&prologue, walk.edge_lines());
        frames::write_frame(paths, frame, &document)?;
        tracing::debug!(frame, "wrote frame document");

        if let Err(err) = tools::render_frame_image(paths, frame) {
            tracing::warn!(frame, %err, "frame render chain failed");
        }
    }

    let frames_total = walk.frame_count();
    if frames_total == 0 {
        tracing::warn!("no edges discovered, skipping video and map export");
    } else {
        if let Err(err) = video::assemble_video(paths, frames_total) {
            tracing::warn!(%err, "video assembly failed");
        }
        maps::export_maps(paths, frames_total);
    }

    report::write_report(&paths.solution_md(), &solution)?;

    Ok(RunSummary {
        rows: solution.rows.len(),
        frames: frames_total,
    })
}
