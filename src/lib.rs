//! Mapreel turns a recorded text-adventure walkthrough into a growing map.
//!
//! The pipeline reads a CSV of (location, action) rows, accumulates the
//! transitions into a Graphviz digraph, renders one frame per newly
//! discovered edge, and stitches the frames into a webm video. It also
//! exports the final map in several static formats and writes a markdown
//! table of the walkthrough steps.
//!
//! Graph layout, pruning, rasterization, padding and video encoding are
//! delegated to external tools (`gvpr`, `dot`, `neato`, `convert`,
//! `png2yuv`, `vpxenc`) spawned with a fixed command-line contract; the
//! crate itself is the sequential orchestration layer.
#![forbid(unsafe_code)]

pub mod error;
pub mod frames;
pub mod graph;
pub mod maps;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod rooms;
pub mod solution;
pub mod tools;
pub mod video;

pub use error::{MapreelError, MapreelResult};
pub use graph::WalkAccumulator;
pub use paths::ProjectPaths;
pub use pipeline::{RunSummary, run};
pub use solution::{Row, Solution};
