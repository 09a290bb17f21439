use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::error::MapreelResult;

/// Filesystem layout of a walkthrough project.
///
/// Everything the pipeline touches hangs off one root directory: the input
/// table and map template at the top, working files under `tmp/`, final
/// artifacts under `build/`. The filenames produced here are a contract
/// consumed by downstream tooling; frame numbers are zero-padded to four
/// digits.
#[derive(Clone, Debug)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final artifacts (video, maps, report).
    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Working files (frame documents, rasters, raw video stream).
    pub fn tmp_dir(&self) -> PathBuf {
        self.root.join("tmp")
    }

    /// The recorded walkthrough table.
    pub fn solution_csv(&self) -> PathBuf {
        self.root.join("solution.csv")
    }

    /// The static map template providing node declarations.
    pub fn map_template(&self) -> PathBuf {
        self.root.join("map.dot")
    }

    pub fn frame_dot(&self, frame: u32) -> PathBuf {
        self.tmp_dir().join(format!("frame_{frame:04}.dot"))
    }

    pub fn frame_reduced_dot(&self, frame: u32) -> PathBuf {
        self.tmp_dir().join(format!("frame_reduced_{frame:04}.dot"))
    }

    pub fn frame_png(&self, frame: u32) -> PathBuf {
        self.tmp_dir().join(format!("frame_{frame:04}.png"))
    }

    pub fn frame_extended_png(&self, frame: u32) -> PathBuf {
        self.tmp_dir().join(format!("frame_extended_{frame:04}.png"))
    }

    /// printf-style input pattern handed to `png2yuv`; the `%04d` is
    /// expanded by the tool, not by us.
    pub fn frame_extended_pattern(&self) -> PathBuf {
        self.tmp_dir().join("frame_extended_%04d.png")
    }

    /// Raw concatenated video stream.
    pub fn video_yuv(&self) -> PathBuf {
        self.tmp_dir().join("map_walkthrough.yuv")
    }

    /// Encoded walkthrough video.
    pub fn video_webm(&self) -> PathBuf {
        self.build_dir().join("map_walkthrough.webm")
    }

    /// A static map render, e.g. `map_walkthrough_dot.svg` for suffix
    /// `"_dot"` and format `"svg"`.
    pub fn map_output(&self, suffix: &str, format: &str) -> PathBuf {
        self.build_dir().join(format!("map_walkthrough{suffix}.{format}"))
    }

    /// The markdown step table.
    pub fn solution_md(&self) -> PathBuf {
        self.build_dir().join("solution.md")
    }

    /// Create the working and output directories if they are missing.
    pub fn ensure_directories(&self) -> MapreelResult<()> {
        for dir in [self.tmp_dir(), self.build_dir()] {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create directory '{}'", dir.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_numbers_are_zero_padded() {
        let paths = ProjectPaths::new("proj");
        assert!(paths.frame_dot(1).ends_with("tmp/frame_0001.dot"));
        assert!(paths.frame_reduced_dot(42).ends_with("tmp/frame_reduced_0042.dot"));
        assert!(paths.frame_png(999).ends_with("tmp/frame_0999.png"));
        assert!(
            paths
                .frame_extended_png(1234)
                .ends_with("tmp/frame_extended_1234.png")
        );
    }

    #[test]
    fn outputs_split_between_tmp_and_build() {
        let paths = ProjectPaths::new("proj");
        assert!(paths.video_yuv().starts_with("proj/tmp"));
        assert!(paths.video_webm().starts_with("proj/build"));
        assert!(paths.solution_md().starts_with("proj/build"));
        assert_eq!(
            paths.map_output("_dot", "svg"),
            PathBuf::from("proj/build/map_walkthrough_dot.svg")
        );
        assert_eq!(
            paths.map_output("", "pdf"),
            PathBuf::from("proj/build/map_walkthrough.pdf")
        );
    }
}
