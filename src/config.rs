use std::io::Read;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{TraceError, TraceResult};

/// Numeric knobs of the pipeline.
///
/// Missing fields in a config file take their default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Extra samples per curve when flattening; each curve gets `iterations + 1` segments.
    pub iterations: usize,
    /// Number of frames in the animation, at least 2.
    pub num_frames: usize,
    /// Measure inner/outer progress on their samples re-projected onto the animation path.
    pub project_onto_animation: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            num_frames: 256,
            project_onto_animation: false,
        }
    }
}

impl TraceConfig {
    /// Reject a frame count below 2.
    pub fn validate(&self) -> TraceResult<()> {
        if self.num_frames < 2 {
            return Err(TraceError::config(format!(
                "num_frames must be at least 2, got {}",
                self.num_frames
            )));
        }
        Ok(())
    }

    /// Read and validate a JSON config.
    pub fn from_reader(r: impl Read) -> TraceResult<Self> {
        let cfg: Self = serde_json::from_reader(r).context("parse config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> TraceResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
