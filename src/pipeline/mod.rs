//! The full flatten → tabulate → map → frame table chain, wired through a [`Store`].
//!
//! Every stage is a derived cell, so changing an input (geometry, sampling density, frame count,
//! projection, current frame) recomputes exactly the stages downstream of it, and only when they
//! are next read or a subscriber needs them.

use std::rc::Rc;

use kurbo::BezPath;

use crate::config::TraceConfig;
use crate::foundation::error::{TraceError, TraceResult};
use crate::frames::outline::frame_outline;
use crate::frames::table::{FrameTable, PathTables, build_frame_table};
use crate::geometry::path::LogoGeometry;
use crate::geometry::projection::project_samples;
use crate::sampling::arc_length::{CumulativeLengths, cumulative_lengths};
use crate::sampling::flatten::{SampledPolyline, flatten_path};
use crate::store::{CellId, Store};

type Samples = Vec<SampledPolyline>;

/// Handles of every cell the pipeline creates.
///
/// The first five are inputs; the rest are derived and reject writes.
#[derive(Clone, Copy, Debug)]
pub struct PipelineCells {
    /// Input geometry.
    pub geometry: CellId<LogoGeometry>,
    /// Flattening density.
    pub iterations: CellId<usize>,
    /// Frame count.
    pub num_frames: CellId<usize>,
    /// Whether boundary lengths are measured on the animation path.
    pub project_onto_animation: CellId<bool>,
    /// Current frame.
    pub frame: CellId<usize>,

    /// Flattened animation path.
    pub animation_samples: CellId<Samples>,
    /// Flattened inner boundary.
    pub inner_samples: CellId<Samples>,
    /// Flattened outer boundary.
    pub outer_samples: CellId<Samples>,
    /// Cumulative lengths of the animation path.
    pub animation_lengths: CellId<CumulativeLengths>,
    /// Cumulative lengths of the inner boundary, projected when enabled.
    pub inner_lengths: CellId<CumulativeLengths>,
    /// Cumulative lengths of the outer boundary, projected when enabled.
    pub outer_lengths: CellId<CumulativeLengths>,
    /// Per-frame draw positions.
    pub frame_table: CellId<FrameTable>,
    /// Outline of the current frame.
    pub current_outline: CellId<BezPath>,
}

/// Reactive animation pipeline for one logo.
#[derive(Debug)]
pub struct LogoPipeline {
    store: Store,
    cells: PipelineCells,
}

impl LogoPipeline {
    /// Wire up the pipeline. Nothing is computed until a value is read.
    pub fn new(geometry: LogoGeometry, config: TraceConfig) -> TraceResult<Self> {
        config.validate()?;
        let mut store = Store::new();

        let geometry = store.create_mutable(geometry);
        let iterations = store.create_mutable(config.iterations);
        let num_frames = store.create_mutable(config.num_frames);
        let project_onto_animation = store.create_mutable(config.project_onto_animation);
        let frame = store.create_mutable(0usize);

        let animation_samples = store.derived((geometry, iterations), |(g, k)| {
            Ok(flatten_path(&g.animation, *k))
        })?;
        let inner_samples =
            store.derived((geometry, iterations), |(g, k)| Ok(flatten_path(&g.inner, *k)))?;
        let outer_samples =
            store.derived((geometry, iterations), |(g, k)| Ok(flatten_path(&g.outer, *k)))?;

        let animation_lengths =
            store.derived(animation_samples, |s| Ok(cumulative_lengths(&s)))?;
        let inner_lengths = store.derived(
            (inner_samples, animation_samples, geometry, project_onto_animation),
            |(s, anim, g, project)| boundary_lengths(&s, &anim, &g, *project),
        )?;
        let outer_lengths = store.derived(
            (outer_samples, animation_samples, geometry, project_onto_animation),
            |(s, anim, g, project)| boundary_lengths(&s, &anim, &g, *project),
        )?;

        let frame_table = store.derived(
            (
                num_frames,
                animation_lengths,
                inner_lengths,
                inner_samples,
                outer_lengths,
                outer_samples,
            ),
            |(n, anim, inner_l, inner_s, outer_l, outer_s)| {
                build_frame_table(
                    *n,
                    &anim,
                    PathTables {
                        lengths: &inner_l,
                        samples: &inner_s,
                    },
                    PathTables {
                        lengths: &outer_l,
                        samples: &outer_s,
                    },
                )
            },
        )?;
        let current_outline = store.derived((geometry, frame_table, frame), |(g, table, f)| {
            frame_outline(&g, &table, *f)
        })?;

        Ok(Self {
            store,
            cells: PipelineCells {
                geometry,
                iterations,
                num_frames,
                project_onto_animation,
                frame,
                animation_samples,
                inner_samples,
                outer_samples,
                animation_lengths,
                inner_lengths,
                outer_lengths,
                frame_table,
                current_outline,
            },
        })
    }

    /// Handles of every cell, for reading intermediate stages.
    pub fn cells(&self) -> PipelineCells {
        self.cells
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current numeric settings.
    pub fn config(&self) -> TraceResult<TraceConfig> {
        Ok(TraceConfig {
            iterations: *self.store.read(self.cells.iterations)?,
            num_frames: *self.store.read(self.cells.num_frames)?,
            project_onto_animation: *self.store.read(self.cells.project_onto_animation)?,
        })
    }

    /// Current input geometry.
    pub fn geometry(&self) -> TraceResult<Rc<LogoGeometry>> {
        self.store.read(self.cells.geometry)
    }

    /// Current frame index.
    pub fn frame(&self) -> TraceResult<usize> {
        Ok(*self.store.read(self.cells.frame)?)
    }

    /// Frame table for the current inputs.
    pub fn frame_table(&self) -> TraceResult<Rc<FrameTable>> {
        self.store.read(self.cells.frame_table)
    }

    /// Outline of the stroke drawn so far at the current frame.
    pub fn outline(&self) -> TraceResult<Rc<BezPath>> {
        self.store.read(self.cells.current_outline)
    }

    /// Replace the input geometry.
    pub fn set_geometry(&mut self, geometry: LogoGeometry) -> TraceResult<()> {
        self.store.write(self.cells.geometry, geometry)
    }

    /// Change the flattening density.
    pub fn set_iterations(&mut self, iterations: usize) -> TraceResult<()> {
        self.store.write(self.cells.iterations, iterations)
    }

    /// Change the frame count. A current frame past the new end moves to the last frame first.
    pub fn set_num_frames(&mut self, num_frames: usize) -> TraceResult<()> {
        if num_frames < 2 {
            return Err(TraceError::config(format!(
                "num_frames must be at least 2, got {num_frames}"
            )));
        }
        if self.frame()? >= num_frames {
            tracing::debug!(num_frames, "moving current frame to the new last frame");
            self.store.write(self.cells.frame, num_frames - 1)?;
        }
        self.store.write(self.cells.num_frames, num_frames)
    }

    /// Toggle measuring boundaries on the animation path.
    pub fn set_project_onto_animation(&mut self, project: bool) -> TraceResult<()> {
        self.store.write(self.cells.project_onto_animation, project)
    }

    /// Move to `frame`, which must be below the frame count.
    pub fn set_frame(&mut self, frame: usize) -> TraceResult<()> {
        let num_frames = *self.store.read(self.cells.num_frames)?;
        if frame >= num_frames {
            return Err(TraceError::range(format!(
                "frame {frame} out of range (have {num_frames})"
            )));
        }
        self.store.write(self.cells.frame, frame)
    }

    /// Call `callback` with the new frame table whenever an input it depends on changes.
    pub fn subscribe_frame_table(
        &mut self,
        callback: impl Fn(&FrameTable) + 'static,
    ) -> TraceResult<()> {
        self.store
            .subscribe(self.cells.frame_table, move |_, t: &FrameTable| callback(t))
    }

    /// Call `callback` with the new outline whenever the frame or anything upstream changes.
    pub fn subscribe_outline(&mut self, callback: impl Fn(&BezPath) + 'static) -> TraceResult<()> {
        self.store
            .subscribe(self.cells.current_outline, move |_, p: &BezPath| callback(p))
    }
}

/// Lengths of a boundary path, measured either on its own samples or on those samples
/// re-projected onto the animation path.
fn boundary_lengths(
    samples: &[SampledPolyline],
    animation_samples: &[SampledPolyline],
    geometry: &LogoGeometry,
    project: bool,
) -> TraceResult<CumulativeLengths> {
    if !project {
        return Ok(cumulative_lengths(samples));
    }
    let projected = project_samples(samples, animation_samples, &geometry.animation)?;
    Ok(cumulative_lengths(&projected))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/pipeline.rs"]
mod tests;
