//! logo-trace computes the frames of an animated stroke that draws a logo outline.
//!
//! A logo is described by two boundary paths (inner and outer) and an animation path, all split
//! into the same number of sections. Progress along the animation path's arc length drives both
//! boundaries, section by section, so the filled stroke between them grows in lockstep.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: an Inkscape drawing with labeled paths becomes a [`LogoGeometry`]
//! 2. **Flatten**: every section is sampled into a [`SampledPolyline`] tagged with curve and `t`
//! 3. **Tabulate**: running arc lengths per sample ([`CumulativeLengths`])
//! 4. **Map**: a length on the animation path becomes a [`LengthRatioPosition`], then a
//!    [`DrawPosition`] on each boundary
//! 5. **Frame table**: one draw position pair per frame ([`FrameTable`]), rendered as a closed
//!    outline by [`frame_outline`]
//!
//! [`LogoPipeline`] wires these stages through a reactive [`Store`] so that editing an input
//! recomputes only what depends on it.
//!
//! Everything is single-threaded, synchronous and deterministic: the same input always yields
//! the same frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod frames;
mod geometry;
mod parse;
mod pipeline;
mod progress;
mod sampling;
mod store;
mod trace;

pub use config::TraceConfig;
pub use foundation::core::{BezPath, Ctrl4, PageSize, Point, Vec2};
pub use foundation::error::{TraceError, TraceResult};
pub use foundation::math::{inverse_lerp, lerp};
pub use frames::outline::frame_outline;
pub use frames::table::{FramePosition, FrameTable, PathTables, build_frame_table, length_at_frame};
pub use geometry::bezier::{derivative, evaluate, split, tangent};
pub use geometry::intersect::{line_intersection, ray_intersection};
pub use geometry::path::{CubicSegment, LogoGeometry, Section, StrokePath};
pub use geometry::projection::{project_point, project_samples};
pub use parse::animation::{AnimationParams, SegmentParams, SlopeLine};
pub use parse::label::PathLabel;
pub use parse::path_data::{DrawCommand, OpenPath};
pub use pipeline::{LogoPipeline, PipelineCells};
pub use progress::draw_position::{DrawPosition, bracket, ratio_to_draw_position};
pub use progress::section_ratio::{LengthRatioPosition, length_to_section_ratio};
pub use sampling::arc_length::{CumulativeLengths, cumulative_lengths};
pub use sampling::flatten::{SamplePoint, SampledPolyline, flatten_path, flatten_section};
pub use store::{CellId, Store, Upstream};
pub use trace::truncate::{TruncatedStroke, truncate_by_length};
