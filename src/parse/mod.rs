//! Inkscape drawing input.
//!
//! Two layouts are understood. The paired layout labels each section's boundaries and animation
//! path `inner{n}`, `outer{n}` and `anim{n}` ([`LogoGeometry::from_svg_str`]). The segment layout
//! describes one curve per segment with explicit start/end slopes and a mask
//! ([`animation::AnimationParams::from_svg_str`]). Only labeled `path` elements that are direct
//! children of the root element are read.
//!
//! [`LogoGeometry::from_svg_str`]: crate::geometry::path::LogoGeometry::from_svg_str

/// Segment layout.
pub mod animation;
/// Paired layout and shared document helpers.
pub mod document;
/// Label grammar.
pub mod label;
/// Path data restricted to move, line and cubic commands.
pub mod path_data;
