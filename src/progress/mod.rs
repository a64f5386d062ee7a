//! Two-stage progress mapping.
//!
//! An absolute length along the animation path is first turned into a section index plus a
//! length ratio ([`section_ratio`]). That ratio is then mapped independently onto the inner and
//! outer paths' own curves ([`draw_position`]), which keeps both boundaries in the same section.

/// Length ratio to curve index and bezier parameter.
pub mod draw_position;
/// Absolute length to section index and length ratio.
pub mod section_ratio;
