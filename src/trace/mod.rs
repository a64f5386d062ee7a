//! Length-limited polylines for previewing a stroke as it is drawn.

/// Truncation by cumulative length and the drawing tip.
pub mod truncate;
