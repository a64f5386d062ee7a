//! Polyline approximation of stroke paths and arc-length tabulation.

/// Cumulative arc-length tables.
pub mod arc_length;
/// Bezier flattening into tagged sample points.
pub mod flatten;
