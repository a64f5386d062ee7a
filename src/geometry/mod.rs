//! Bezier math and the normalized path model.

/// Scalar cubic evaluation, tangents and subdivision.
pub mod bezier;
/// Line and ray intersection.
pub mod intersect;
/// Curves, sections, paths and the three-path logo geometry.
pub mod path;
/// Approximate re-projection of samples onto another path.
pub mod projection;
