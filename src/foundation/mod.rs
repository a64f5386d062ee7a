//! Shared primitives: error taxonomy, re-exported geometry types and scalar helpers.

/// Page size and re-exported kurbo types.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Scalar interpolation.
pub mod math;
