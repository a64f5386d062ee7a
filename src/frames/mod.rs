//! Per-frame draw positions and the outlines rendered from them.

/// Closed partial-stroke outline for a single frame.
pub mod outline;
/// Frame table construction.
pub mod table;
