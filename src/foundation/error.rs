/// Convenience result type used across logo-trace.
pub type TraceResult<T> = Result<T, TraceError>;

/// Top-level error taxonomy used by the geometry pipeline and the store.
///
/// Every variant is fatal for the operation that produced it: the pipeline is pure and
/// deterministic, so retrying would reproduce the same failure.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    /// Malformed or missing labeled geometry in the input drawing.
    #[error("parse error: {0}")]
    Parse(String),

    /// Structural invariant violated while constructing paths (continuity, section counts).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// A tangent was requested on a curve whose four control points coincide.
    #[error("degenerate curve: all control points coincide")]
    DegenerateCurve,

    /// A lookup was given a length, ratio or index outside the tabulated range.
    #[error("range error: {0}")]
    Range(String),

    /// Misuse of the reactive store (writing a derived cell, foreign handles).
    #[error("store error: {0}")]
    Store(String),

    /// Invalid numeric configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraceError {
    /// Build a [`TraceError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`TraceError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`TraceError::Range`] value.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Build a [`TraceError::Store`] value.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Build a [`TraceError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
