use thiserror::Error;

/// Top-level error type for curvix.
#[derive(Debug, Error)]
pub enum CurvixError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Reasons a curve is singular and cannot be evaluated or intersected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("weight {index} is zero or too close to zero")]
    ZeroWeight { index: usize },
}

/// Errors raised while converting shape descriptions into curves.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("a polyline needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("segment {index} is invalid: {source}")]
    InvalidSegment {
        index: usize,
        #[source]
        source: GeometryError,
    },
}

/// Convenience type alias for results using [`CurvixError`].
pub type Result<T> = std::result::Result<T, CurvixError>;
