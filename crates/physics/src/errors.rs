#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    #[error("A line of near-zero length has no direction, equation, or perpendicular")]
    DegenerateGeometry,

    #[error("This operation needs at least {required} vertices but the polygon has {got}")]
    InsufficientVertices { required: usize, got: usize },

    #[error("Circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("Shapes may only be built from finite coordinates")]
    NonFiniteCoordinate,
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
