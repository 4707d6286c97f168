pub mod angle_interval;
pub mod arc_2d;
pub mod box_2d;
pub mod intersect_2d;
pub mod refine_2d;

pub use angle_interval::AngleInterval;
pub use box_2d::Box2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Homogeneous 2D coordinates `(w·x, w·y, w)`.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Smallest distance threshold used when accepting a numerical result.
///
/// Keeps `distance_epsilon = 0` usable: exact roots still carry round-off.
pub const MIN_ACCEPT_DISTANCE: f64 = 1e-9;

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp_point(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Returns `true` when both coordinates are finite.
#[must_use]
pub fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
