mod intersect;
mod point_on_curve;

pub use intersect::CurveCurveIntersect;
pub use point_on_curve::PointOnCurve;
