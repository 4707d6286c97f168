use super::Point2;

/// An axis-aligned bounding box in 2D.
///
/// The empty box holds `+∞` in `min` and `−∞` in `max`, so including any
/// point produces a valid box, and it never intersects anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Default for Box2 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Box2 {
    /// Creates a box from its corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Returns the empty box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Returns the smallest box containing every point.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Self {
        points.into_iter().fold(Self::empty(), |mut bb, p| {
            bb.include_point(p);
            bb
        })
    }

    /// Returns `true` when the box contains no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    /// Grows the box to contain `p`.
    pub fn include_point(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns the box grown by `padding` on every side. The empty box stays empty.
    #[must_use]
    pub fn expand(&self, padding: f64) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: Point2::new(self.min.x - padding, self.min.y - padding),
            max: Point2::new(self.max.x + padding, self.max.y + padding),
        }
    }

    /// Returns `true` if the boxes overlap or touch.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Width along x, or 0 for the empty box.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.x - self.min.x
        }
    }

    /// Height along y, or 0 for the empty box.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.y - self.min.y
        }
    }

    /// The larger of width and height.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn empty_box_never_intersects() {
        let empty = Box2::empty();
        assert!(empty.is_empty());
        assert!(!empty.intersects(&empty));
        let unit = Box2::new(p(0.0, 0.0), p(1.0, 1.0));
        assert!(!empty.intersects(&unit));
        assert!(!unit.intersects(&empty));
        assert!(empty.expand(10.0).is_empty());
        assert!(empty.max_extent().abs() < f64::EPSILON);
    }

    #[test]
    fn from_points_and_extent() {
        let bb = Box2::from_points(&[p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)]);
        assert_eq!(bb.min, p(-2.0, -1.0));
        assert_eq!(bb.max, p(4.0, 5.0));
        assert!((bb.width() - 6.0).abs() < f64::EPSILON);
        assert!((bb.max_extent() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Box2::new(p(0.0, 0.0), p(1.0, 1.0));
        let b = Box2::new(p(1.0, 0.5), p(2.0, 2.0));
        assert!(a.intersects(&b));
        let c = Box2::new(p(1.5, 0.0), p(2.0, 1.0));
        assert!(!a.intersects(&c));
        assert!(a.expand(0.5).intersects(&c));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = Box2::new(p(0.0, 0.0), p(1.0, 2.0));
        assert_eq!(a.union(&Box2::empty()), a);
        let b = Box2::new(p(-1.0, 1.0), p(0.5, 3.0));
        let u = a.union(&b);
        assert_eq!(u.min, p(-1.0, 0.0));
        assert_eq!(u.max, p(1.0, 3.0));
    }
}
