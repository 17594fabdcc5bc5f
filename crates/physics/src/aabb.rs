//! An axis-aligned bounding box.
use crate::*;

/// An axis-aligned bounding box is specified by 2 points `p1` and `p2`, such
/// that `p1.x <= p2.x && p1.y <= p2.y`.
///
/// Unlike shapes, boxes may have zero width or height: the box of a horizontal line is flat.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Aabb {
    p1: V2,
    p2: V2,
}

impl Aabb {
    /// The box with `a` and `b` as opposite corners, in any order.
    pub fn around(a: V2, b: V2) -> Aabb {
        Aabb {
            p1: V2::new(a.x.min(b.x), a.y.min(b.y)),
            p2: V2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Grow this box just enough to contain `point`.
    #[must_use = "This doesn't mutate the box in place"]
    pub fn expand_to(&self, point: V2) -> Aabb {
        Aabb {
            p1: V2::new(self.p1.x.min(point.x), self.p1.y.min(point.y)),
            p2: V2::new(self.p2.x.max(point.x), self.p2.y.max(point.y)),
        }
    }

    pub fn get_p1(&self) -> &V2 {
        &self.p1
    }

    pub fn get_p2(&self) -> &V2 {
        &self.p2
    }

    pub fn get_width(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    pub fn get_height(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    /// Grow the box by `amount` on every side.
    #[must_use = "This doesn't mutate the box in place"]
    pub fn dilate(&self, amount: f64) -> Aabb {
        let amount = amount.max(0.0);
        Aabb {
            p1: V2::new(self.p1.x - amount, self.p1.y - amount),
            p2: V2::new(self.p2.x + amount, self.p2.y + amount),
        }
    }

    /// Do the boxes overlap?  Touching boxes count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.p1.x <= other.p2.x
            && other.p1.x <= self.p2.x
            && self.p1.y <= other.p2.y
            && other.p1.y <= self.p2.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_around() {
        let b = Aabb::around(V2::new(3.0, 1.0), V2::new(1.0, 5.0));
        assert_eq!(*b.get_p1(), V2::new(1.0, 1.0));
        assert_eq!(*b.get_p2(), V2::new(3.0, 5.0));
        approx::assert_relative_eq!(b.get_width(), 2.0);
        approx::assert_relative_eq!(b.get_height(), 4.0);
    }

    #[test]
    fn test_expand_to() {
        let b = Aabb::around(V2::new(1.0, 4.0), V2::new(1.0, 4.0))
            .expand_to(V2::new(-2.0, 3.0))
            .expand_to(V2::new(0.5, -1.0));
        assert_eq!(*b.get_p1(), V2::new(-2.0, -1.0));
        assert_eq!(*b.get_p2(), V2::new(1.0, 4.0));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::around(V2::new(0.0, 0.0), V2::new(1.0, 1.0));
        assert!(a.intersects(&Aabb::around(V2::new(0.5, 0.5), V2::new(2.0, 2.0))));
        assert!(a.intersects(&Aabb::around(V2::new(1.0, 0.0), V2::new(2.0, 1.0))));
        assert!(!a.intersects(&Aabb::around(V2::new(1.5, 0.0), V2::new(2.0, 1.0))));
        assert!(a
            .dilate(0.5)
            .intersects(&Aabb::around(V2::new(1.5, 0.0), V2::new(2.0, 1.0))));
    }

    proptest! {
        #[test]
        fn test_intersects_is_symmetric(
            x1 in -100.0..100.0f64,
            y1 in -100.0..100.0f64,
            x2 in -100.0..100.0f64,
            y2 in -100.0..100.0f64,
            w in 0.0..50.0f64,
            h in 0.0..50.0f64,
        ) {
            let a = Aabb::around(V2::new(x1, y1), V2::new(x1 + w, y1 + h));
            let b = Aabb::around(V2::new(x2, y2), V2::new(x2 + h, y2 + w));
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }
}
