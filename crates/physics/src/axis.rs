//! Projection axes and the scalar ranges shapes cast onto them.
use crate::errors::*;
use crate::*;

/// A direction through the origin which shapes are projected onto for separating axis tests.
///
/// Axes are never drawn or collided with. The direction is always unit length: an axis can't be built from a
/// degenerate line or a zero vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axis {
    direction: V2,
}

impl Axis {
    pub fn from_direction(direction: V2) -> Result<Axis> {
        if !direction.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        if tolerance::is_zero(direction.length(), 0.0) {
            return Err(GeometryError::DegenerateGeometry);
        }

        Ok(Axis {
            direction: direction.normalize(),
        })
    }

    /// The axis perpendicular to a line, e.g. the normal of a polygon edge.
    pub fn normal_of(line: &Line) -> Result<Axis> {
        let normal = line.perpendicular_through(V2::ZERO)?;
        Ok(Axis {
            direction: normal.p2 - normal.p1,
        })
    }

    /// Unit direction of this axis.
    pub fn direction(&self) -> V2 {
        self.direction
    }

    /// Signed distance along the axis of the foot of the perpendicular from `point`.
    pub fn project_scalar(&self, point: &V2) -> f64 {
        self.direction.dot(point)
    }

    /// The foot of the perpendicular from `point` onto this axis.
    pub fn project_point(&self, point: &V2) -> V2 {
        self.direction * self.project_scalar(point)
    }

    /// This axis turned by `angle` radians counterclockwise.
    #[must_use = "This doesn't mutate the axis in place"]
    pub fn rotated(&self, angle: f64) -> Axis {
        Axis {
            direction: self.direction.rotate_around(angle, V2::ZERO),
        }
    }
}

/// A closed interval `[min, max]` along some [Axis].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionRange {
    pub min: f64,
    pub max: f64,
}

impl ProjectionRange {
    /// Build a range from two values in either order.
    pub fn new(a: f64, b: f64) -> ProjectionRange {
        ProjectionRange {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The range covering a single value.
    pub fn point(t: f64) -> ProjectionRange {
        ProjectionRange { min: t, max: t }
    }

    /// The range of a segment lying along (or projected onto) `axis`.
    pub fn of_segment(segment: &Line, axis: &Axis) -> ProjectionRange {
        ProjectionRange::new(axis.project_scalar(&segment.p1), axis.project_scalar(&segment.p2))
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Do the two ranges share at least one point?
    ///
    /// They overlap iff the sum of their lengths covers the span from the lowest minimum to the highest maximum, so
    /// touching ranges overlap.
    pub fn overlaps(&self, other: &ProjectionRange) -> bool {
        let span = self.max.max(other.max) - self.min.min(other.min);
        self.length() + other.length() >= span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;

    #[test]
    fn test_zero_direction_is_rejected() {
        assert_eq!(
            Axis::from_direction(V2::ZERO),
            Err(GeometryError::DegenerateGeometry)
        );
        assert_eq!(
            Axis::normal_of(&Line::new(V2::new(1.0, 1.0), V2::new(1.0, 1.0))),
            Err(GeometryError::DegenerateGeometry)
        );
    }

    #[test]
    fn test_normal_is_unit_and_perpendicular() -> Result<()> {
        let edge = Line::new(V2::new(1.0, 1.0), V2::new(4.0, 5.0));
        let axis = Axis::normal_of(&edge)?;
        assert_relative_eq!(axis.direction().length(), 1.0);
        assert_relative_eq!(axis.direction().dot(&(edge.p2 - edge.p1)), 0.0, epsilon = 1e-12);
        // The edge's own left-hand normal.
        assert_relative_eq!(axis.direction().x, -0.8, epsilon = 1e-12);
        assert_relative_eq!(axis.direction().y, 0.6, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_overlap() {
        let a = ProjectionRange::new(3.0, 1.0);
        assert!(a.overlaps(&ProjectionRange::new(2.0, 5.0)));
        assert!(a.overlaps(&ProjectionRange::new(3.0, 5.0)));
        assert!(!a.overlaps(&ProjectionRange::new(3.5, 5.0)));
        assert!(a.overlaps(&ProjectionRange::point(2.0)));
        assert!(ProjectionRange::new(0.0, 10.0).overlaps(&ProjectionRange::new(4.0, 5.0)));
    }
}
