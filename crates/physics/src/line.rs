//! A line segment.
use crate::errors::*;
use crate::*;

/// A segment between two points.
///
/// Segments may be degenerate (both endpoints coincide).  A degenerate segment behaves as a point for containment
/// and collision, but has no direction, so asking it for an equation, axis, or perpendicular is an error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub p1: V2,
    pub p2: V2,
}

/// The implicit form `a*x + b*y + c = 0` of the infinite line through a segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEquation {
    pub fn evaluate(&self, point: &V2) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }
}

impl Line {
    pub const fn new(p1: V2, p2: V2) -> Line {
        Line { p1, p2 }
    }

    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    pub fn midpoint(&self) -> V2 {
        (self.p1 + self.p2) / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        tolerance::points_coincide(&self.p1, &self.p2)
    }

    fn magnitude(&self) -> f64 {
        tolerance::magnitude([&self.p1, &self.p2])
    }

    /// Unit vector from `p1` toward `p2`.
    pub fn direction(&self) -> Result<V2> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateGeometry);
        }
        Ok((self.p2 - self.p1).normalize())
    }

    /// Get `(a, b, c)` such that `a*x + b*y + c = 0` passes through both endpoints.
    pub fn line_equation(&self) -> Result<LineEquation> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateGeometry);
        }

        let a = self.p1.y - self.p2.y;
        let b = self.p2.x - self.p1.x;
        let c = -(a * self.p1.x + b * self.p1.y);
        Ok(LineEquation { a, b, c })
    }

    /// Intersect the infinite lines through two segments with Cramer's rule.
    ///
    /// Returns `Ok(None)` when the lines are parallel or coincident; telling those apart is up to the caller.
    pub fn intersection(&self, other: &Line) -> Result<Option<V2>> {
        let e1 = self.line_equation()?;
        let e2 = other.line_equation()?;

        let det = e1.a * e2.b - e2.a * e1.b;
        // det is the cross product of the two direction vectors, so this is the sine of the angle between them.
        if tolerance::is_zero(det / (self.length() * other.length()), 1.0) {
            return Ok(None);
        }

        let x = (e1.b * e2.c - e2.b * e1.c) / det;
        let y = (e2.a * e1.c - e1.a * e2.c) / det;
        Ok(Some(V2::new(x, y)))
    }

    /// Distance from `point` to the infinite line through this segment.
    pub fn distance_to_point(&self, point: &V2) -> Result<f64> {
        let eq = self.line_equation()?;
        Ok(eq.evaluate(point).abs() / (eq.a * eq.a + eq.b * eq.b).sqrt())
    }

    /// The foot of the perpendicular from `point` onto the infinite line through this segment.
    pub fn project_point(&self, point: &V2) -> Result<V2> {
        let dir = self.direction()?;
        Ok(self.p1 + dir * dir.dot(&(*point - self.p1)))
    }

    /// The unit-length line through `point` perpendicular to this one.
    pub fn perpendicular_through(&self, point: V2) -> Result<Line> {
        let normal = self.direction()?.perpendicular();
        Ok(Line::new(point, point + normal))
    }

    /// Project both endpoints onto `axis`, giving this segment's shadow.
    pub fn project_onto(&self, axis: &Axis) -> Line {
        Line::new(axis.project_point(&self.p1), axis.project_point(&self.p2))
    }

    /// Is `point` on this segment, endpoints included?
    pub fn contains_point(&self, point: &V2) -> bool {
        if self.is_degenerate() {
            return tolerance::points_coincide(point, &self.p1);
        }

        let be = self.p2 - self.p1;
        let bp = *point - self.p1;
        let be_len = be.length();
        let tol = tolerance::scaled(self.magnitude().max(tolerance::magnitude([point])));

        // The cross product over |be| is the distance from the point to the line.
        if (be.cross(&bp) / be_len).abs() > tol {
            return false;
        }

        bp.length() <= be_len + tol && be.dot(&bp) / be_len >= -tol
    }

    pub fn collides_with_line(&self, other: &Line) -> bool {
        crate::collision_tests::line_line_test(self, other)
    }

    pub fn collides_with_circle(&self, circle: &Circle) -> bool {
        crate::collision_tests::line_circle_test(self, circle)
    }

    pub fn collides_with_polygon(&self, polygon: &Polygon) -> bool {
        crate::collision_tests::line_polygon_test(self, polygon)
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::around(self.p1, self.p2)
    }
}

impl Transform for Line {
    fn translate(&mut self, offset: V2) {
        self.p1 += offset;
        self.p2 += offset;
    }

    fn rotate(&mut self, angle: f64) {
        let center = self.midpoint();
        self.rotate_around(angle, center);
    }

    fn rotate_around(&mut self, angle: f64, center: V2) {
        self.p1 = self.p1.rotate_around(angle, center);
        self.p2 = self.p2.rotate_around(angle, center);
    }
}
