//! A simple circle.
use crate::errors::*;
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: V2,
    radius: f64,
}

impl Circle {
    pub fn new(center: V2, radius: f64) -> Result<Circle> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate);
        }
        Ok(Circle { center, radius })
    }

    pub fn get_center(&self) -> &V2 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    pub fn get_bounding_box(&self) -> Aabb {
        let p1 = V2::new(self.center.x - self.radius, self.center.y - self.radius);
        let p2 = V2::new(self.center.x + self.radius, self.center.y + self.radius);
        Aabb::around(p1, p2)
    }

    /// Boundary inclusive.
    pub fn contains_point(&self, point: &V2) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// The circle's shadow on `axis`: a segment of length `2 * radius` centered on the projection of the center.
    pub fn project_onto(&self, axis: &Axis) -> Line {
        let foot = axis.project_point(&self.center);
        let half = axis.direction() * self.radius;
        Line::new(foot - half, foot + half)
    }

    pub fn collides_with_line(&self, line: &Line) -> bool {
        crate::collision_tests::line_circle_test(line, self)
    }

    pub fn collides_with_circle(&self, other: &Circle) -> bool {
        crate::collision_tests::circle_circle_test(self, other)
    }

    pub fn collides_with_polygon(&self, polygon: &Polygon) -> bool {
        crate::collision_tests::polygon_circle_test(polygon, self)
    }
}

impl Transform for Circle {
    fn translate(&mut self, offset: V2) {
        self.center += offset;
    }

    /// A circle is unchanged by rotation about its own center.
    fn rotate(&mut self, _angle: f64) {}

    fn rotate_around(&mut self, angle: f64, center: V2) {
        self.center = self.center.rotate_around(angle, center);
    }
}
