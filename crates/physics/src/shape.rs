//! A shape is one of the concrete shape types behind an enum for collision
//! detection.
use crate::*;

/// Rigid motions every shape supports.
pub trait Transform {
    /// Move every defining point by `offset`.
    fn translate(&mut self, offset: V2);

    /// Rotate by `angle` radians counterclockwise about the shape's own center.
    fn rotate(&mut self, angle: f64);

    /// Rotate by `angle` radians counterclockwise about `center`.
    fn rotate_around(&mut self, angle: f64, center: V2);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn get_bounding_box(&self) -> Aabb {
        match self {
            Shape::Line(ref l) => l.get_bounding_box(),
            Shape::Circle(ref c) => c.get_bounding_box(),
            Shape::Polygon(ref p) => p.get_bounding_box(),
        }
    }

    pub fn contains_point(&self, point: &V2) -> bool {
        match self {
            Shape::Line(ref l) => l.contains_point(point),
            Shape::Circle(ref c) => c.contains_point(point),
            Shape::Polygon(ref p) => p.contains_point(point),
        }
    }

    /// Test if this shape collides with another.
    ///
    /// Both orders of every pair go through the same test, so `a.collides_with(b) == b.collides_with(a)`.
    pub fn collides_with(&self, other: &Shape) -> bool {
        use crate::collision_tests::*;
        use Shape::*;

        match (self, other) {
            (Line(ref a), Line(ref b)) => line_line_test(a, b),
            (Circle(ref a), Circle(ref b)) => circle_circle_test(a, b),
            (Polygon(ref a), Polygon(ref b)) => polygon_polygon_test(a, b),
            (Line(ref l), Circle(ref c)) | (Circle(ref c), Line(ref l)) => line_circle_test(l, c),
            (Line(ref l), Polygon(ref p)) | (Polygon(ref p), Line(ref l)) => line_polygon_test(l, p),
            (Polygon(ref p), Circle(ref c)) | (Circle(ref c), Polygon(ref p)) => {
                polygon_circle_test(p, c)
            }
        }
    }
}

impl Transform for Shape {
    fn translate(&mut self, offset: V2) {
        match self {
            Shape::Line(l) => l.translate(offset),
            Shape::Circle(c) => c.translate(offset),
            Shape::Polygon(p) => p.translate(offset),
        }
    }

    fn rotate(&mut self, angle: f64) {
        match self {
            Shape::Line(l) => l.rotate(angle),
            Shape::Circle(c) => c.rotate(angle),
            Shape::Polygon(p) => p.rotate(angle),
        }
    }

    fn rotate_around(&mut self, angle: f64, center: V2) {
        match self {
            Shape::Line(l) => l.rotate_around(angle, center),
            Shape::Circle(c) => c.rotate_around(angle, center),
            Shape::Polygon(p) => p.rotate_around(angle, center),
        }
    }
}

impl From<Line> for Shape {
    fn from(other: Line) -> Shape {
        Shape::Line(other)
    }
}

impl From<Circle> for Shape {
    fn from(other: Circle) -> Shape {
        Shape::Circle(other)
    }
}

impl From<Polygon> for Shape {
    fn from(other: Polygon) -> Shape {
        Shape::Polygon(other)
    }
}
