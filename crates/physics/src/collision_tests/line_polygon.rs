//! Test collision between a segment and a convex polygon.
use std::iter::once;

use crate::collision_tests::sat::*;
use crate::*;

/// The polygon's edge normals are not enough on their own: the separating axis may be the segment's normal.
pub(crate) fn line_polygon_test(line: &Line, polygon: &Polygon) -> bool {
    let line_axis = match Axis::normal_of(line) {
        Ok(a) => a,
        Err(_) => return polygon.contains_point(&line.p1),
    };

    no_separating_axis(
        polygon.get_axes().iter().chain(once(&line_axis)),
        |axis| project_line(line, axis),
        |axis| project_polygon(polygon, axis),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(V2::new(x1, y1), V2::new(x2, y2))
    }

    fn triangle() -> Polygon {
        Polygon::new(vec![V2::new(1.0, 1.0), V2::new(4.0, 1.0), V2::new(3.0, 3.0)]).unwrap()
    }

    #[test]
    fn test_crossing() {
        assert!(line_polygon_test(&line(0.0, 2.0, 5.0, 2.0), &triangle()));
        assert!(line_polygon_test(&line(2.5, 1.5, 3.0, 1.5), &triangle()));
        assert!(!line_polygon_test(&line(0.0, 4.0, 5.0, 4.0), &triangle()));
    }

    /// Every edge normal of the triangle sees an overlap here; only the segment's own normal separates them.
    #[test]
    fn test_separated_only_by_line_normal() {
        let segment = line(2.0, 4.2, 4.2, 2.0);
        for axis in triangle().get_axes() {
            assert!(project_line(&segment, axis).overlaps(&project_polygon(&triangle(), axis)));
        }
        assert!(!line_polygon_test(&segment, &triangle()));
    }

    #[test]
    fn test_degenerate_segment() {
        assert!(line_polygon_test(&line(3.0, 2.0, 3.0, 2.0), &triangle()));
        assert!(!line_polygon_test(&line(1.0, 3.0, 1.0, 3.0), &triangle()));
    }
}
