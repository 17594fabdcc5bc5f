//! Test collision between two convex polygons.
use crate::collision_tests::sat::*;
use crate::*;

/// Separating axis test over the edge normals of both polygons.
pub(crate) fn polygon_polygon_test(p1: &Polygon, p2: &Polygon) -> bool {
    no_separating_axis(
        p1.get_axes().iter().chain(p2.get_axes()),
        |axis| project_polygon(p1, axis),
        |axis| project_polygon(p2, axis),
    )
}
