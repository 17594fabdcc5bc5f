//! Test collision between a convex polygon and a circle.
use std::iter::once;

use crate::collision_tests::sat::*;
use crate::*;

/// Separating axis test using the polygon's edge normals plus one axis toward the polygon feature nearest the
/// circle's center.
pub(crate) fn polygon_circle_test(polygon: &Polygon, circle: &Circle) -> bool {
    let extra = match nearest_feature_axis(circle.get_center(), polygon) {
        Some(a) => a,
        None => return true,
    };

    no_separating_axis(
        polygon.get_axes().iter().chain(once(&extra)),
        |axis| project_polygon(polygon, axis),
        |axis| project_circle(circle, axis),
    )
}
