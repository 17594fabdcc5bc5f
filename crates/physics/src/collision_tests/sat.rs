//! Projection helpers shared by the separating axis tests.
use crate::*;

pub(crate) fn project_polygon(polygon: &Polygon, axis: &Axis) -> ProjectionRange {
    ProjectionRange::of_segment(&polygon.widest_projection(axis), axis)
}

pub(crate) fn project_line(line: &Line, axis: &Axis) -> ProjectionRange {
    ProjectionRange::of_segment(&line.project_onto(axis), axis)
}

pub(crate) fn project_circle(circle: &Circle, axis: &Axis) -> ProjectionRange {
    ProjectionRange::of_segment(&circle.project_onto(axis), axis)
}

/// Run the separating axis test: the shapes overlap iff no axis separates their projections.
pub(crate) fn no_separating_axis<'a>(
    axes: impl IntoIterator<Item = &'a Axis>,
    mut project_a: impl FnMut(&Axis) -> ProjectionRange,
    mut project_b: impl FnMut(&Axis) -> ProjectionRange,
) -> bool {
    axes.into_iter()
        .all(|axis| project_a(axis).overlaps(&project_b(axis)))
}

/// The feature of `polygon` closest to `point`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum NearestFeature {
    /// Index of an edge whose perpendicular foot from the point lands on the edge.
    Edge(usize),
    /// Index of a vertex.
    Vertex(usize),
}

/// Find the feature of `polygon` nearest to `point`.
///
/// An edge only counts when the perpendicular foot lands on it; otherwise a vertex is nearer.  On ties, edges win,
/// except that a point sitting on a vertex always reports that vertex.
pub(crate) fn nearest_feature(point: &V2, polygon: &Polygon) -> NearestFeature {
    if let Some(i) = polygon
        .get_points()
        .iter()
        .position(|v| tolerance::points_coincide(v, point))
    {
        return NearestFeature::Vertex(i);
    }

    let mut best: Option<(f64, NearestFeature)> = None;

    for (i, edge) in polygon.edges().enumerate() {
        let along = edge.p2 - edge.p1;
        let t = along.dot(&(*point - edge.p1)) / along.length_squared();
        if !(0.0..=1.0).contains(&t) {
            continue;
        }
        let foot = edge.p1 + along * t;
        let dist = foot.distance_squared(point);
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, NearestFeature::Edge(i)));
        }
    }

    for (i, vertex) in polygon.get_points().iter().enumerate() {
        let dist = vertex.distance_squared(point);
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, NearestFeature::Vertex(i)));
        }
    }

    // Polygons always have vertices.
    best.map_or(NearestFeature::Vertex(0), |(_, f)| f)
}

/// The extra axis for a circle against a polygon: the normal of the nearest edge, or the direction from the nearest
/// vertex to the center.
///
/// Returns `None` when the center sits on the nearest vertex, in which case there is no direction to use and the
/// shapes certainly touch.
pub(crate) fn nearest_feature_axis(center: &V2, polygon: &Polygon) -> Option<Axis> {
    match nearest_feature(center, polygon) {
        NearestFeature::Edge(i) => Some(polygon.get_axes()[i]),
        NearestFeature::Vertex(i) => {
            let vertex = polygon.get_points()[i];
            if tolerance::points_coincide(&vertex, center) {
                return None;
            }
            Axis::from_direction(*center - vertex).ok()
        }
    }
}
