//! Test collision between a segment and a circle.
use crate::collision_tests::line_line_test;
use crate::*;

/// If the circle crosses the segment's infinite line, build the chord where it does and test that against the
/// segment.  A tangent line (distance equal to the radius) does not count as crossing.
pub(crate) fn line_circle_test(line: &Line, circle: &Circle) -> bool {
    if line.is_degenerate() {
        return circle.contains_point(&line.p1);
    }

    let center = circle.get_center();
    let radius = circle.get_radius();
    let (distance, foot, direction) = match (
        line.distance_to_point(center),
        line.project_point(center),
        line.direction(),
    ) {
        (Ok(d), Ok(f), Ok(dir)) => (d, f, dir),
        _ => return false,
    };

    if distance >= radius {
        return false;
    }

    let half_chord = (radius * radius - distance * distance).sqrt();
    let chord = Line::new(foot + direction * half_chord, foot - direction * half_chord);
    line_line_test(&chord, line)
}
