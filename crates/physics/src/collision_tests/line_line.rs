//! Test collision between two segments.
use crate::*;

pub(crate) fn line_line_test(a: &Line, b: &Line) -> bool {
    // Degenerate segments are points.
    if a.is_degenerate() {
        return b.contains_point(&a.p1);
    }
    if b.is_degenerate() {
        return a.contains_point(&b.p1);
    }

    match a.intersection(b) {
        Ok(Some(p)) => a.contains_point(&p) && b.contains_point(&p),
        // Parallel: the segments only meet if they share a line and one holds an endpoint of the other.
        Ok(None) | Err(_) => {
            a.contains_point(&b.p1)
                || a.contains_point(&b.p2)
                || b.contains_point(&a.p1)
                || b.contains_point(&a.p2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(V2::new(x1, y1), V2::new(x2, y2))
    }

    #[test]
    fn test_crossing_and_not() {
        assert!(!line_line_test(
            &line(0.0, 0.0, 1.0, 2.0),
            &line(1.0, 1.0, 2.0, 0.0)
        ));
        assert!(line_line_test(
            &line(0.0, 0.0, 2.0, 2.0),
            &line(0.0, 2.0, 2.0, 0.0)
        ));
    }

    #[test]
    fn test_colinear() {
        let base = line(0.0, 0.0, 1.0, 2.0);
        assert!(line_line_test(&base, &line(0.5, 1.0, 1.5, 3.0)));
        assert!(!line_line_test(&base, &line(1.5, 3.0, 2.5, 5.0)));
        // One segment swallows the other.
        assert!(line_line_test(&line(-1.0, -2.0, 2.0, 4.0), &base));
    }

    #[test]
    fn test_degenerate() {
        let base = line(0.0, 0.0, 2.0, 0.0);
        assert!(line_line_test(&base, &line(1.0, 0.0, 1.0, 0.0)));
        assert!(!line_line_test(&line(1.0, 1.0, 1.0, 1.0), &base));
        assert!(line_line_test(
            &line(1.0, 1.0, 1.0, 1.0),
            &line(1.0, 1.0, 1.0, 1.0)
        ));
    }
}
