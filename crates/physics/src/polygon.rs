//! A convex polygon.
use smallvec::SmallVec;

use crate::errors::*;
use crate::*;

/// Polygons need at least this many vertices to enclose any area.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A convex polygon, given as an ordered list of vertices.
///
/// Convexity and consistent winding are the caller's responsibility and are not checked: separating axis tests are
/// only meaningful for convex shapes.  Construction does check that there are at least [MIN_POLYGON_VERTICES]
/// vertices and that no edge is degenerate, which guarantees every edge has a normal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<V2>,
    /// One normal per edge, in edge order.  These are directions only, so translation leaves them alone; rotation
    /// turns them with the vertices.
    axes: SmallVec<[Axis; 8]>,
}

/// Iterate over `(p[i], p[i + 1])`, wrapping around at the end.
fn iter_edges(points: &[V2]) -> impl Iterator<Item = Line> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| Line::new(*a, *b))
}

/// Area of a triangle, by Heron's formula on its side lengths.
pub fn triangle_area(a: &V2, b: &V2, c: &V2) -> f64 {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);
    let s = (ab + bc + ca) / 2.0;
    // Rounding can push the product slightly negative for slivers.
    (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
}

impl Polygon {
    pub fn new(points: impl Into<Vec<V2>>) -> Result<Polygon> {
        let points = points.into();
        if points.len() < MIN_POLYGON_VERTICES {
            return Err(GeometryError::InsufficientVertices {
                required: MIN_POLYGON_VERTICES,
                got: points.len(),
            });
        }
        if !points.iter().all(V2::is_finite) {
            return Err(GeometryError::NonFiniteCoordinate);
        }

        let axes = iter_edges(&points)
            .map(|e| Axis::normal_of(&e))
            .collect::<Result<SmallVec<_>>>()?;
        Ok(Polygon { points, axes })
    }

    pub fn get_points(&self) -> &[V2] {
        &self.points[..]
    }

    /// The edge normals, one per edge.
    pub fn get_axes(&self) -> &[Axis] {
        &self.axes[..]
    }

    /// The edges, including the closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        iter_edges(&self.points)
    }

    /// Split into the triangle fan `(p[0], p[i], p[i + 1])`.
    pub fn triangulate(&self) -> impl Iterator<Item = [V2; 3]> + '_ {
        let p0 = self.points[0];
        self.points[1..]
            .windows(2)
            .map(move |w| [p0, w[0], w[1]])
    }

    pub fn area(&self) -> f64 {
        self.triangulate().map(|[a, b, c]| triangle_area(&a, &b, &c)).sum()
    }

    /// The area-weighted average of the centroids of the triangle fan.
    ///
    /// Polygons with no area (all vertices on one line) fall back to the mean of their vertices.
    pub fn centroid(&self) -> V2 {
        let (weighted, total) = self.triangulate().fold((V2::ZERO, 0.0), |(acc, total), [a, b, c]| {
            let area = triangle_area(&a, &b, &c);
            (acc + (a + b + c) / 3.0 * area, total + area)
        });

        // Compared against the polygon's own size, not its distance from the origin.
        let bounds = self.get_bounding_box();
        let extent_squared = bounds.get_width().powi(2) + bounds.get_height().powi(2);
        if total <= tolerance::EPSILON * extent_squared {
            let sum = self.points.iter().fold(V2::ZERO, |acc, p| acc + *p);
            return sum / self.points.len() as f64;
        }

        weighted / total
    }

    /// Project every vertex onto `axis` and return the segment between the two projections furthest apart.
    ///
    /// The projections are points on the axis line, so the span is tracked as a pair of points: each new point
    /// replaces whichever end of the current pair leaves the longer segment, if that beats the current one.
    pub fn widest_projection(&self, axis: &Axis) -> Line {
        let mut projected = self.points.iter().map(|p| axis.project_point(p));
        let first = projected.next().unwrap_or(V2::ZERO);
        let mut widest = Line::new(first, first);
        let mut span = 0.0;

        for p in projected {
            let to_p1 = p.distance(&widest.p1);
            let to_p2 = p.distance(&widest.p2);
            if to_p1.max(to_p2) <= span {
                continue;
            }
            if to_p1 >= to_p2 {
                widest.p2 = p;
                span = to_p1;
            } else {
                widest.p1 = p;
                span = to_p2;
            }
        }

        widest
    }

    /// Is `point` inside or on the boundary of this polygon?
    ///
    /// The point is treated as a zero-length shape and must overlap the polygon on every edge axis.
    pub fn contains_point(&self, point: &V2) -> bool {
        self.axes.iter().all(|axis| {
            let shadow = ProjectionRange::of_segment(&self.widest_projection(axis), axis);
            shadow.overlaps(&ProjectionRange::point(axis.project_scalar(point)))
        })
    }

    pub fn collides_with_line(&self, line: &Line) -> bool {
        crate::collision_tests::line_polygon_test(line, self)
    }

    pub fn collides_with_circle(&self, circle: &Circle) -> bool {
        crate::collision_tests::polygon_circle_test(self, circle)
    }

    pub fn collides_with_polygon(&self, other: &Polygon) -> bool {
        crate::collision_tests::polygon_polygon_test(self, other)
    }

    pub fn get_bounding_box(&self) -> Aabb {
        self.points[1..]
            .iter()
            .fold(Aabb::around(self.points[0], self.points[0]), |acc, p| {
                acc.expand_to(*p)
            })
    }
}

impl Transform for Polygon {
    fn translate(&mut self, offset: V2) {
        for p in self.points.iter_mut() {
            *p += offset;
        }
    }

    fn rotate(&mut self, angle: f64) {
        let center = self.centroid();
        self.rotate_around(angle, center);
    }

    fn rotate_around(&mut self, angle: f64, center: V2) {
        for p in self.points.iter_mut() {
            *p = p.rotate_around(angle, center);
        }
        for a in self.axes.iter_mut() {
            *a = a.rotated(angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;
    use proptest::prelude::*;

    fn poly(points: &[(f64, f64)]) -> Polygon {
        Polygon::new(points.iter().map(|p| V2::from(*p)).collect::<Vec<_>>())
            .expect("Test polygons are valid")
    }

    fn square() -> Polygon {
        poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Polygon::new(vec![V2::ZERO, V2::new(1.0, 0.0)]),
            Err(GeometryError::InsufficientVertices {
                required: 3,
                got: 2
            })
        );
        assert_eq!(
            Polygon::new(vec![V2::ZERO, V2::ZERO, V2::new(1.0, 1.0)]),
            Err(GeometryError::DegenerateGeometry)
        );
        assert_eq!(
            Polygon::new(vec![V2::ZERO, V2::new(f64::NAN, 0.0), V2::new(1.0, 1.0)]),
            Err(GeometryError::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_axes_per_edge() {
        let s = square();
        assert_eq!(s.get_axes().len(), 4);
        assert_eq!(s.edges().count(), 4);
        let closing = s.edges().last().expect("Has edges");
        assert_eq!(closing, Line::new(V2::new(0.0, 2.0), V2::new(0.0, 0.0)));
        for (edge, axis) in s.edges().zip(s.get_axes()) {
            assert_relative_eq!(axis.direction().dot(&(edge.p2 - edge.p1)), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_area_and_centroid() {
        let s = square();
        assert_relative_eq!(s.area(), 4.0, epsilon = 1e-12);
        let c = s.centroid();
        assert_relative_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);

        let t = poly(&[(1.0, 1.0), (4.0, 1.0), (3.0, 3.0)]);
        assert_relative_eq!(t.area(), 3.0, epsilon = 1e-12);
        let c = t.centroid();
        assert_relative_eq!(c.x, 8.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_of_small_polygon_far_from_origin() {
        let near = poly(&[(0.0, 0.0), (0.2, 0.0), (0.2, 0.05), (0.0, 0.2)]);
        let c = near.centroid();
        assert_relative_eq!(c.x, 0.08, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.07, epsilon = 1e-12);

        let mut far = near.clone();
        far.translate(V2::new(1e4, 1e4));
        let c = far.centroid() - V2::new(1e4, 1e4);
        assert_relative_eq!(c.x, 0.08, epsilon = 1e-6);
        assert_relative_eq!(c.y, 0.07, epsilon = 1e-6);

        // Rotation pivots on that centroid, so it stays put.
        let before = far.centroid();
        far.rotate(1.0);
        let after = far.centroid();
        assert_relative_eq!(before.x, after.x, epsilon = 1e-6);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-6);
    }

    /// Heron's formula must be fed the triangle's own side lengths.  Feeding it each vertex's distance from the
    /// origin instead gives an unrelated number; this pins the side-length behavior.
    #[test]
    fn test_triangle_area_uses_side_lengths_not_origin_distances() {
        let (a, b, c) = (V2::new(11.0, 11.0), V2::new(14.0, 11.0), V2::new(13.0, 13.0));
        assert_relative_eq!(triangle_area(&a, &b, &c), 3.0, epsilon = 1e-12);

        let (da, db, dc) = (a.length(), b.length(), c.length());
        let s = (da + db + dc) / 2.0;
        let origin_variant = (s * (s - da) * (s - db) * (s - dc)).max(0.0).sqrt();
        assert!((origin_variant - 3.0).abs() > 1.0, "{}", origin_variant);
    }

    #[test]
    fn test_triangulate() {
        let pentagon = poly(&[(2.0, 3.5), (4.0, 3.0), (4.0, 5.0), (3.0, 5.5), (2.0, 4.0)]);
        let fan = pentagon.triangulate().collect::<Vec<_>>();
        assert_eq!(fan.len(), 3);
        for tri in fan.iter() {
            assert_eq!(tri[0], V2::new(2.0, 3.5));
        }
    }

    #[test]
    fn test_widest_projection() -> Result<()> {
        let s = square();
        let diagonal = Axis::from_direction(V2::new(1.0, 1.0))?;
        let widest = s.widest_projection(&diagonal);
        assert_relative_eq!(widest.length(), 8.0f64.sqrt(), epsilon = 1e-12);

        let x = Axis::from_direction(V2::new(1.0, 0.0))?;
        let widest = s.widest_projection(&x);
        assert_eq!(
            ProjectionRange::of_segment(&widest, &x),
            ProjectionRange { min: 0.0, max: 2.0 }
        );
        Ok(())
    }

    #[test]
    fn test_contains_point() {
        let s = square();
        assert!(s.contains_point(&V2::new(1.0, 1.0)));
        assert!(s.contains_point(&V2::new(2.0, 1.0)));
        assert!(s.contains_point(&V2::new(0.0, 0.0)));
        assert!(!s.contains_point(&V2::new(2.5, 1.0)));
        assert!(!s.contains_point(&V2::new(-0.1, -0.1)));
    }

    #[test]
    fn test_bounding_box() {
        let t = poly(&[(1.0, 1.0), (4.0, 1.0), (3.0, 3.0)]);
        let b = t.get_bounding_box();
        assert_eq!(*b.get_p1(), V2::new(1.0, 1.0));
        assert_eq!(*b.get_p2(), V2::new(4.0, 3.0));
    }

    #[test]
    fn test_rotated_axes_match_recomputed() {
        let mut t = poly(&[(1.0, 1.0), (4.0, 1.0), (3.0, 3.0)]);
        t.rotate(0.7);
        let fresh = Polygon::new(t.get_points().to_vec()).expect("Still valid");
        for (a, b) in t.get_axes().iter().zip(fresh.get_axes()) {
            assert_relative_eq!(a.direction().x, b.direction().x, epsilon = 1e-12);
            assert_relative_eq!(a.direction().y, b.direction().y, epsilon = 1e-12);
        }
    }

    fn arb_convex() -> impl Strategy<Value = Polygon> {
        // Points on a circle in increasing angle order are always convex.
        (
            -500.0..500.0f64,
            -500.0..500.0f64,
            1.0..100.0f64,
            proptest::collection::vec(0.0..1.0f64, 3..8),
        )
            .prop_map(|(cx, cy, r, mut fractions)| {
                fractions.sort_by(|a, b| a.total_cmp(b));
                fractions.dedup_by(|a, b| (*a - *b).abs() < 0.01);
                while fractions.len() < 3 {
                    let last = fractions.last().copied().unwrap_or(0.0);
                    fractions.push(last + 0.1);
                }
                let points = fractions
                    .iter()
                    .map(|f| {
                        let theta = f * std::f64::consts::TAU * 0.9;
                        V2::new(cx + r * theta.cos(), cy + r * theta.sin())
                    })
                    .collect::<Vec<_>>();
                Polygon::new(points).expect("Generated polygons are valid")
            })
    }

    proptest! {
        #[test]
        fn test_rotation_preserves_metrics(p in arb_convex(), angle in -10.0..10.0f64) {
            let mut rotated = p.clone();
            rotated.rotate(angle);
            prop_assert!(relative_eq!(rotated.area(), p.area(), epsilon = 1e-6, max_relative = 1e-9));
            let before = p.get_points();
            let after = rotated.get_points();
            for i in 0..before.len() {
                for j in 0..before.len() {
                    prop_assert!(relative_eq!(
                        before[i].distance(&before[j]),
                        after[i].distance(&after[j]),
                        epsilon = 1e-6
                    ));
                }
            }
            let (c1, c2) = (p.centroid(), rotated.centroid());
            prop_assert!(relative_eq!(c1.x, c2.x, epsilon = 1e-6));
            prop_assert!(relative_eq!(c1.y, c2.y, epsilon = 1e-6));
        }

        #[test]
        fn test_translation_round_trip(
            p in arb_convex(),
            dx in -1000.0..1000.0f64,
            dy in -1000.0..1000.0f64,
        ) {
            let mut moved = p.clone();
            moved.translate(V2::new(dx, dy));
            moved.translate(V2::new(-dx, -dy));
            for (a, b) in moved.get_points().iter().zip(p.get_points()) {
                prop_assert!(relative_eq!(a.x, b.x, epsilon = 1e-9));
                prop_assert!(relative_eq!(a.y, b.y, epsilon = 1e-9));
            }
            prop_assert_eq!(moved.get_axes(), p.get_axes());
        }

        #[test]
        fn test_widest_projection_matches_scalar_range(p in arb_convex(), theta in 0.0..std::f64::consts::TAU) {
            let axis = Axis::from_direction(V2::new(theta.cos(), theta.sin())).unwrap();
            let widest = ProjectionRange::of_segment(&p.widest_projection(&axis), &axis);
            let scalars = p.get_points().iter().map(|v| axis.project_scalar(v)).collect::<Vec<_>>();
            let min = scalars.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = scalars.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(relative_eq!(widest.min, min, epsilon = 1e-9));
            prop_assert!(relative_eq!(widest.max, max, epsilon = 1e-9));
        }
    }
}
