// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle-segment intersection
//! Exact, division-minimized signed-volume test against a closed triangle

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Closed line segment from `p` to `q`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p: Point3<f64>,
    pub q: Point3<f64>,
}

impl Segment {
    pub fn new(p: Point3<f64>, q: Point3<f64>) -> Self {
        Self { p, q }
    }

    /// Point at parameter `t` (0 at `p`, 1 at `q`)
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        Point3::from(self.p.coords * (1.0 - t) + self.q.coords * t)
    }

    pub fn length(&self) -> f64 {
        (self.q - self.p).norm()
    }
}

impl From<(Point3<f64>, Point3<f64>)> for Segment {
    fn from((p, q): (Point3<f64>, Point3<f64>)) -> Self {
        Self::new(p, q)
    }
}

/// Intersect the triangle `(a, b, c)` with a segment.
///
/// The test is one-sided: the counter-clockwise winding of `(a, b, c)`
/// defines the front face, and only segments running from the front side
/// to the back side (`(p - q) . n > 0`) are accepted. Boundaries are
/// inclusive, so a segment touching an edge of the triangle or ending on
/// its plane counts as a hit.
pub fn triangle_segment_intersection(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    segment: &Segment,
) -> Option<Point3<f64>> {
    let p = &segment.p;
    let q = &segment.q;

    let ab = b - a;
    let ac = c - a;
    let qp = p - q;
    let n = ab.cross(&ac);

    let d = qp.dot(&n);
    if d <= 0.0 {
        return None;
    }

    let ap = p - a;
    let t = ap.dot(&n);
    if t < 0.0 || t > d {
        return None;
    }

    let e = qp.cross(&ap);
    let v = ac.dot(&e);
    if v < 0.0 || v > d {
        return None;
    }

    let w = -ab.dot(&e);
    if w < 0.0 || v + w > d {
        return None;
    }

    Some(segment.point_at(t / d))
}

/// Two-sided variant: tries `(a, b, c)` and then the opposite winding
/// `(a, c, b)`.
///
/// Reversing the winding negates the normal, so `d` changes sign and at
/// most one of the two attempts can pass the `d > 0` gate.
pub fn triangle_segment_intersection_two_sided(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    segment: &Segment,
) -> Option<Point3<f64>> {
    triangle_segment_intersection(a, b, c, segment)
        .or_else(|| triangle_segment_intersection(a, c, b, segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> [Point3<f64>; 3] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_segment_through_front_face() {
        let [a, b, c] = unit_triangle();
        let segment = Segment::new(Point3::new(0.25, 0.25, 1.0), Point3::new(0.25, 0.25, -1.0));

        let hit = triangle_segment_intersection(&a, &b, &c, &segment).unwrap();
        assert_relative_eq!(hit, Point3::new(0.25, 0.25, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_one_sided_rejects_back_face() {
        let [a, b, c] = unit_triangle();
        let segment = Segment::new(Point3::new(0.25, 0.25, -1.0), Point3::new(0.25, 0.25, 1.0));

        assert!(triangle_segment_intersection(&a, &b, &c, &segment).is_none());
        let hit = triangle_segment_intersection_two_sided(&a, &b, &c, &segment).unwrap();
        assert_relative_eq!(hit, Point3::new(0.25, 0.25, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_segment_stopping_short() {
        let [a, b, c] = unit_triangle();
        let segment = Segment::new(Point3::new(0.25, 0.25, 2.0), Point3::new(0.25, 0.25, 0.5));

        assert!(triangle_segment_intersection_two_sided(&a, &b, &c, &segment).is_none());
    }

    #[test]
    fn test_segment_missing_triangle() {
        let [a, b, c] = unit_triangle();
        let segment = Segment::new(Point3::new(0.75, 0.75, 1.0), Point3::new(0.75, 0.75, -1.0));

        assert!(triangle_segment_intersection_two_sided(&a, &b, &c, &segment).is_none());
    }

    #[test]
    fn test_closed_boundaries_count_as_hits() {
        let [a, b, c] = unit_triangle();

        // Crosses exactly on the hypotenuse
        let on_edge = Segment::new(Point3::new(0.5, 0.5, 1.0), Point3::new(0.5, 0.5, -1.0));
        assert!(triangle_segment_intersection_two_sided(&a, &b, &c, &on_edge).is_some());

        // Ends exactly on the triangle
        let on_endpoint = Segment::new(Point3::new(0.2, 0.2, 1.0), Point3::new(0.2, 0.2, 0.0));
        let hit = triangle_segment_intersection_two_sided(&a, &b, &c, &on_endpoint).unwrap();
        assert_relative_eq!(hit, Point3::new(0.2, 0.2, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_segment_is_rejected() {
        let [a, b, c] = unit_triangle();
        let in_plane = Segment::new(Point3::new(-1.0, 0.2, 0.0), Point3::new(2.0, 0.2, 0.0));

        assert!(triangle_segment_intersection_two_sided(&a, &b, &c, &in_plane).is_none());
    }

    #[test]
    fn test_windings_never_disagree() {
        let [a, b, c] = unit_triangle();
        let segments = [
            Segment::new(Point3::new(0.1, 0.3, 0.7), Point3::new(0.3, 0.1, -0.4)),
            Segment::new(Point3::new(0.3, 0.1, -0.4), Point3::new(0.1, 0.3, 0.7)),
            Segment::new(Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, -1.0)),
        ];

        for segment in &segments {
            let front = triangle_segment_intersection(&a, &b, &c, segment);
            let back = triangle_segment_intersection(&a, &c, &b, segment);
            assert!(front.is_none() || back.is_none());
        }
    }

    #[test]
    fn test_point_at() {
        let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, -2.0));
        assert_relative_eq!(segment.point_at(0.5), Point3::new(1.0, 2.0, -1.0));
        assert_relative_eq!(segment.length(), 24.0_f64.sqrt());
    }
}
