// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Classification of a tetrahedron against a cutting surface
//!
//! Edges are intersected with the cutting triangle, faces with the two
//! boundary segments. Both tests are two-sided, so the result does not
//! depend on the winding of either primitive.

use super::mask::{IntersectionMask, EDGES, FACES};
use super::surface::CuttingSurface;
use crate::geometry::{triangle_segment_intersection_two_sided, Segment};
use nalgebra::Point3;

/// Which canonical edges the cutting triangle crosses, and where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeIntersections {
    pub mask: IntersectionMask,
    pub points: [Option<Point3<f64>>; 6],
}

impl EdgeIntersections {
    pub fn point(&self, edge: usize) -> Option<Point3<f64>> {
        self.points.get(edge).copied().flatten()
    }
}

/// Which canonical faces the boundary segments cross, and where
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceIntersections {
    pub mask: IntersectionMask,
    pub points: [Option<Point3<f64>>; 4],
    /// Both segments crossed a common face; `mask` was cleared.
    pub conflict: bool,
}

impl FaceIntersections {
    pub fn point(&self, face: usize) -> Option<Point3<f64>> {
        self.points.get(face).copied().flatten()
    }
}

/// Intersect the six edges of `corners` with the cutting triangle
pub fn classify_edges(corners: &[Point3<f64>; 4], surface: &CuttingSurface) -> EdgeIntersections {
    let [apex, far_start, far_end] = surface.triangle();
    let mut mask = IntersectionMask::EMPTY;
    let mut points = [None; 6];

    for (edge, [from, to]) in EDGES.iter().enumerate() {
        let segment = Segment::new(corners[*from], corners[*to]);
        if let Some(hit) =
            triangle_segment_intersection_two_sided(&apex, &far_start, &far_end, &segment)
        {
            mask = mask.with(edge);
            points[edge] = Some(hit);
        }
    }

    EdgeIntersections { mask, points }
}

fn classify_segment(
    corners: &[Point3<f64>; 4],
    segment: &Segment,
    points: &mut [Option<Point3<f64>>; 4],
) -> IntersectionMask {
    let mut mask = IntersectionMask::EMPTY;
    for (face, [a, b, c]) in FACES.iter().enumerate() {
        if let Some(hit) = triangle_segment_intersection_two_sided(
            &corners[*a],
            &corners[*b],
            &corners[*c],
            segment,
        ) {
            mask = mask.with(face);
            points[face] = Some(hit);
        }
    }
    mask
}

/// Intersect the four faces of `corners` with both boundary segments.
///
/// When both segments cross a common face the combined mask is reported
/// as empty. Points found are kept either way.
pub fn classify_faces(corners: &[Point3<f64>; 4], surface: &CuttingSurface) -> FaceIntersections {
    let mut points = [None; 4];
    let start = classify_segment(corners, &surface.start_segment(), &mut points);
    let end = classify_segment(corners, &surface.end_segment(), &mut points);

    let conflict = start.overlaps(end);
    let mask = if conflict {
        log::debug!("boundary segments share crossed faces {}", start & end);
        IntersectionMask::EMPTY
    } else {
        start | end
    };

    FaceIntersections {
        mask,
        points,
        conflict,
    }
}
