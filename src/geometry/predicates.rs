// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometric predicates for tetrahedral cutting
//! Oriented volumes, areas and direction tests

use nalgebra::{Point3, Vector3};

/// Relative tolerance below which two directions count as parallel
pub const PARALLEL_EPS: f64 = 1e-12;

/// Compute oriented volume of tetrahedron (a, b, c, d), scaled by 6.
/// Positive when d lies on the side of plane (a, b, c) its counter-clockwise
/// normal points to.
pub fn oriented_volume(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    ab.dot(&ac.cross(&ad))
}

/// Signed volume of tetrahedron (a, b, c, d)
pub fn tetrahedron_volume(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> f64 {
    oriented_volume(a, b, c, d) / 6.0
}

/// Area of triangle (a, b, c)
pub fn triangle_area(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    (b - a).cross(&(c - a)).norm() / 2.0
}

/// Orientation of a tetrahedron's corner ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Positive,
    Negative,
    Degenerate,
}

/// Classify the corner ordering of tetrahedron (a, b, c, d)
pub fn orientation(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> Orientation {
    let volume = oriented_volume(a, b, c, d);
    if volume > 0.0 {
        Orientation::Positive
    } else if volume < 0.0 {
        Orientation::Negative
    } else {
        Orientation::Degenerate
    }
}

/// Check whether two directions are parallel (or anti-parallel).
/// Zero-length directions are never reported as parallel; callers treat
/// them separately.
pub fn directions_parallel(u: &Vector3<f64>, v: &Vector3<f64>) -> bool {
    let scale = u.norm() * v.norm();
    if scale == 0.0 {
        return false;
    }
    u.cross(v).norm() <= PARALLEL_EPS * scale
}
