// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle surface extracted from a tetrahedral mesh boundary

use super::predicates::triangle_area;
use ahash::AHashMap;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// Unit normal from the triangle's winding; zero for degenerate triangles
    pub fn face_normal(&self, surface: &SurfaceMesh) -> Vector3<f64> {
        let [a, b, c] = self.positions(surface);
        let normal = (b - a).cross(&(c - a));
        normal.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
    }

    fn positions(&self, surface: &SurfaceMesh) -> [Point3<f64>; 3] {
        [
            surface.vertices[self.indices[0]],
            surface.vertices[self.indices[1]],
            surface.vertices[self.indices[2]],
        ]
    }
}

/// Triangular surface mesh
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<Triangle>,
}

impl SurfaceMesh {
    pub fn from_parts(vertices: Vec<Point3<f64>>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Total surface area
    pub fn area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.positions(self);
                triangle_area(&a, &b, &c)
            })
            .sum()
    }

    /// Volume enclosed by the surface (divergence theorem), positive for
    /// outward-wound closed surfaces
    pub fn enclosed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.positions(self);
                a.coords.dot(&b.coords.cross(&c.coords)) / 6.0
            })
            .sum()
    }

    /// A closed, consistently oriented 2-manifold has every directed edge
    /// exactly once, paired with its reverse exactly once.
    pub fn is_closed_manifold(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let mut directed: AHashMap<(usize, usize), usize> = AHashMap::new();
        for tri in &self.triangles {
            let [a, b, c] = tri.indices;
            for edge in [(a, b), (b, c), (c, a)] {
                *directed.entry(edge).or_insert(0) += 1;
            }
        }

        directed
            .iter()
            .all(|(&(u, v), &count)| count == 1 && directed.get(&(v, u)) == Some(&1))
    }
}
