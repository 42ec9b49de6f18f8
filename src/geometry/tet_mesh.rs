// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tetrahedral mesh representation
//!
//! Vertices and tetrahedra live in two growable arenas. Cutting only ever
//! appends rows or overwrites the row being cut, so indices held by other
//! tetrahedra stay valid across a cut.

use super::predicates::tetrahedron_volume;
use super::surface::{SurfaceMesh, Triangle};
use crate::error::MeshError;
use ahash::AHashMap;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Tetrahedron defined by four vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetrahedron {
    pub indices: [usize; 4],
}

impl Tetrahedron {
    pub fn new(indices: [usize; 4]) -> Self {
        Self { indices }
    }

    /// The four faces, wound so their normals point out of a positively
    /// oriented tetrahedron.
    pub fn outward_faces(&self) -> [[usize; 3]; 4] {
        let [a, b, c, d] = self.indices;
        [[b, c, d], [a, d, c], [a, b, d], [a, c, b]]
    }
}

/// Tetrahedral mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TetMesh {
    pub vertices: Vec<Point3<f64>>,
    pub tetrahedra: Vec<Tetrahedron>,
}

impl TetMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(vertices: Vec<Point3<f64>>, tetrahedra: Vec<Tetrahedron>) -> Self {
        Self {
            vertices,
            tetrahedra,
        }
    }

    /// Mesh holding exactly one tetrahedron over the given corners
    pub fn single(corners: [Point3<f64>; 4]) -> Self {
        Self {
            vertices: corners.to_vec(),
            tetrahedra: vec![Tetrahedron::new([0, 1, 2, 3])],
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a tetrahedron and return its index
    pub fn add_tetrahedron(&mut self, tetrahedron: Tetrahedron) -> usize {
        let index = self.tetrahedra.len();
        self.tetrahedra.push(tetrahedron);
        index
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get tetrahedron count
    pub fn tetrahedron_count(&self) -> usize {
        self.tetrahedra.len()
    }

    /// Corner positions of a tetrahedron, in row order
    pub fn corners(&self, tetrahedron: usize) -> Option<[Point3<f64>; 4]> {
        let tet = self.tetrahedra.get(tetrahedron)?;
        let mut corners = [Point3::origin(); 4];
        for (corner, &index) in corners.iter_mut().zip(tet.indices.iter()) {
            *corner = *self.vertices.get(index)?;
        }
        Some(corners)
    }

    /// Signed volume of a tetrahedron, positive for counter-clockwise
    /// corner ordering
    pub fn signed_volume(&self, tetrahedron: usize) -> Option<f64> {
        let [a, b, c, d] = self.corners(tetrahedron)?;
        Some(tetrahedron_volume(&a, &b, &c, &d))
    }

    /// Sum of signed volumes over all tetrahedra
    pub fn total_volume(&self) -> f64 {
        (0..self.tetrahedra.len())
            .filter_map(|t| self.signed_volume(t))
            .sum()
    }

    /// Check that every tetrahedron references existing vertices
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (t, tet) in self.tetrahedra.iter().enumerate() {
            if let Some(&index) = tet.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::IndexOutOfBounds {
                    tetrahedron: t,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Faces used by exactly one tetrahedron, wound outward.
    ///
    /// Interior faces are shared by two tetrahedra and cancel out.
    pub fn boundary_facets(&self) -> Vec<[usize; 3]> {
        let mut counts: AHashMap<[usize; 3], (usize, [usize; 3])> = AHashMap::new();
        let mut order = Vec::new();

        for tet in &self.tetrahedra {
            for face in tet.outward_faces() {
                let mut key = face;
                key.sort_unstable();
                let entry = counts.entry(key).or_insert_with(|| {
                    order.push(key);
                    (0, face)
                });
                entry.0 += 1;
            }
        }

        order
            .into_iter()
            .filter_map(|key| match counts.get(&key) {
                Some(&(1, face)) => Some(face),
                _ => None,
            })
            .collect()
    }

    /// Outer boundary as a triangle surface sharing this mesh's vertices
    pub fn boundary_surface(&self) -> SurfaceMesh {
        let triangles = self
            .boundary_facets()
            .into_iter()
            .map(Triangle::new)
            .collect();
        SurfaceMesh::from_parts(self.vertices.clone(), triangles)
    }
}
