// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Subdivision templates
//!
//! Labels `0..4` are the relabeled corners of the tetrahedron being cut,
//! labels from `4` on are the new intersection vertices in the order the
//! case entry lists them (edge points first, then face points).

use super::cases::{CaseEntry, Family};
use super::classify::{EdgeIntersections, FaceIntersections};
use crate::error::{CutError, CutResult, MeshError};
use crate::geometry::predicates::{orientation, Orientation};
use crate::geometry::{TetMesh, Tetrahedron};
use nalgebra::Point3;
use serde::Serialize;
use std::ops::Range;

/// Fixed connectivity recipe for one family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub family: Family,
    pub new_vertices: usize,
    pub tetrahedra: &'static [[usize; 4]],
}

pub const TEMPLATE_1: Template = Template {
    family: Family::CornerSlice,
    new_vertices: 3,
    tetrahedra: &[[0, 1, 2, 6], [0, 4, 1, 6], [5, 4, 6, 1], [4, 5, 6, 3]],
};

pub const TEMPLATE_2: Template = Template {
    family: Family::Bisection,
    new_vertices: 4,
    tetrahedra: &[
        [4, 6, 5, 3],
        [5, 6, 7, 3],
        [5, 7, 2, 3],
        [4, 5, 6, 0],
        [0, 1, 5, 6],
        [1, 7, 5, 6],
    ],
};

pub const TEMPLATE_3: Template = Template {
    family: Family::SingleEdge,
    new_vertices: 3,
    tetrahedra: &[
        [4, 5, 6, 3],
        [4, 6, 5, 0],
        [5, 2, 6, 3],
        [1, 2, 5, 3],
        [0, 6, 5, 2],
        [0, 1, 2, 5],
    ],
};

pub const TEMPLATE_4: Template = Template {
    family: Family::TwoEdges,
    new_vertices: 4,
    tetrahedra: &[
        [4, 5, 6, 3],
        [4, 6, 7, 3],
        [3, 6, 7, 2],
        [6, 5, 4, 1],
        [7, 6, 4, 1],
        [7, 6, 1, 2],
        [4, 7, 1, 0],
        [0, 1, 2, 7],
    ],
};

pub const TEMPLATE_5: Template = Template {
    family: Family::ThreeEdges,
    new_vertices: 5,
    tetrahedra: &[
        [8, 5, 4, 0],
        [8, 7, 5, 0],
        [0, 7, 2, 8],
        [7, 6, 5, 0],
        [1, 5, 6, 0],
        [4, 5, 8, 3],
        [8, 5, 2, 3],
        [8, 7, 2, 5],
        [7, 6, 2, 5],
    ],
};

impl Template {
    pub fn for_family(family: Family) -> &'static Template {
        match family {
            Family::CornerSlice => &TEMPLATE_1,
            Family::Bisection => &TEMPLATE_2,
            Family::SingleEdge => &TEMPLATE_3,
            Family::TwoEdges => &TEMPLATE_4,
            Family::ThreeEdges => &TEMPLATE_5,
        }
    }

    pub fn tetrahedron_count(&self) -> usize {
        self.tetrahedra.len()
    }
}

/// Rows and vertices produced by one subdivision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdivision {
    pub new_vertices: Range<usize>,
    /// The overwritten row first, then the appended rows
    pub tetrahedra: Vec<usize>,
}

/// Collect the intersection points a case consumes, in template order
pub fn gather_points(
    case: &CaseEntry,
    edges: &EdgeIntersections,
    faces: &FaceIntersections,
) -> CutResult<Vec<Point3<f64>>> {
    let edge_points = case.edge_points().iter().map(|&edge| {
        edges.point(edge).ok_or(CutError::UnclassifiedPattern {
            edge_mask: edges.mask.bits(),
            face_mask: faces.mask.bits(),
        })
    });
    let face_points = case.face_points().iter().map(|&face| {
        faces.point(face).ok_or(CutError::FaceMismatch {
            edge_mask: edges.mask.bits(),
            expected: case.face_mask().bits(),
            found: faces.mask.bits(),
        })
    });
    edge_points.chain(face_points).collect()
}

/// Template labels of one piece, with the first two swapped for mirrored
/// cases
fn piece_labels(case: &CaseEntry, recipe: [usize; 4]) -> [usize; 4] {
    let mut labels = recipe;
    if case.mirrored() {
        labels.swap(0, 1);
    }
    labels
}

/// Reject the subdivision when any piece is flat or does not share the
/// orientation of the tetrahedron being cut.
///
/// `positions` holds the relabeled corners followed by the gathered
/// intersection points.
fn check_pieces(
    case: &CaseEntry,
    template: &Template,
    original: Orientation,
    positions: &[Point3<f64>],
) -> CutResult<()> {
    let degenerate = CutError::DegenerateCut {
        edge_mask: case.edge_mask.bits(),
    };
    if original == Orientation::Degenerate {
        return Err(degenerate);
    }
    for &recipe in template.tetrahedra {
        let [a, b, c, d] = piece_labels(case, recipe).map(|label| positions[label]);
        if orientation(&a, &b, &c, &d) != original {
            return Err(degenerate);
        }
    }
    Ok(())
}

/// Replace tetrahedron `tetrahedron` by the template of `case`.
///
/// All inputs are checked before the mesh is touched; on error the mesh is
/// unchanged.
pub fn subdivide(
    mesh: &mut TetMesh,
    tetrahedron: usize,
    case: &CaseEntry,
    edges: &EdgeIntersections,
    faces: &FaceIntersections,
) -> CutResult<Subdivision> {
    let row = mesh
        .tetrahedra
        .get(tetrahedron)
        .ok_or(CutError::TetrahedronOutOfRange {
            index: tetrahedron,
            count: mesh.tetrahedron_count(),
        })?
        .indices;
    let template = Template::for_family(case.family());
    let points = gather_points(case, edges, faces)?;
    debug_assert_eq!(points.len(), template.new_vertices);

    let mut labels = Vec::with_capacity(4 + points.len());
    labels.extend(case.corner_order.iter().map(|&position| row[position]));

    let mut positions = Vec::with_capacity(labels.len() + points.len());
    for &index in &labels {
        positions.push(*mesh.vertices.get(index).ok_or(MeshError::IndexOutOfBounds {
            tetrahedron,
            index,
            vertex_count: mesh.vertex_count(),
        })?);
    }
    let [a, b, c, d] = row.map(|index| mesh.vertices[index]);
    positions.extend_from_slice(&points);
    check_pieces(case, template, orientation(&a, &b, &c, &d), &positions)?;

    let first_vertex = mesh.vertex_count();
    for point in points {
        labels.push(mesh.add_vertex(point));
    }
    let new_vertices = first_vertex..mesh.vertex_count();

    let mut rows = Vec::with_capacity(template.tetrahedron_count());
    for (k, &recipe) in template.tetrahedra.iter().enumerate() {
        let tet = Tetrahedron::new(piece_labels(case, recipe).map(|label| labels[label]));
        if k == 0 {
            mesh.tetrahedra[tetrahedron] = tet;
            rows.push(tetrahedron);
        } else {
            rows.push(mesh.add_tetrahedron(tet));
        }
    }

    Ok(Subdivision {
        new_vertices,
        tetrahedra: rows,
    })
}
