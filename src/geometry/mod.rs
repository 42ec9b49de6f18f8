// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - tetrahedral mesh, surfaces and intersection primitives

mod intersection;
pub mod predicates;
mod surface;
mod tet_mesh;
mod transform;

pub use intersection::{
    triangle_segment_intersection, triangle_segment_intersection_two_sided, Segment,
};
pub use surface::{SurfaceMesh, Triangle};
pub use tet_mesh::{TetMesh, Tetrahedron};
pub use transform::CuttingTransform;
