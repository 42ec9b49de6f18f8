// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! tetcut
//!
//! Closed-form cutting of a single tetrahedron by a triangular cutting
//! surface. The six edges of the tetrahedron are classified against the
//! cutting triangle and its four faces against the triangle's two boundary
//! segments; the resulting pattern selects one of five subdivision
//! templates that replace the tetrahedron with a conforming set of smaller
//! ones.

pub mod cli;
pub mod config;
pub mod cut;
pub mod error;
pub mod fuzz;
pub mod geometry;
pub mod io;

pub use config::CutConfig;
pub use cut::{
    cut_tetrahedron, try_cut_tetrahedron, try_cut_tetrahedron_with, try_cut_with_surface,
    CutOptions, CutReport, CutStats, CuttingSurface, Family, IntersectionMask, TetCutter,
};
pub use error::{CutError, CutResult, MeshError};
pub use geometry::{Segment, TetMesh, Tetrahedron};
