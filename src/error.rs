// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for mesh validation and tetrahedron cutting

use thiserror::Error;

/// Errors raised when a tetrahedral mesh violates its index invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A tetrahedron references a vertex that does not exist.
    #[error("tetrahedron {tetrahedron} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        tetrahedron: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// Reasons a cut is rejected. The mesh is never modified when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutError {
    /// The requested tetrahedron row does not exist.
    #[error("tetrahedron {index} is out of range (mesh has {count} tetrahedra)")]
    TetrahedronOutOfRange { index: usize, count: usize },

    /// The target tetrahedron references missing vertices.
    #[error(transparent)]
    InvalidMesh(#[from] MeshError),

    /// The two boundary segments do not start at the same apex.
    #[error("cutting segments do not share an apex")]
    ApexMismatch,

    /// One boundary segment has zero length.
    #[error("cutting segment {0} has zero length")]
    DegenerateDirection(usize),

    /// Both boundary segments point along the same line.
    #[error("cutting segments are parallel; the cutting surface has no area")]
    ParallelDirections,

    /// The edge mask is not one of the known intersection patterns.
    #[error("unclassified intersection pattern (edges {edge_mask:#08b}, faces {face_mask:#06b})")]
    UnclassifiedPattern { edge_mask: u8, face_mask: u8 },

    /// The edge pattern is known but the faces crossed are not the ones its
    /// subdivision needs.
    #[error("edge pattern {edge_mask:#08b} needs faces {expected:#06b} but faces {found:#06b} were crossed")]
    FaceMismatch {
        edge_mask: u8,
        expected: u8,
        found: u8,
    },

    /// The subdivision would contain a flat or inverted tetrahedron, as
    /// when the cutting triangle only touches a corner.
    #[error("edge pattern {edge_mask:#08b} would produce a degenerate tetrahedron")]
    DegenerateCut { edge_mask: u8 },
}

impl CutError {
    /// Short stable name used for statistics and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TetrahedronOutOfRange { .. } => "tetrahedron-out-of-range",
            Self::InvalidMesh(_) => "invalid-mesh",
            Self::ApexMismatch => "apex-mismatch",
            Self::DegenerateDirection(_) => "degenerate-direction",
            Self::ParallelDirections => "parallel-directions",
            Self::UnclassifiedPattern { .. } => "unclassified-pattern",
            Self::FaceMismatch { .. } => "face-mismatch",
            Self::DegenerateCut { .. } => "degenerate-cut",
        }
    }
}

/// Result type for cutting operations.
pub type CutResult<T> = std::result::Result<T, CutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CutError::ApexMismatch;
        assert_eq!(format!("{err}"), "cutting segments do not share an apex");

        let err = CutError::UnclassifiedPattern {
            edge_mask: 0b11_1111,
            face_mask: 0,
        };
        assert!(format!("{err}").contains("0b111111"));

        let err = CutError::TetrahedronOutOfRange { index: 3, count: 1 };
        assert!(format!("{err}").contains("out of range"));

        let err = CutError::DegenerateCut {
            edge_mask: 0b11_1000,
        };
        assert_eq!(err.kind(), "degenerate-cut");
        assert!(format!("{err}").contains("0b111000"));
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: CutError = MeshError::IndexOutOfBounds {
            tetrahedron: 0,
            index: 9,
            vertex_count: 4,
        }
        .into();
        assert_eq!(err.kind(), "invalid-mesh");
        assert!(format!("{err}").contains("vertex 9"));
    }
}
